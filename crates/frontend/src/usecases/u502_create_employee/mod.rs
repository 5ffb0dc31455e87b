pub mod api;
pub mod view;
pub mod view_model;

pub use view::CreateEmployeePage;

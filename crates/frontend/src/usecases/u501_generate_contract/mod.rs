pub mod api;
pub mod state;
pub mod view;
pub mod view_model;

pub use view::GenerateContractPage;

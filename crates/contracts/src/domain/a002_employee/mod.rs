pub mod aggregate;

pub use aggregate::EmployeeWithoutContract;

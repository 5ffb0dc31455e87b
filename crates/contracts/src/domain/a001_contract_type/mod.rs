pub mod aggregate;

pub use aggregate::ContractType;

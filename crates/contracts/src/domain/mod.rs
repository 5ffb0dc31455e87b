pub mod a001_contract_type;
pub mod a002_employee;
pub mod common;

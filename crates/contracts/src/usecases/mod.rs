pub mod common;
pub mod u501_generate_contract;
pub mod u502_create_employee;

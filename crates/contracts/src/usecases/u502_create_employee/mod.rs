pub mod request;
pub mod response;

pub use request::{CreateEmployeeRequest, EmployeeField};
pub use response::{CreateEmployeeOutcome, CreateEmployeeResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct CreateEmployee;

impl UseCaseMetadata for CreateEmployee {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "create_employee"
    }

    fn display_name() -> &'static str {
        "Create employee"
    }

    fn description() -> &'static str {
        "Register an employee together with the terms used in their contract"
    }
}

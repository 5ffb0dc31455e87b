pub mod request;
pub mod response;

pub use request::GenerateContractRequest;
pub use response::{GenerateContractResponse, GenerateOutcome};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateContract;

impl UseCaseMetadata for GenerateContract {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "generate_contract"
    }

    fn display_name() -> &'static str {
        "Generate contract"
    }

    fn description() -> &'static str {
        "Create a contract document for an employee from a contract type template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(GenerateContract::full_name(), "u501_generate_contract");
    }
}

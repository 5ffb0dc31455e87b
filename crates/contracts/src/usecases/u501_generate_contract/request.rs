use serde::Serialize;

use crate::domain::common::RecordId;

/// Body of `POST /create_contract`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateContractRequest {
    pub employee_id: RecordId,
    pub contract_type_id: RecordId,
}

impl GenerateContractRequest {
    pub const PATH: &'static str = "/create_contract";

    pub fn new(employee_id: RecordId, contract_type_id: RecordId) -> Self {
        Self {
            employee_id,
            contract_type_id,
        }
    }
}

use serde::Deserialize;

use crate::domain::common::RecordId;

/// Server-defined contract category; selects the document template
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractType {
    pub id: RecordId,
    pub name: String,
}

impl ContractType {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

use serde::Deserialize;

/// Body returned by `POST /create_contract`: `{"success": true}` or `{"error": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateContractResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Business outcome of a contract creation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Created,
    Rejected { error: Option<String> },
}

impl GenerateContractResponse {
    /// `success: true` is the only success signal
    pub fn outcome(self) -> GenerateOutcome {
        if self.success {
            GenerateOutcome::Created
        } else {
            GenerateOutcome::Rejected {
                error: self.error.filter(|e| !e.trim().is_empty()),
            }
        }
    }
}

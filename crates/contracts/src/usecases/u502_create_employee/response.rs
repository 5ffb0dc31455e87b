use serde::Deserialize;

/// Body returned by `POST /create_employee`; only failures carry data
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateEmployeeOutcome {
    Created,
    Rejected { error: Option<String> },
}

impl CreateEmployeeResponse {
    /// The backend answers `201 Created` on success
    pub const CREATED: u16 = 201;

    pub fn outcome(self, status: u16) -> CreateEmployeeOutcome {
        if status == Self::CREATED {
            CreateEmployeeOutcome::Created
        } else {
            CreateEmployeeOutcome::Rejected {
                error: self.error.filter(|e| !e.trim().is_empty()),
            }
        }
    }
}

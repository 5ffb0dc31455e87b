use serde::Deserialize;

use crate::domain::common::RecordId;

/// Employee that has no generated contract yet, as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeWithoutContract {
    pub id: RecordId,
    pub employee_name: String,
}

impl EmployeeWithoutContract {
    pub fn new(id: impl Into<RecordId>, employee_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            employee_name: employee_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_payload() {
        let list: Vec<EmployeeWithoutContract> = serde_json::from_value(json!([
            { "id": 7, "employee_name": "Jane Doe", "job_title": "Engineer" }
        ]))
        .unwrap();

        assert_eq!(list, vec![EmployeeWithoutContract::new(7, "Jane Doe")]);
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let res = serde_json::from_value::<EmployeeWithoutContract>(json!({ "id": 7 }));
        assert!(res.is_err());
    }
}

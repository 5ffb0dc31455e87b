//! Decisions of the contract generation page, free of any browser calls.
//!
//! The view turns these into alerts, reloads and log lines.

use contracts::usecases::u501_generate_contract::{
    GenerateContractRequest, GenerateContractResponse, GenerateOutcome,
};

use super::state::SelectionState;
use crate::shared::api_error::ApiError;
use crate::shared::page_effect::PageEffect;

pub const SELECTION_REQUIRED: &str = "Please select both employee and contract type.";

pub const GENERATED: &str = "Contract generated successfully.";

/// Alert text when the server rejects without saying why
pub const GENERATION_FAILED: &str = "Contract generation failed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPlan {
    Submit(GenerateContractRequest),
    Reject(Vec<PageEffect>),
}

/// Enablement of the generate button
pub fn can_generate(state: &SelectionState) -> bool {
    state.is_ready()
}

/// Re-check the selection when the user confirms
pub fn plan_confirm(state: &SelectionState) -> ConfirmPlan {
    match state.ready_pair() {
        Some((employee_id, contract_type_id)) => ConfirmPlan::Submit(
            GenerateContractRequest::new(employee_id.clone(), contract_type_id.clone()),
        ),
        None => ConfirmPlan::Reject(vec![PageEffect::Alert(SELECTION_REQUIRED.to_string())]),
    }
}

/// What to do once the creation call finished
pub fn effects_for(result: Result<GenerateContractResponse, ApiError>) -> Vec<PageEffect> {
    let response = match result {
        Ok(response) => response,
        Err(e) => return vec![PageEffect::Log(format!("contract generation: {}", e))],
    };

    match response.outcome() {
        GenerateOutcome::Created => {
            vec![PageEffect::Alert(GENERATED.to_string()), PageEffect::Reload]
        }
        GenerateOutcome::Rejected { error } => vec![PageEffect::Alert(
            error.unwrap_or_else(|| GENERATION_FAILED.to_string()),
        )],
    }
}

/// A list that failed to load stays empty and only leaves a console trace
pub fn load_failure_effects(list: &str, err: &ApiError) -> Vec<PageEffect> {
    vec![PageEffect::Log(format!("loading {}: {}", list, err))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_contract_type::ContractType;
    use contracts::domain::a002_employee::EmployeeWithoutContract;
    use contracts::domain::common::RecordId;
    use serde_json::json;

    fn response(body: serde_json::Value) -> Result<GenerateContractResponse, ApiError> {
        Ok(serde_json::from_value(body).unwrap())
    }

    fn has_alert(effects: &[PageEffect]) -> bool {
        effects.iter().any(|e| matches!(e, PageEffect::Alert(_)))
    }

    #[test]
    fn test_confirm_without_selection_is_rejected() {
        let mut employee_only = SelectionState::default();
        employee_only.select_employee(RecordId::from(7));

        for state in [SelectionState::default(), employee_only] {
            assert!(!can_generate(&state));
            assert_eq!(
                plan_confirm(&state),
                ConfirmPlan::Reject(vec![PageEffect::Alert(SELECTION_REQUIRED.to_string())])
            );
        }
    }

    #[test]
    fn test_full_scenario_success() {
        let types: Vec<ContractType> =
            serde_json::from_value(json!([{ "id": 1, "name": "Full-time" }])).unwrap();
        let employees: Vec<EmployeeWithoutContract> =
            serde_json::from_value(json!([{ "id": 7, "employee_name": "Jane Doe" }])).unwrap();

        let mut state = SelectionState::default();
        state.select_contract_type(types[0].id.clone());
        state.select_employee(employees[0].id.clone());
        assert!(can_generate(&state));

        let request = match plan_confirm(&state) {
            ConfirmPlan::Submit(request) => request,
            ConfirmPlan::Reject(effects) => panic!("rejected: {:?}", effects),
        };
        assert_eq!(request.employee_id, RecordId::from(7));
        assert_eq!(request.contract_type_id, RecordId::from(1));

        let effects = effects_for(response(json!({ "success": true })));
        assert_eq!(
            effects,
            vec![PageEffect::Alert(GENERATED.into()), PageEffect::Reload]
        );
    }

    #[test]
    fn test_success_flag_false_is_failure() {
        let effects = effects_for(response(json!({ "success": false })));
        assert_eq!(effects, vec![PageEffect::Alert(GENERATION_FAILED.into())]);
    }

    #[test]
    fn test_business_error_shown_verbatim_without_reload() {
        let effects = effects_for(response(json!({ "error": "Employee already has a contract" })));
        assert_eq!(
            effects,
            vec![PageEffect::Alert("Employee already has a contract".into())]
        );
    }

    #[test]
    fn test_rejection_with_client_status_reaches_user() {
        let body: Result<GenerateContractResponse, _> =
            serde_json::from_str(r#"{"error": "Employee already has a contract"}"#);
        let result = crate::system::auth::api::classify(false, 409, body).map(|reply| reply.body);
        assert_eq!(
            effects_for(result),
            vec![PageEffect::Alert("Employee already has a contract".into())]
        );
    }

    #[test]
    fn test_unknown_body_uses_generic_message() {
        let effects = effects_for(response(json!({})));
        assert_eq!(effects, vec![PageEffect::Alert(GENERATION_FAILED.into())]);
    }

    #[test]
    fn test_transport_failure_only_logs() {
        let effects = effects_for(Err(ApiError::Transport("NetworkError".into())));
        assert!(!has_alert(&effects));
        assert!(!effects.contains(&PageEffect::Reload));
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], PageEffect::Log(msg) if msg.contains("NetworkError")));
    }

    #[test]
    fn test_load_failure_only_logs() {
        let effects = load_failure_effects("contract types", &ApiError::Http { status: 500 });
        assert_eq!(
            effects,
            vec![PageEffect::Log(
                "loading contract types: server responded with HTTP 500".into()
            )]
        );
    }
}

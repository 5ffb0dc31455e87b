use contracts::domain::common::RecordId;
use leptos::prelude::*;

/// Current employee / contract type choice of the page.
///
/// Mutated only from click handlers; lost on page reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_employee_id: Option<RecordId>,
    pub selected_contract_type_id: Option<RecordId>,
}

impl SelectionState {
    /// Selecting an empty id clears the slot
    pub fn select_employee(&mut self, id: RecordId) {
        self.selected_employee_id = Some(id).filter(|id| !id.is_empty());
    }

    pub fn select_contract_type(&mut self, id: RecordId) {
        self.selected_contract_type_id = Some(id).filter(|id| !id.is_empty());
    }

    /// `(employee_id, contract_type_id)` once both are chosen
    pub fn ready_pair(&self) -> Option<(&RecordId, &RecordId)> {
        let employee = self.selected_employee_id.as_ref().filter(|id| !id.is_empty())?;
        let contract_type = self
            .selected_contract_type_id
            .as_ref()
            .filter(|id| !id.is_empty())?;
        Some((employee, contract_type))
    }

    pub fn is_ready(&self) -> bool {
        self.ready_pair().is_some()
    }
}

pub fn create_state() -> RwSignal<SelectionState> {
    RwSignal::new(SelectionState::default())
}

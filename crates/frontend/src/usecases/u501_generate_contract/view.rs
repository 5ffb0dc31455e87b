use contracts::domain::a001_contract_type::ContractType;
use contracts::domain::a002_employee::EmployeeWithoutContract;
use contracts::domain::common::RecordId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_contract::GenerateContract;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::state::create_state;
use super::view_model::{can_generate, effects_for, load_failure_effects, plan_confirm, ConfirmPlan};
use crate::domain::{a001_contract_type, a002_employee};
use crate::shared::page_effect::run_effects;
use crate::shared::picker_list::{entries_for, find_label, SelectableList};

#[component]
pub fn GenerateContractPage() -> impl IntoView {
    log::debug!("{} mounted", GenerateContract::full_name());
    let state = create_state();
    let (contract_types, set_contract_types) = signal(None::<Vec<ContractType>>);
    let (employees, set_employees) = signal(None::<Vec<EmployeeWithoutContract>>);
    let (submitting, set_submitting) = signal(false);

    // Both lists load independently, each task writes only its own signal
    spawn_local(async move {
        match a001_contract_type::api::fetch_contract_types().await {
            Ok(items) => {
                log::debug!("loaded {} contract types", items.len());
                set_contract_types.set(Some(items));
            }
            Err(e) => run_effects(load_failure_effects("contract types", &e)),
        }
    });
    spawn_local(async move {
        match a002_employee::api::fetch_employees_without_contract().await {
            Ok(items) => {
                log::debug!("loaded {} employees without contract", items.len());
                set_employees.set(Some(items));
            }
            Err(e) => run_effects(load_failure_effects("employees without contract", &e)),
        }
    });

    let ready = Memo::new(move |_| state.with(can_generate));

    let contract_type_entries = Signal::derive(move || {
        contract_types.with(|items| {
            entries_for(items.as_deref(), a001_contract_type::EMPTY_PLACEHOLDER)
        })
    });
    let employee_entries = Signal::derive(move || {
        employees.with(|items| entries_for(items.as_deref(), a002_employee::EMPTY_PLACEHOLDER))
    });

    let selected_contract_type =
        Signal::derive(move || state.with(|s| s.selected_contract_type_id.clone()));
    let selected_employee = Signal::derive(move || state.with(|s| s.selected_employee_id.clone()));

    let contract_type_label = move || {
        let id = selected_contract_type.get()?;
        contract_types.with(|items| items.as_deref().and_then(|items| find_label(items, &id)))
    };
    let employee_label = move || {
        let id = selected_employee.get()?;
        employees.with(|items| items.as_deref().and_then(|items| find_label(items, &id)))
    };

    let on_contract_type_select = Callback::new(move |id: RecordId| {
        log::debug!("contract type selected: {}", id);
        state.update(|s| s.select_contract_type(id));
    });
    let on_employee_select = Callback::new(move |id: RecordId| {
        log::debug!("employee selected: {}", id);
        state.update(|s| s.select_employee(id));
    });

    let on_confirm = move |_| {
        if submitting.get_untracked() {
            return;
        }
        match plan_confirm(&state.get_untracked()) {
            ConfirmPlan::Reject(effects) => run_effects(effects),
            ConfirmPlan::Submit(request) => {
                set_submitting.set(true);
                spawn_local(async move {
                    let result = api::generate_contract(&request).await;
                    set_submitting.set(false);
                    run_effects(effects_for(result));
                });
            }
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{GenerateContract::display_name()}</h1>
                    <p class="header__subtitle">{GenerateContract::description()}</p>
                </div>
            </div>

            <div class="generate-contract">
                <section class="generate-contract__field">
                    <h3>"Employee"</h3>
                    <span id="employee-name" class="generate-contract__selected">
                        {move || employee_label().unwrap_or_default()}
                    </span>
                    <SelectableList
                        list_id="employees-list"
                        entries=employee_entries
                        selected_id=selected_employee
                        on_select=on_employee_select
                    />
                </section>

                <section class="generate-contract__field">
                    <h3>"Contract type"</h3>
                    <span id="contract-type-name" class="generate-contract__selected">
                        {move || contract_type_label().unwrap_or_default()}
                    </span>
                    <SelectableList
                        list_id="contract-types-list"
                        entries=contract_type_entries
                        selected_id=selected_contract_type
                        on_select=on_contract_type_select
                    />
                </section>

                <div class="generate-contract__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_confirm
                        disabled=Signal::derive(move || !ready.get() || submitting.get())
                    >
                        {move || if submitting.get() { "Generating..." } else { GenerateContract::display_name() }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

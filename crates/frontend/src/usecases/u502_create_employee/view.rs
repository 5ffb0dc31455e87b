use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_create_employee::{
    CreateEmployee, CreateEmployeeRequest, EmployeeField,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::view_model::{effects_for, field_kind, field_label, FieldKind};
use crate::shared::page_effect::run_effects;

#[component]
pub fn CreateEmployeePage() -> impl IntoView {
    log::debug!("{} mounted", CreateEmployee::full_name());
    let form = RwSignal::new(CreateEmployeeRequest::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = form.get_untracked();
        set_submitting.set(true);
        spawn_local(async move {
            let result = api::create_employee(&request).await;
            set_submitting.set(false);
            run_effects(effects_for(&request.employee_name, result));
        });
    };

    let fields = EmployeeField::ALL
        .into_iter()
        .map(|field| {
            let key = field.key();
            let required = field == EmployeeField::EmployeeName;
            let value = move || form.with(|f| f.get(field).to_string());
            let on_input = move |ev: leptos::ev::Event| {
                form.update(|f| f.set(field, event_target_value(&ev)));
            };

            let input = match field_kind(field) {
                FieldKind::LongText => view! {
                    <textarea
                        id=key
                        prop:value=value
                        on:input=on_input
                        disabled=move || submitting.get()
                    ></textarea>
                }
                .into_any(),
                kind => view! {
                    <input
                        type=kind.input_type()
                        id=key
                        prop:value=value
                        on:input=on_input
                        required=required
                        disabled=move || submitting.get()
                    />
                }
                .into_any(),
            };

            view! {
                <div class="form-group">
                    <label for=key>{field_label(field)}</label>
                    {input}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{CreateEmployee::display_name()}</h1>
                    <p class="header__subtitle">{CreateEmployee::description()}</p>
                </div>
            </div>

            <form class="create-employee" on:submit=on_submit>
                {fields}
                <div class="create-employee__actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Saving..." } else { CreateEmployee::display_name() }}
                    </button>
                </div>
            </form>
        </div>
    }
}

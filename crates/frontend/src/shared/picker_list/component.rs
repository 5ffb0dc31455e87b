use contracts::domain::common::RecordId;
use leptos::prelude::*;

use super::entries::ListEntry;

/// Dropdown menu of selectable entries.
///
/// Renders nothing until `entries` is populated. Placeholders are plain
/// list items; selectable entries carry their id in `data-id` and report it
/// through `on_select` when clicked.
#[component]
pub fn SelectableList(
    /// DOM id of the `<ul>`
    #[prop(into)]
    list_id: String,
    /// Entries to render
    #[prop(into)]
    entries: Signal<Vec<ListEntry>>,
    /// Currently selected id, highlighted as active
    #[prop(into)]
    selected_id: Signal<Option<RecordId>>,
    /// Click on a selectable entry
    on_select: Callback<RecordId>,
) -> impl IntoView {
    view! {
        <ul id=list_id class="dropdown-menu">
            {move || {
                entries
                    .get()
                    .into_iter()
                    .map(|entry| match entry {
                        ListEntry::Placeholder(text) => {
                            view! { <li class="list-group-item">{text}</li> }.into_any()
                        }
                        ListEntry::Selectable { id, label } => {
                            let data_id = id.to_string();
                            let id_for_active = id.clone();
                            view! {
                                <li>
                                    <a
                                        class="dropdown-item"
                                        class:active=move || {
                                            selected_id.get().as_ref() == Some(&id_for_active)
                                        }
                                        href="#"
                                        data-id=data_id
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            on_select.run(id.clone());
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}

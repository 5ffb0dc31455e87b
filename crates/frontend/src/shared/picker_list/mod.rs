//! Selectable dropdown lists
//!
//! Any backend record implementing [`PickerItem`] can be shown as a dropdown
//! of clickable entries:
//!
//! ```rust,ignore
//! let entries = Signal::derive(move || {
//!     entries_for(items.get().as_deref(), "Nothing to choose from.")
//! });
//!
//! view! {
//!     <SelectableList
//!         list_id="contract-types-list"
//!         entries=entries
//!         selected_id=selected
//!         on_select=Callback::new(move |id| { /* ... */ })
//!     />
//! }
//! ```

pub mod component;
pub mod entries;
pub mod traits;

pub use component::SelectableList;
pub use entries::{build_entries, entries_for, find_label, ListEntry};
pub use traits::PickerItem;

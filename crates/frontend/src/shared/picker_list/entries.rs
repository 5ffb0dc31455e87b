use contracts::domain::common::RecordId;

use super::traits::PickerItem;

/// One rendered row of a dropdown list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    /// Non-interactive text shown when the backend returned nothing
    Placeholder(String),
    Selectable { id: RecordId, label: String },
}

impl ListEntry {
    pub fn is_selectable(&self) -> bool {
        matches!(self, ListEntry::Selectable { .. })
    }
}

/// Entries for a loaded list: one per item, or a single placeholder when empty
pub fn build_entries<T: PickerItem>(items: &[T], placeholder: &str) -> Vec<ListEntry> {
    if items.is_empty() {
        return vec![ListEntry::Placeholder(placeholder.to_string())];
    }
    items
        .iter()
        .map(|item| ListEntry::Selectable {
            id: item.id(),
            label: item.display_name(),
        })
        .collect()
}

/// Like [`build_entries`], but a list that never loaded renders nothing
pub fn entries_for<T: PickerItem>(items: Option<&[T]>, placeholder: &str) -> Vec<ListEntry> {
    match items {
        Some(items) => build_entries(items, placeholder),
        None => Vec::new(),
    }
}

/// Display name of the item with the given id
pub fn find_label<T: PickerItem>(items: &[T], id: &RecordId) -> Option<String> {
    items
        .iter()
        .find(|item| &item.id() == id)
        .map(PickerItem::display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(i64, &'static str);

    impl PickerItem for Item {
        fn id(&self) -> RecordId {
            RecordId::from(self.0)
        }

        fn display_name(&self) -> String {
            self.1.to_string()
        }
    }

    #[test]
    fn test_empty_list_renders_single_placeholder() {
        let entries = build_entries::<Item>(&[], "No contract types available.");
        assert_eq!(
            entries,
            vec![ListEntry::Placeholder("No contract types available.".into())]
        );
        assert_eq!(entries.iter().filter(|e| e.is_selectable()).count(), 0);
    }

    #[test]
    fn test_one_entry_per_item_with_source_id() {
        let items = [Item(1, "Full-time"), Item(2, "Part-time"), Item(10, "Freelance")];
        let entries = build_entries(&items, "unused");

        assert_eq!(entries.len(), items.len());
        for (entry, item) in entries.iter().zip(items.iter()) {
            match entry {
                ListEntry::Selectable { id, label } => {
                    assert_eq!(id, &item.id());
                    assert_eq!(label, item.1);
                }
                ListEntry::Placeholder(_) => panic!("unexpected placeholder"),
            }
        }
    }

    #[test]
    fn test_unloaded_list_is_unpopulated() {
        assert!(entries_for::<Item>(None, "placeholder").is_empty());
        assert_eq!(entries_for::<Item>(Some(&[]), "placeholder").len(), 1);
    }

    #[test]
    fn test_find_label() {
        let items = [Item(7, "Jane Doe"), Item(8, "John Roe")];
        assert_eq!(find_label(&items, &RecordId::from(8)), Some("John Roe".into()));
        assert_eq!(find_label(&items, &RecordId::from(9)), None);
    }
}

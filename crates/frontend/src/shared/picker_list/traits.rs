use contracts::domain::common::RecordId;

/// Record that can be picked from a dropdown list
pub trait PickerItem {
    fn id(&self) -> RecordId;
    fn display_name(&self) -> String;
}

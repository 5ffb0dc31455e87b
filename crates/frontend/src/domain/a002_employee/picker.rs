use contracts::domain::a002_employee::EmployeeWithoutContract;
use contracts::domain::common::RecordId;

use crate::shared::picker_list::PickerItem;

impl PickerItem for EmployeeWithoutContract {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.employee_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_employee::EMPTY_PLACEHOLDER;
    use crate::shared::picker_list::{build_entries, find_label, ListEntry};

    #[test]
    fn test_empty_employee_list() {
        let entries = build_entries::<EmployeeWithoutContract>(&[], EMPTY_PLACEHOLDER);
        assert_eq!(
            entries,
            vec![ListEntry::Placeholder(
                "No employees found without contracts.".into()
            )]
        );
    }

    #[test]
    fn test_selected_employee_label() {
        let employees = [
            EmployeeWithoutContract::new(7, "Jane Doe"),
            EmployeeWithoutContract::new("e-8", "John Roe"),
        ];
        assert_eq!(
            find_label(&employees, &RecordId::new("e-8")),
            Some("John Roe".into())
        );
    }
}

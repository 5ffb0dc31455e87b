use contracts::domain::a001_contract_type::ContractType;
use contracts::domain::common::RecordId;

use crate::shared::picker_list::PickerItem;

impl PickerItem for ContractType {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

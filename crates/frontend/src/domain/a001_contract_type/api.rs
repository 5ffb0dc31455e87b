use contracts::domain::a001_contract_type::ContractType;

use crate::shared::api_error::ApiError;
use crate::system::auth::api::fetch_with_auth;

pub async fn fetch_contract_types() -> Result<Vec<ContractType>, ApiError> {
    fetch_with_auth("/get_contract_types").await
}

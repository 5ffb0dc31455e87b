use contracts::domain::a002_employee::EmployeeWithoutContract;

use crate::shared::api_error::ApiError;
use crate::system::auth::api::fetch_with_auth;

pub async fn fetch_employees_without_contract() -> Result<Vec<EmployeeWithoutContract>, ApiError> {
    fetch_with_auth("/employees_wo_contract").await
}

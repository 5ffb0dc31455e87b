use contracts::usecases::u502_create_employee::{CreateEmployeeRequest, CreateEmployeeResponse};

use crate::shared::api_error::ApiError;
use crate::system::auth::api::{post_json_with_auth, ApiReply};

/// Success is signalled by the status, so the reply keeps it
pub async fn create_employee(
    request: &CreateEmployeeRequest,
) -> Result<ApiReply<CreateEmployeeResponse>, ApiError> {
    post_json_with_auth(CreateEmployeeRequest::PATH, request).await
}

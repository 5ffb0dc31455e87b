use contracts::usecases::u501_generate_contract::{
    GenerateContractRequest, GenerateContractResponse,
};

use crate::shared::api_error::ApiError;
use crate::system::auth::api::post_json_with_auth;

/// Ask the backend to create the contract document; attempted exactly once
pub async fn generate_contract(
    request: &GenerateContractRequest,
) -> Result<GenerateContractResponse, ApiError> {
    post_json_with_auth(GenerateContractRequest::PATH, request)
        .await
        .map(|reply| reply.body)
}

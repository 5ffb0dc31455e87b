use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage;
use crate::shared::api_error::ApiError;
use crate::shared::api_utils::{api_url, bearer_header};

/// Parsed response body together with its HTTP status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply<T> {
    pub status: u16,
    pub body: T,
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => {
            log::warn!("no access token in session storage, sending unauthenticated request");
            builder
        }
    }
}

/// GET with authentication; non-2xx responses are errors
pub async fn fetch_with_auth<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("GET {}", url);

    let response = with_auth(Request::get(&url)).send().await?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }

    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// POST a JSON body with authentication.
///
/// The response body is parsed whatever the status, see [`classify`].
pub async fn post_json_with_auth<B, T>(path: &str, body: &B) -> Result<ApiReply<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("POST {}", url);

    let response = with_auth(Request::post(&url)).json(body)?.send().await?;
    let text = response.text().await?;

    classify(
        response.ok(),
        response.status(),
        serde_json::from_str::<T>(&text),
    )
}

/// Business errors come back as `4xx` with a JSON `error` field, so a body
/// that parses is returned whatever the status. A body that does not parse
/// is [`ApiError::Http`] on non-2xx and [`ApiError::Parse`] otherwise.
pub fn classify<T>(
    ok: bool,
    status: u16,
    body: Result<T, serde_json::Error>,
) -> Result<ApiReply<T>, ApiError> {
    match body {
        Ok(body) => Ok(ApiReply { status, body }),
        Err(_) if !ok => Err(ApiError::Http { status }),
        Err(e) => Err(e.into()),
    }
}

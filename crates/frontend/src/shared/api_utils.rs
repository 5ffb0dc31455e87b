//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and request headers.

use super::config;

/// Get the base URL for API requests, without a trailing slash
pub fn api_base() -> String {
    config::backend_api_url()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/get_contract_types");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Join a base URL and a path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `Authorization` header value for a bearer token
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token)
}

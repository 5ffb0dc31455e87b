use web_sys::window;

use crate::shared::config::ACCESS_TOKEN_KEY;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Get access token from sessionStorage.
///
/// The token is issued and stored by the login flow; this page only reads it.
pub fn get_access_token() -> Option<String> {
    get_session_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.is_empty())
}

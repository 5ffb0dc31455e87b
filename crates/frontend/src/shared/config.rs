//! Frontend configuration
//!
//! The backend base URL is resolved in this order:
//! 1. `<meta name="backend-api-url" content="...">` in the host page
//! 2. `BACKEND_API_URL` captured at compile time
//! 3. the current window location with port 3000

/// Name of the meta tag carrying the backend base URL
pub const BACKEND_URL_META: &str = "backend-api-url";

/// Session storage key holding the bearer token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

const COMPILED_BACKEND_URL: Option<&str> = option_env!("BACKEND_API_URL");

const FALLBACK_PORT: u16 = 3000;

/// Strip whitespace and trailing slashes; blank input yields `None`
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Pick the first usable candidate, falling back to `location_fallback`
pub fn resolve_base_url(
    meta: Option<&str>,
    compiled: Option<&str>,
    location_fallback: impl FnOnce() -> String,
) -> String {
    meta.and_then(normalize_base_url)
        .or_else(|| compiled.and_then(normalize_base_url))
        .unwrap_or_else(location_fallback)
}

/// Backend base URL for the current page
pub fn backend_api_url() -> String {
    let meta = meta_backend_url();
    resolve_base_url(meta.as_deref(), COMPILED_BACKEND_URL, location_base_url)
}

fn meta_backend_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", BACKEND_URL_META);
    document
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}

fn location_base_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, FALLBACK_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_fallback() -> String {
        panic!("fallback must not be used")
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/ "),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(
            normalize_base_url("http://localhost:5000//"),
            Some("http://localhost:5000".to_string())
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn test_meta_wins_over_compiled() {
        let url = resolve_base_url(
            Some("https://meta.example.com"),
            Some("https://compiled.example.com"),
            unreachable_fallback,
        );
        assert_eq!(url, "https://meta.example.com");
    }

    #[test]
    fn test_blank_meta_is_skipped() {
        let url = resolve_base_url(Some(""), Some("https://compiled.example.com/"), unreachable_fallback);
        assert_eq!(url, "https://compiled.example.com");
    }

    #[test]
    fn test_location_fallback() {
        let url = resolve_base_url(None, None, || "http://127.0.0.1:3000".to_string());
        assert_eq!(url, "http://127.0.0.1:3000");
    }
}

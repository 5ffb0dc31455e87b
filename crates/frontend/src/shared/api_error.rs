use thiserror::Error;

/// Failure of a backend call below the business level.
///
/// Business errors (`{"error": ...}` bodies) are not represented here,
/// they arrive as successfully parsed responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to send request: {0}")]
    Transport(String),

    #[error("server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::Http { status: 401 }.to_string(),
            "server responded with HTTP 401"
        );
        assert_eq!(
            ApiError::Transport("connection refused".into()).to_string(),
            "failed to send request: connection refused"
        );
    }
}

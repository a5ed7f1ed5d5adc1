use thiserror::Error;

/// Failure of a single call against the Shopify Admin API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Upstream was reachable but answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The call could not complete or its body could not be decoded.
    #[error("{0}")]
    Transport(String),
}

impl UpstreamError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Upstream status code, if the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(format!("Failed to decode upstream payload: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_keeps_status() {
        let err = UpstreamError::http(429, "429 Too Many Requests for url: https://x");
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "429 Too Many Requests for url: https://x");
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = UpstreamError::transport("connection refused");
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_decode_failure_is_transport() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: UpstreamError = json_err.into();
        assert!(matches!(err, UpstreamError::Transport(_)));
        assert!(err.to_string().starts_with("Failed to decode upstream payload"));
    }
}

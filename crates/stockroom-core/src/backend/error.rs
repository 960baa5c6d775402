use std::fmt;

use serde_json::Value;

/// Error category for backend failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// HTTP status error (4xx, 5xx)
    Http,
    /// Connection failure or timeout
    Network,
    /// Response body did not match the expected shape
    Parse,
    /// No signed-in session to authorize the request
    Unauthenticated,
}

impl fmt::Display for BackendErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendErrorKind::Http => write!(f, "http"),
            BackendErrorKind::Network => write!(f, "network"),
            BackendErrorKind::Parse => write!(f, "parse"),
            BackendErrorKind::Unauthenticated => write!(f, "unauthenticated"),
        }
    }
}

/// Structured error from an auth or store call.
#[derive(Debug, Clone)]
pub struct BackendError {
    pub kind: BackendErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional raw details (e.g. response body)
    pub details: Option<String>,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, pulling `error.message` out of a
    /// Google-style JSON error body when present.
    pub fn http_status(status: u16, body: &str) -> Self {
        if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(msg) = json
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        {
            return Self {
                kind: BackendErrorKind::Http,
                message: format!("HTTP {status}: {msg}"),
                details: Some(body.to_string()),
            };
        }
        Self {
            kind: BackendErrorKind::Http,
            message: format!("HTTP {status}"),
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Parse, message)
    }

    pub fn unauthenticated() -> Self {
        Self::new(BackendErrorKind::Unauthenticated, "Not signed in")
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BackendError {}

/// Result type for backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

pub(crate) fn classify_reqwest_error(e: &reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::new(BackendErrorKind::Network, format!("Request timed out: {e}"))
    } else if e.is_connect() {
        BackendError::new(BackendErrorKind::Network, format!("Connection failed: {e}"))
    } else if e.is_decode() {
        BackendError::parse(format!("Invalid response body: {e}"))
    } else {
        BackendError::new(BackendErrorKind::Network, format!("Network error: {e}"))
    }
}

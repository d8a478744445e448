use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// No response was received (connection refused, timeout, DNS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("Backend returned status {code}")]
    Status { code: u16, message: Option<String> },

    /// The response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Parse(String),

    /// The background worker is gone, so the request was never sent
    #[error("API worker unavailable")]
    WorkerUnavailable,
}

impl ApiError {
    /// Human-readable message reported by the backend, if it sent one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Backend message when available, otherwise `fallback`
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.backend_message().unwrap_or(fallback)
    }
}

use thiserror::Error;

/// Uniform error for every backend-calling function. The backend is
/// inconsistent about signalling failure (non-2xx status vs. an `{error}`
/// field inside a 200 body); both paths land here so call sites
/// pattern-match on one type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, timeout, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx HTTP response.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body could not be decoded.
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    /// Business-rule rejection carried as `{"error": "..."}` in a 2xx body.
    #[error("{0}")]
    Rejected(String),

    /// An authenticated call was attempted with no live session.
    #[error("not authenticated")]
    Unauthorized,
}

impl ApiError {
    /// The message suitable for a toast or inline notification. Rejections
    /// and status messages come from the backend verbatim; transport and
    /// decoding failures get a generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(message) => message.clone(),
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Unauthorized => "Session expired. Please log in again.".to_string(),
            _ => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}

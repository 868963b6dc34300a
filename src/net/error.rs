//! Error type shared by all API calls.

/// Failure of a request against the archive API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Called outside the browser (SSR or native tests).
    #[error("not available outside the browser")]
    Unavailable,
    /// The call needs a bearer token and none is stored.
    #[error("authentication required")]
    Unauthenticated,
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the server no longer accepts the session.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::Status { status: 401 | 403, .. }
        )
    }

    /// Message suitable for showing inline on a page.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected(message) if !message.is_empty() => {
                message.clone()
            }
            ApiError::Network(_) => "Could not reach the server. Please try again.".to_owned(),
            ApiError::Unauthenticated => "Please sign in again.".to_owned(),
            _ => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

use thiserror::Error;

/// Errors returned by the persistence API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the best-effort text extracted from
    /// the body, or the operation's default message.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// No token is stored; the user must log in.
    #[error("not logged in")]
    NotAuthenticated,

    /// The server rejected the stored token; the session has been cleared.
    #[error("session expired, please log in again")]
    SessionExpired,

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("session file {path}: {source}")]
    SessionIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is corrupt: {source}")]
    SessionFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// `true` when the caller should send the user back to the login screen.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated | ApiError::SessionExpired)
    }
}

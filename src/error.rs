//! Error types for Tandem.
//!
//! Uses thiserror for ergonomic error definitions. The backend's single
//! undifferentiated "call failed" error is split into a small closed set
//! of kinds so callers can branch instead of matching message strings.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Auth errors
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Transport errors
    #[error("Network error: {0}")]
    Network(String),

    // Any other non-success backend reply
    #[error("Backend error {status}: {message}")]
    Backend { status: u16, message: String },

    // Startup errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Classify a non-success backend status plus its message body.
    pub fn from_status(status: u16, message: String, what: &str) -> Self {
        match status {
            401 | 403 => Self::Unauthenticated,
            // 406 is the table store's "expected a single row" miss
            404 | 406 => Self::NotFound(what.to_string()),
            400 | 422 => Self::Validation(message),
            _ => Self::Backend { status, message },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::InvalidCredentials)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

// Convenience conversions
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Network(err.to_string())
        } else if err.is_decode() {
            Self::Internal(format!("Malformed backend response: {}", err))
        } else {
            Self::Network(format!("HTTP request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("Invalid backend URL: {}", err))
    }
}

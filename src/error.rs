// src/error.rs
use std::fmt;

/// Failure while asking the status API about the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Timeout,
    ConnectionFailure(String),
    HttpStatus(u16),
    MalformedResponse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "Status request timed out"),
            Self::ConnectionFailure(e) => write!(f, "Failed to reach status API: {}", e),
            Self::HttpStatus(code) => write!(f, "Status API returned HTTP {}", code),
            Self::MalformedResponse(e) => write!(f, "Could not decode status API response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Failure while delivering a message to the webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    Timeout,
    ConnectionFailure(String),
    HttpStatus(u16),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "Webhook request timed out"),
            Self::ConnectionFailure(e) => write!(f, "Failed to reach webhook: {}", e),
            Self::HttpStatus(code) => write!(f, "Webhook returned HTTP {}", code),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Anything that aborted a single poll tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    Fetch(FetchError),
    Unexpected(String),
}

impl TickError {
    /// The server address is the likely culprit when the status API answers 404.
    pub fn suggests_bad_address(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::HttpStatus(404)))
    }
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "{}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error while checking players: {}", e),
        }
    }
}

impl std::error::Error for TickError {}

impl From<FetchError> for TickError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

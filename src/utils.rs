// src/utils.rs
use chrono::Local;
use crate::error::{FetchError, NotifyError};

/// Wall-clock stamp embedded in outgoing messages, e.g. `[14:03:27]`.
pub fn clock_stamp() -> String {
    Local::now().format("[%H:%M:%S]").to_string()
}

/// Transport-level classification shared by the fetcher and the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpFailure {
    Timeout,
    Status(u16),
    Connection(String),
}

pub fn classify_reqwest_error(e: &reqwest::Error) -> HttpFailure {
    if e.is_timeout() {
        HttpFailure::Timeout
    } else if let Some(status) = e.status() {
        HttpFailure::Status(status.as_u16())
    } else {
        HttpFailure::Connection(e.to_string())
    }
}

impl From<HttpFailure> for FetchError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Timeout => FetchError::Timeout,
            HttpFailure::Status(code) => FetchError::HttpStatus(code),
            HttpFailure::Connection(e) => FetchError::ConnectionFailure(e),
        }
    }
}

impl From<HttpFailure> for NotifyError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Timeout => NotifyError::Timeout,
            HttpFailure::Status(code) => NotifyError::HttpStatus(code),
            HttpFailure::Connection(e) => NotifyError::ConnectionFailure(e),
        }
    }
}

/// Human-readable roster for log lines.
pub fn describe_players<'a, I>(players: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let names: Vec<&str> = players.into_iter().map(String::as_str).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

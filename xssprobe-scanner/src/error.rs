use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Task join error: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Other error: {0}")]
    Other(String),
}

/// Coarse classification of a failed probe, as surfaced in a [`crate::ProbeResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProbeErrorKind {
    Timeout,
    Connection,
    InvalidUrl,
    Other,
}

impl ScanError {
    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            ScanError::Timeout(_) => ProbeErrorKind::Timeout,
            ScanError::Connection(_) => ProbeErrorKind::Connection,
            ScanError::InvalidUrl(_) => ProbeErrorKind::InvalidUrl,
            ScanError::HttpError(e) if e.is_timeout() => ProbeErrorKind::Timeout,
            ScanError::HttpError(e) if e.is_connect() => ProbeErrorKind::Connection,
            ScanError::HttpError(e) if e.is_builder() => ProbeErrorKind::InvalidUrl,
            _ => ProbeErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

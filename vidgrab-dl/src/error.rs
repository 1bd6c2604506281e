//! Failures surfaced to callers, one variant per operation.

use thiserror::Error;

/// Lookup or download failure. The message is passed through from yt-dlp unmodified.
#[derive(Debug, Error)]
pub enum Error {
    /// Metadata lookup failed
    #[error("{0}")]
    Resolution(String),

    /// Fetch or merge failed
    #[error("{0}")]
    Download(String),
}

impl Error {
    /// Raw message text, without any variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Resolution(message) | Error::Download(message) => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

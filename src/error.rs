// Error classification for remote fetches

use std::fmt;

/// Failure modes of a request against the Modrinth API or CDN.
///
/// A 404 gets its own variant because callers word the user-facing
/// message differently for an unknown project ID than for a transport
/// or decode problem. Both variants are recoverable per mod.
#[derive(Debug)]
pub enum FetchError {
    NotFound,
    Other(anyhow::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "not found (404)"),
            FetchError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Other(e.into())
    }
}

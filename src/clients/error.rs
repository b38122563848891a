//! Error types for the post client.

use crate::framework::ResourceError;
use thiserror::Error;

/// Errors that can occur while fetching a post.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The request did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// The fetch task died before producing a post.
    #[error(transparent)]
    Aborted(#[from] ResourceError),
}

impl From<String> for FetchError {
    fn from(msg: String) -> Self {
        FetchError::Network(msg)
    }
}

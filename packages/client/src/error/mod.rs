//! Error types
//!
//! [`Error`] is what a terminal verb call returns on failure. Transport and
//! JSON failures propagate from their collaborators unmodified; status
//! failures are classified into a [`StatusError`] at the dispatch point.

pub mod status;
pub mod types;

pub use status::{StatusKind, reason_phrase};
pub use types::StatusError;

use crate::transport::TransportError;

/// Any failure a request chain can surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a status code of 400 or above.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The transport collaborator failed before a response was obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The accumulated path did not form a valid URL.
    #[error("invalid request URI: {0}")]
    Uri(#[from] url::ParseError),
}

impl Error {
    /// The status error, if this failure came from an error status code.
    pub fn status(&self) -> Option<&StatusError> {
        match self {
            Error::Status(status) => Some(status),
            _ => None,
        }
    }
}

//! Status error type
//!
//! One data-carrying error parameterized by status code replaces the
//! class-per-status-code scheme: [`StatusError::kind`] recovers the named
//! kind, and unregistered codes fall back to
//! [`StatusKind::Unregistered`](super::StatusKind::Unregistered) while still
//! exposing their numeric code.

use std::fmt;

use super::status::{StatusKind, reason_phrase};
use crate::http::RawResponse;

/// An HTTP error status (>= 400) together with the response that carried it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    code: u16,
    body: Option<String>,
    message: Option<String>,
}

impl StatusError {
    /// Build an error for a bare status code with no response body.
    #[must_use]
    pub fn new(code: u16) -> Self {
        Self {
            code,
            body: None,
            message: None,
        }
    }

    /// Classify a status code together with the response body that came with
    /// it. This is the single construction point used at dispatch time.
    #[must_use]
    pub fn classify(code: u16, body: Option<String>) -> Self {
        Self {
            code,
            body,
            message: None,
        }
    }

    /// Classify a raw response.
    #[must_use]
    pub fn from_response(response: &RawResponse) -> Self {
        Self::classify(response.status().as_u16(), response.body().map(str::to_owned))
    }

    /// The numeric HTTP status code.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The response body text, if the response carried one.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The named kind for this status, or `Unregistered`.
    pub fn kind(&self) -> StatusKind {
        StatusKind::from_code(self.code)
    }

    /// The human-readable message.
    ///
    /// A custom message set with [`set_message`](Self::set_message) wins;
    /// otherwise registered codes report `"<code> <reason phrase>"` and
    /// unregistered codes report the generic `"status error <code>"`.
    pub fn message(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match reason_phrase(self.code) {
            Some(reason) => format!("{} {}", self.code, reason),
            None => format!("status error {}", self.code),
        }
    }

    /// Override the default human-readable message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Some(body) => write!(f, "{}: {}", self.message(), body),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for StatusError {}

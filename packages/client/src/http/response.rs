//! Raw HTTP response as seen at the transport seam

use http::StatusCode;

/// The status code and body text a transport yields back from one dispatch.
///
/// This is deliberately minimal: classification and JSON wrapping both happen
/// above the transport, so nothing else from the wire is carried through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: StatusCode,
    body: Option<String>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: Option<String>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Whether this response counts as a success.
    ///
    /// The cut is at 400: everything below is handed to the response wrapper,
    /// everything at or above it is classified into a status error.
    pub fn is_success(&self) -> bool {
        self.status.as_u16() < 400
    }
}

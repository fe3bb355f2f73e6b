//! Client handle
//!
//! [`HttpClient`] is the shared handle the fluent builders carry: a
//! transport behind an `Arc`, cloned cheaply into every chain node.

use std::fmt;
use std::sync::Arc;

use crate::http::{HttpRequest, RawResponse};
use crate::transport::{ReqwestTransport, Transport, TransportError};

/// Shared client over an injected [`Transport`].
#[derive(Clone)]
pub struct HttpClient {
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    /// Client over the default blocking reqwest transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Client over a custom transport.
    ///
    /// This is the injection point for tests and for callers bringing their
    /// own HTTP stack.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Dispatch one request through the transport.
    pub fn execute(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        self.transport.send(request)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self {
            transport: Arc::new(ReqwestTransport::new()),
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient").finish_non_exhaustive()
    }
}

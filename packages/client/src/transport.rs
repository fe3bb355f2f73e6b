//! The transport seam
//!
//! The core never talks to the network itself: it hands a resolved
//! [`HttpRequest`] to a [`Transport`] and gets a [`RawResponse`] back.
//! Retries, connection pooling and TLS all live behind this trait.
//! Implementations must be safe for concurrent use; independent request
//! chains may be driven from multiple threads without coordination.

use crate::http::{HttpRequest, RawResponse};

/// Capability to perform one HTTP request.
pub trait Transport: Send + Sync {
    /// Perform the request and return the raw status and body.
    ///
    /// Errors from here propagate to the caller unmodified; the core never
    /// reinterprets or retries a transport failure.
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError>;
}

/// A failure inside the transport collaborator.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Network-level failure from the default reqwest transport.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failure reported by a custom transport implementation.
    #[error("transport error: {0}")]
    Other(String),
}

/// Default blocking transport over [`reqwest`].
///
/// Applies query parameters, headers, body and per-request timeout when
/// present, and omits them entirely when empty. Carries no retry policy,
/// cookie jar or cache; a shared inner client makes it safe to clone and use
/// concurrently.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone());

        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if !request.headers().is_empty() {
            builder = builder.headers(request.headers().clone());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_owned());
        }
        if let Some(timeout) = request.timeout() {
            builder = builder.timeout(timeout);
        }

        let response = builder.send()?;
        let status = response.status();
        let text = response.text()?;
        let body = if text.is_empty() { None } else { Some(text) };

        log::debug!("transport: {} -> {}", request.url(), status);
        Ok(RawResponse::new(status, body))
    }
}

//! # Quilt
//!
//! Fluent REST API wrapper: build a request as a chain of path segments, end
//! it with an HTTP verb, and get back a wrapped JSON response or a typed
//! status error.
//!
//! ```no_run
//! use quilt::RequestOptions;
//!
//! let api = quilt::wrap("http://api.example.org");
//!
//! // GET http://api.example.org/users/55/videos
//! let videos = api.resource("users", &[&55]).at("videos").get(())?;
//! for video in videos.responses() {
//!     if let Some(title) = video.field("title").and_then(|t| t.as_str().map(String::from)) {
//!         println!("{title}");
//!     }
//! }
//!
//! // POST http://api.example.org/users with a body and an extra header
//! api.at("users").post(
//!     RequestOptions::new()
//!         .header("x-token", "secret")
//!         .body(r#"{"name": "quilt"}"#),
//! )?;
//! # Ok::<(), quilt::Error>(())
//! ```
//!
//! Every chain step returns a new immutable node, so separate chains built
//! from the same root never interfere. Per-call options override wrapper
//! defaults on key collision; everything else is merged.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{CallArgs, Outcome, RequestOptions, Segment, Wrapper, WrapperOptions};

// Re-export the client-side types callers interact with
pub use quilt_client::{
    Error, HttpClient, HttpRequest, Payload, RawResponse, ReqwestTransport, Response, StatusError,
    StatusKind, Transport, TransportError,
};

/// Wrap the base URL of an API with default options.
#[must_use]
pub fn wrap(base_uri: impl Into<String>) -> Wrapper {
    Wrapper::new(base_uri, WrapperOptions::default())
}

/// Wrap the base URL of an API with wrapper-level headers, params, extension
/// and timeout defaults.
#[must_use]
pub fn wrap_with(base_uri: impl Into<String>, options: WrapperOptions) -> Wrapper {
    Wrapper::new(base_uri, options)
}

/// Wrap a base URL over a custom client instance.
///
/// The client carries the transport; injecting one is how tests stub the
/// network and how callers bring their own HTTP stack.
#[must_use]
pub fn with_client(client: &HttpClient, base_uri: impl Into<String>) -> Wrapper {
    Wrapper::with_client(client, base_uri, WrapperOptions::default())
}

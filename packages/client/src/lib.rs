//! # Quilt client
//!
//! Implementation crate behind the `quilt` fluent API wrapper: request and
//! response value types, the transport seam with a default blocking reqwest
//! implementation, the HTTP status taxonomy, and the JSON response wrapper.
//!
//! Most users want the `quilt` crate instead; this one exists so the fluent
//! surface and the dispatch machinery can evolve separately.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;

pub use crate::client::HttpClient;
pub use crate::error::{Error, StatusError, StatusKind, reason_phrase};
pub use crate::http::{HttpRequest, RawResponse};
pub use crate::response::{Payload, Response};
pub use crate::transport::{ReqwestTransport, Transport, TransportError};

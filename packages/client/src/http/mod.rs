//! HTTP request and response value types
//!
//! These are the plain data types handed across the transport seam. They carry
//! exactly what a dispatch needs (method, URL, headers, query, body, timeout)
//! and what a transport yields back (status code, body text).

pub mod request;
pub mod response;

pub use request::HttpRequest;
pub use response::RawResponse;

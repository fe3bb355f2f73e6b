//! The `Wrapper` chain node
//!
//! A `Wrapper` is an immutable value: a base URI prefix plus the header,
//! parameter, extension and timeout defaults it passes down. Chained access
//! through [`at`](Wrapper::at) and [`resource`](Wrapper::resource) never
//! mutates a node; it produces a fresh child with one more path segment, so
//! independent chains built from the same root cannot leak segments into each
//! other.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use http::HeaderMap;
use quilt_client::HttpClient;

use crate::builder::options::{insert_header, try_insert_header};

/// A value usable as one URI path segment.
///
/// Strings and numbers are string-converted uniformly; there is no other
/// distinction between identifier types.
pub trait Segment {
    fn into_segment(self) -> String;
}

impl<T: fmt::Display> Segment for T {
    fn into_segment(self) -> String {
        self.to_string()
    }
}

/// Wrapper-level defaults, set once at [`wrap_with`](crate::wrap_with) time
/// and inherited by every node in every chain built from that root.
#[derive(Debug, Clone, Default)]
pub struct WrapperOptions {
    pub(crate) headers: HeaderMap,
    pub(crate) params: BTreeMap<String, String>,
    pub(crate) extension: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl WrapperOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default header applied to every request.
    ///
    /// A name or value that does not form valid header data is dropped with a
    /// warning; use [`try_header`](Self::try_header) to surface that as an
    /// error instead.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        insert_header(&mut self.headers, name, value);
        self
    }

    /// Add a default header, failing on invalid header data.
    pub fn try_header(mut self, name: &str, value: &str) -> Result<Self, http::Error> {
        self.headers = try_insert_header(self.headers, name, value)?;
        Ok(self)
    }

    /// Add a default query parameter applied to every request.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the default file extension appended to every final path.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set the default request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the default request timeout in whole seconds.
    #[must_use]
    pub fn timeout_seconds(self, seconds: u64) -> Self {
        self.timeout(Duration::from_secs(seconds))
    }
}

/// One node of a request chain: the accumulated path prefix plus inherited
/// configuration.
#[derive(Debug, Clone)]
pub struct Wrapper {
    pub(crate) client: HttpClient,
    pub(crate) base_uri: String,
    pub(crate) headers: HeaderMap,
    pub(crate) params: BTreeMap<String, String>,
    pub(crate) extension: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl Wrapper {
    /// Root wrapper over the default client.
    #[must_use]
    pub fn new(base_uri: impl Into<String>, options: WrapperOptions) -> Self {
        Self::with_client(&HttpClient::default(), base_uri, options)
    }

    /// Root wrapper over a shared client instance.
    #[must_use]
    pub fn with_client(
        client: &HttpClient,
        base_uri: impl Into<String>,
        options: WrapperOptions,
    ) -> Self {
        Self {
            client: client.clone(),
            base_uri: base_uri.into(),
            headers: options.headers,
            params: options.params,
            extension: options.extension,
            timeout: options.timeout,
        }
    }

    /// The fixed root or accumulated path prefix this node represents.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Child wrapper with one more path segment appended.
    ///
    /// Configuration is copied from the parent unchanged.
    #[must_use]
    pub fn at<S: Segment>(&self, segment: S) -> Wrapper {
        let mut child = self.clone();
        child.base_uri = format!("{}/{}", self.base_uri, segment.into_segment());
        child
    }

    /// Child wrapper for a named resource with optional identifiers.
    ///
    /// Only one identifier per resource: the first entry of `ids` becomes a
    /// path segment after the name, any further entries are silently ignored.
    #[must_use]
    pub fn resource<S: Segment>(&self, name: S, ids: &[&dyn fmt::Display]) -> Wrapper {
        let named = self.at(name);
        match ids.first() {
            Some(id) => named.at(id),
            None => named,
        }
    }
}

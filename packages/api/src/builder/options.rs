//! Per-call request options and flexible verb arguments
//!
//! [`RequestOptions`] carries everything a single terminal call may override:
//! headers, query parameters, body, extension and timeout. [`CallArgs`] is
//! the argument type every verb accepts through `Into`, so a call site can
//! pass nothing, just an identifier, just options, or both.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::builder::core::Segment;

/// Insert a header from loose string parts, skipping names or values that do
/// not form valid header data. Names are normalized by `HeaderName`.
pub(crate) fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) {
    match (HeaderName::from_str(name), HeaderValue::from_str(value)) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => log::warn!("skipping invalid header {name:?}"),
    }
}

/// Fallible counterpart of [`insert_header`]: invalid header data comes back
/// as an error instead of being dropped.
pub(crate) fn try_insert_header(
    mut headers: HeaderMap,
    name: &str,
    value: &str,
) -> Result<HeaderMap, http::Error> {
    let name = HeaderName::from_str(name)?;
    let value = HeaderValue::from_str(value)?;
    headers.insert(name, value);
    Ok(headers)
}

/// Options for one terminal verb call.
///
/// On key collision these override the wrapper's own defaults; non-colliding
/// keys from both layers reach the request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub(crate) headers: HeaderMap,
    pub(crate) params: BTreeMap<String, String>,
    pub(crate) body: Option<String>,
    pub(crate) extension: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request header.
    ///
    /// A name or value that does not form valid header data is dropped with a
    /// warning; use [`try_header`](Self::try_header) to surface that as an
    /// error instead.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        insert_header(&mut self.headers, name, value);
        self
    }

    /// Add a request header, failing on invalid header data.
    pub fn try_header(mut self, name: &str, value: &str) -> Result<Self, http::Error> {
        self.headers = try_insert_header(self.headers, name, value)?;
        Ok(self)
    }

    /// Add a query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the request body text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the file extension appended to the final path as `.extension`.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the request timeout in whole seconds.
    #[must_use]
    pub fn timeout_seconds(self, seconds: u64) -> Self {
        self.timeout(Duration::from_secs(seconds))
    }
}

/// Resolved arguments of a terminal verb call.
///
/// Mirrors the flexible `verb(id?, options?)` contract: each `From` impl
/// covers one call shape, including the one where the first positional
/// argument is options-like and the identifier is absent.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    pub(crate) id: Option<String>,
    pub(crate) options: RequestOptions,
}

impl From<()> for CallArgs {
    fn from((): ()) -> Self {
        Self::default()
    }
}

impl From<RequestOptions> for CallArgs {
    fn from(options: RequestOptions) -> Self {
        Self { id: None, options }
    }
}

impl<S: Segment> From<(S, RequestOptions)> for CallArgs {
    fn from((id, options): (S, RequestOptions)) -> Self {
        Self {
            id: Some(id.into_segment()),
            options,
        }
    }
}

macro_rules! impl_call_args_from_id {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CallArgs {
                fn from(id: $ty) -> Self {
                    Self {
                        id: Some(id.into_segment()),
                        options: RequestOptions::default(),
                    }
                }
            }
        )*
    };
}

impl_call_args_from_id!(&str, String, i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_means_no_id_and_no_options() {
        let args = CallArgs::from(());
        assert!(args.id.is_none());
        assert!(args.options.headers.is_empty());
    }

    #[test]
    fn first_positional_options_leave_id_absent() {
        let args = CallArgs::from(RequestOptions::new().param("foo", "bar"));
        assert!(args.id.is_none());
        assert_eq!(args.options.params.get("foo").map(String::as_str), Some("bar"));
    }

    #[test]
    fn ids_are_string_converted_uniformly() {
        assert_eq!(CallArgs::from(55).id.as_deref(), Some("55"));
        assert_eq!(CallArgs::from("abc").id.as_deref(), Some("abc"));
        assert_eq!(
            CallArgs::from((55u64, RequestOptions::new())).id.as_deref(),
            Some("55")
        );
    }

    #[test]
    fn invalid_header_names_are_skipped() {
        let options = RequestOptions::new()
            .header("x-ok", "yes")
            .header("bad header name", "ignored");
        assert_eq!(options.headers.len(), 1);
        assert!(options.headers.contains_key("x-ok"));
    }

    #[test]
    fn try_header_surfaces_invalid_header_data() {
        let options = RequestOptions::new()
            .try_header("x-ok", "yes")
            .expect("valid header");
        assert!(options.headers.contains_key("x-ok"));

        assert!(RequestOptions::new().try_header("bad header name", "v").is_err());
        assert!(RequestOptions::new().try_header("x-ok", "bad\nvalue").is_err());
    }
}

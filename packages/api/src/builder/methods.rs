//! Terminal verb methods
//!
//! A verb call ends a chain: per-call options are merged over the wrapper's
//! defaults (per-call wins on collision, for headers, params, extension and
//! timeout alike), the final URI is assembled, and the request goes through
//! the client's transport. Status codes at or above 400 come back as a
//! classified [`StatusError`] and are never returned as success values.

use http::Method;
use quilt_client::{Error, HttpRequest, RawResponse, Response, StatusError};
use url::Url;

use crate::builder::core::Wrapper;
use crate::builder::options::CallArgs;

/// Success value of a terminal verb call.
///
/// A body that parses as a JSON array is wrapped element-wise into `Many`;
/// anything else (including the normalized empty object for bodiless
/// responses) is a `Single`. A one-element array stays `Many` of length one.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Single(Response),
    Many(Vec<Response>),
}

impl Outcome {
    fn from_raw(raw: &RawResponse) -> Result<Self, Error> {
        let wrapped = Response::from_body(raw.body())?;
        match wrapped.payload().as_array() {
            Some(elements) => Ok(Outcome::Many(
                elements.iter().cloned().map(Response::from_value).collect(),
            )),
            None => Ok(Outcome::Single(wrapped)),
        }
    }

    /// The single wrapped response, if the body was not an array.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Outcome::Single(response) => Some(response),
            Outcome::Many(_) => None,
        }
    }

    /// The wrapped responses as a slice: one element for `Single`, all
    /// elements for `Many`.
    pub fn responses(&self) -> &[Response] {
        match self {
            Outcome::Single(response) => std::slice::from_ref(response),
            Outcome::Many(responses) => responses,
        }
    }

    pub fn into_responses(self) -> Vec<Response> {
        match self {
            Outcome::Single(response) => vec![response],
            Outcome::Many(responses) => responses,
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Outcome::Many(_))
    }

    pub fn len(&self) -> usize {
        self.responses().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Wrapper {
    /// Perform a GET request on the accumulated path.
    pub fn get<A: Into<CallArgs>>(&self, args: A) -> Result<Outcome, Error> {
        self.request(Method::GET, args.into())
    }

    /// Perform a POST request on the accumulated path.
    pub fn post<A: Into<CallArgs>>(&self, args: A) -> Result<Outcome, Error> {
        self.request(Method::POST, args.into())
    }

    /// Perform a PUT request on the accumulated path.
    pub fn put<A: Into<CallArgs>>(&self, args: A) -> Result<Outcome, Error> {
        self.request(Method::PUT, args.into())
    }

    /// Perform a PATCH request on the accumulated path.
    pub fn patch<A: Into<CallArgs>>(&self, args: A) -> Result<Outcome, Error> {
        self.request(Method::PATCH, args.into())
    }

    /// Perform a DELETE request on the accumulated path.
    pub fn delete<A: Into<CallArgs>>(&self, args: A) -> Result<Outcome, Error> {
        self.request(Method::DELETE, args.into())
    }

    fn request(&self, method: Method, args: CallArgs) -> Result<Outcome, Error> {
        let CallArgs { id, options } = args;

        // Per-call keys override wrapper defaults on collision.
        let mut headers = self.headers.clone();
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }
        let mut params = self.params.clone();
        params.extend(options.params);

        let extension = options.extension.or_else(|| self.extension.clone());
        let timeout = options.timeout.or(self.timeout);

        // base URI, then /id, then .extension; nothing else.
        let mut uri = self.base_uri.clone();
        if let Some(id) = id {
            uri.push('/');
            uri.push_str(&id);
        }
        if let Some(extension) = &extension {
            uri.push('.');
            uri.push_str(extension);
        }
        let url = Url::parse(&uri)?;

        let mut request = HttpRequest::new(method, url).with_headers(headers);
        if !params.is_empty() {
            request = request.with_query(params.into_iter().collect());
        }
        if let Some(body) = options.body {
            request = request.with_body(body);
        }
        if let Some(timeout) = timeout {
            request = request.with_timeout(timeout);
        }

        log::debug!("dispatching {} {}", request.method(), request.url());
        let response = self.client.execute(&request)?;

        if response.is_success() {
            Outcome::from_raw(&response)
        } else {
            Err(Error::Status(StatusError::from_response(&response)))
        }
    }
}

//! JSON response wrapping
//!
//! [`Response`] wraps a response body into a read-only structure: field access
//! for object payloads, sequence access for array payloads, with nested
//! objects and arrays viewed through the borrowed [`Payload`] type. A missing
//! field is a distinguishable `None`, never a failure.

use serde_json::Value;

/// A wrapped JSON response body.
///
/// Built once per completed request and immutable thereafter. A `null` or
/// empty body is normalized to an empty object before parsing; actual parse
/// errors propagate to the caller. The original canonical JSON text is
/// retained alongside the parsed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    payload_json: String,
    payload: Value,
}

impl Response {
    /// Parse a raw body into a wrapped response.
    ///
    /// `None` and `""` both parse as `{}`.
    pub fn from_body(body: Option<&str>) -> Result<Self, serde_json::Error> {
        let text = match body {
            Some(text) if !text.is_empty() => text,
            _ => "{}",
        };
        let payload = serde_json::from_str(text)?;
        Ok(Self {
            payload_json: text.to_owned(),
            payload,
        })
    }

    /// Wrap an already parsed JSON value.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self {
            payload_json: value.to_string(),
            payload: value,
        }
    }

    /// The parsed payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// The canonical serialized form of the payload.
    pub fn payload_json(&self) -> &str {
        &self.payload_json
    }

    /// Look up a field on an object payload.
    ///
    /// Returns `None` when the payload is not an object or the field is not
    /// present; nested objects and arrays come back as further [`Payload`]
    /// views.
    pub fn field(&self, name: &str) -> Option<Payload<'_>> {
        self.payload.get(name).map(Payload)
    }

    /// Whether the top-level payload is an array.
    ///
    /// Single-element arrays stay arrays; they are never collapsed to the
    /// lone element.
    pub fn is_array(&self) -> bool {
        self.payload.is_array()
    }

    /// Number of elements for an array payload, `0` otherwise.
    pub fn len(&self) -> usize {
        self.payload.as_array().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indexed access into an array payload.
    pub fn get(&self, index: usize) -> Option<Payload<'_>> {
        self.payload.get(index).map(Payload)
    }

    /// Iterate the elements of an array payload, each as a wrapped view.
    ///
    /// Empty for non-array payloads.
    pub fn iter(&self) -> impl Iterator<Item = Payload<'_>> {
        self.payload.as_array().into_iter().flatten().map(Payload)
    }
}

/// A borrowed view into part of a wrapped payload.
///
/// Obtained from [`Response::field`] and friends; supports the same field and
/// sequence access recursively, plus typed extraction of leaf values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payload<'a>(&'a Value);

impl<'a> Payload<'a> {
    /// Look up a field on an object value.
    pub fn field(self, name: &str) -> Option<Payload<'a>> {
        self.0.get(name).map(Payload)
    }

    /// Indexed access into an array value.
    pub fn get(self, index: usize) -> Option<Payload<'a>> {
        self.0.get(index).map(Payload)
    }

    /// Iterate the elements of an array value; empty for non-arrays.
    pub fn iter(self) -> impl Iterator<Item = Payload<'a>> + 'a {
        self.0.as_array().into_iter().flatten().map(Payload)
    }

    /// Number of elements for an array value, `0` otherwise.
    pub fn len(self) -> usize {
        self.0.as_array().map_or(0, Vec::len)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The value as a string, if it is one.
    pub fn as_str(self) -> Option<&'a str> {
        self.0.as_str()
    }

    /// The value as a signed integer, if it is one.
    pub fn as_i64(self) -> Option<i64> {
        self.0.as_i64()
    }

    /// The value as a float, if it is a number.
    pub fn as_f64(self) -> Option<f64> {
        self.0.as_f64()
    }

    /// The value as a boolean, if it is one.
    pub fn as_bool(self) -> Option<bool> {
        self.0.as_bool()
    }

    /// Whether the value is JSON `null`.
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// The underlying JSON value.
    pub fn value(self) -> &'a Value {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> Response {
        Response::from_body(Some(
            r#"{"title": "Something", "desc": {"someKey": "someValue", "anotherKey": "value"}, "main_item": {"values": [{"quantity": 1}, {"quantity": 2}, {"quantity": 3}]}}"#,
        ))
        .expect("valid json")
    }

    #[test]
    fn surface_field_access() {
        let response = nested();
        assert_eq!(
            response.field("title").and_then(Payload::as_str),
            Some("Something")
        );
    }

    #[test]
    fn deep_field_access() {
        let response = nested();
        let value = response
            .field("desc")
            .and_then(|desc| desc.field("someKey"))
            .and_then(Payload::as_str);
        assert_eq!(value, Some("someValue"));
    }

    #[test]
    fn deep_array_access() {
        let response = nested();
        let quantity = response
            .field("main_item")
            .and_then(|item| item.field("values"))
            .and_then(|values| values.get(0))
            .and_then(|first| first.field("quantity"))
            .and_then(Payload::as_i64);
        assert_eq!(quantity, Some(1));
    }

    #[test]
    fn missing_field_is_a_distinguishable_absence() {
        let response = nested();
        assert!(response.field("nope").is_none());
        assert!(
            response
                .field("desc")
                .and_then(|desc| desc.field("nope"))
                .is_none()
        );
    }

    #[test]
    fn array_payload_maps_over_elements() {
        let response =
            Response::from_body(Some(r#"[{"title": "Something"}, {"title": "Something else"}]"#))
                .expect("valid json");

        assert!(response.is_array());
        let titles: Vec<_> = response
            .iter()
            .filter_map(|item| item.field("title").and_then(Payload::as_str))
            .collect();
        assert_eq!(titles, ["Something", "Something else"]);
    }

    #[test]
    fn single_element_array_stays_an_array() {
        let response =
            Response::from_body(Some(r#"[{"title": "Alone"}]"#)).expect("valid json");

        assert!(response.is_array());
        assert_eq!(response.len(), 1);
        assert_eq!(
            response
                .get(0)
                .and_then(|item| item.field("title"))
                .and_then(Payload::as_str),
            Some("Alone")
        );
    }

    #[test]
    fn null_and_empty_bodies_become_empty_objects() {
        let from_none = Response::from_body(None).expect("normalized");
        let from_empty = Response::from_body(Some("")).expect("normalized");

        assert_eq!(from_none.payload(), &serde_json::json!({}));
        assert_eq!(from_none, from_empty);
        assert!(from_none.field("anything").is_none());
    }

    #[test]
    fn malformed_json_propagates() {
        assert!(Response::from_body(Some("{not json")).is_err());
    }

    #[test]
    fn construction_is_idempotent() {
        let text = r#"{"title": "Something"}"#;
        let first = Response::from_body(Some(text)).expect("valid json");
        let second = Response::from_body(Some(text)).expect("valid json");

        assert_eq!(first, second);
        assert_eq!(first.payload_json(), text);
    }
}

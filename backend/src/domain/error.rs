//! Domain-level error type.
//!
//! Errors are transport agnostic. The HTTP adapter maps each [`ErrorCode`] to
//! a status code and renders the payload as the response body.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed, fails validation or references a missing
    /// entity.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Error payload returned by facade operations and HTTP handlers.
///
/// The message serialises under the `error` key.
///
/// # Examples
/// ```
/// use hbnb_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Place not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Place not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Error {
    code: ErrorCode,
    #[serde(rename = "error")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Create an error, capturing the trace identifier in scope if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Invalid request naming a reference field that points nowhere.
    ///
    /// # Examples
    /// ```
    /// use hbnb_backend::domain::Error;
    ///
    /// let err = Error::unknown_reference("owner_id", "42");
    /// assert_eq!(err.message(), "Invalid owner_id");
    /// ```
    pub fn unknown_reference(field: &str, value: impl std::fmt::Display) -> Self {
        Self::invalid_request(format!("Invalid {field}")).with_details(json!({
            "field": field,
            "value": value.to_string(),
            "code": "unknown_reference",
        }))
    }

    /// Attach structured details to the error.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::not_found("gone"), ErrorCode::NotFound)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
        assert_eq!(err.code(), expected);
    }

    #[test]
    fn serialises_message_under_error_key() {
        let err = Error::invalid_request("Invalid owner_id").with_trace_id("abc");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(
            value,
            json!({"code": "invalid_request", "error": "Invalid owner_id", "trace_id": "abc"})
        );
    }

    #[test]
    fn unknown_reference_names_field_and_value() {
        let err = Error::unknown_reference("place_id", "p-1");
        assert_eq!(err.message(), "Invalid place_id");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "place_id", "value": "p-1", "code": "unknown_reference"}))
        );
    }

    #[tokio::test]
    async fn new_captures_trace_id_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid UUID");
        let err = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
        assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn new_has_no_trace_id_out_of_scope() {
        assert!(Error::internal("boom").trace_id().is_none());
    }
}

//! Shared validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, QueryPayloadError};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for request shape failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCode {
    MissingField,
    InvalidJson,
    InvalidQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidJson => "invalid_json",
            Self::InvalidQuery => "invalid_query",
        }
    }
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Unwrap a required payload field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a reference identifier from a request body.
///
/// A malformed identifier cannot name a stored entity, so it is reported the
/// same way as a well-formed one that points nowhere.
pub(crate) fn parse_reference<T: FromStr>(raw: &str, field: FieldName) -> Result<T, Error> {
    raw.parse()
        .map_err(|_| Error::unknown_reference(field.as_str(), raw))
}

/// Parse an identifier taken from the URL path; malformed values are simply
/// not found.
pub(crate) fn parse_path_id<T: FromStr>(raw: &str, not_found: &'static str) -> Result<T, Error> {
    raw.parse().map_err(|_| Error::not_found(not_found))
}

/// Map body deserialisation failures onto the shared error payload.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("Invalid JSON payload")
        .with_details(json!({
            "code": ErrorCode::InvalidJson.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}

/// Map query string failures onto the shared error payload.
pub(crate) fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("Invalid query string")
        .with_details(json!({
            "code": ErrorCode::InvalidQuery.as_str(),
            "reason": err.to_string(),
        }))
        .into()
}

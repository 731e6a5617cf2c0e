//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these mirrors describe their wire
//! shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed body, failed validation or unknown reference.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Unexpected failure; the message is redacted.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Invalid owner_id")]
    error: String,
    /// Structured context such as the offending field.
    details: Option<serde_json::Value>,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f1c2a8e-4f3b-4d53-9a3c-0b1e2d3f4a5b")]
    trace_id: Option<String>,
}

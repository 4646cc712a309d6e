//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa derives. The wrappers below mirror their
//! serialised shape and are registered under the domain type's name.

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed request or failed validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Reserved for a privilege model; not currently produced.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// Backing store or named resource absent.
    #[schema(rename = "not_found")]
    NotFound,
    /// Unique name already taken.
    #[schema(rename = "duplicate")]
    Duplicate,
    /// Unexpected server failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error envelope returned with every non-2xx response.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "duplicate")]
    code: ErrorCodeSchema,
    #[schema(example = "Chat room name already exists.")]
    message: String,
    /// Matches the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

/// Catalogue flavor.
#[derive(ToSchema)]
#[schema(as = Flavor)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FlavorSchema {
    #[schema(example = "mint")]
    name: String,
    #[schema(example = "/img/mint.png")]
    image: String,
    description: String,
    nutrition: String,
    #[schema(minimum = 0, example = 350)]
    price: u32,
    availability: bool,
}

/// Chat room.
#[derive(ToSchema)]
#[schema(as = Room)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RoomSchema {
    #[schema(example = "lobby")]
    name: String,
}

/// Chat participant.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "alice")]
    name: String,
}

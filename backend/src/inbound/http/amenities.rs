//! Amenities API handlers.
//!
//! ```text
//! POST /api/v1/amenities/ {"name":"Wi-Fi"}
//! GET /api/v1/amenities/
//! GET /api/v1/amenities/{id}
//! PUT /api/v1/amenities/{id} {"name":"Fibre"}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Amenity, AmenityId, AmenityUpdate, Entity, Error, NewAmenity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id, require};

pub(crate) const AMENITY_NOT_FOUND: &str = "Amenity not found";

/// Request body for creating or renaming an amenity.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AmenityPayload {
    pub name: Option<String>,
}

/// Amenity representation.
#[derive(Debug, Serialize, ToSchema)]
pub struct AmenityResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<&Amenity> for AmenityResponse {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: *amenity.id().as_uuid(),
            name: amenity.name().to_owned(),
            created_at: amenity.created_at(),
            updated_at: amenity.updated_at(),
        }
    }
}

/// Create an amenity.
#[utoipa::path(
    post,
    path = "/api/v1/amenities/",
    request_body = AmenityPayload,
    responses(
        (status = 201, description = "Amenity created", body = AmenityResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "createAmenity"
)]
#[post("/amenities/")]
pub async fn create_amenity(
    state: web::Data<HttpState>,
    payload: web::Json<AmenityPayload>,
) -> ApiResult<HttpResponse> {
    let name = require(payload.into_inner().name, FieldName::new("name"))?;
    let amenity = state.facade.create_amenity(NewAmenity { name })?;
    Ok(HttpResponse::Created().json(AmenityResponse::from(&amenity)))
}

#[utoipa::path(
    get,
    path = "/api/v1/amenities/",
    responses((status = 200, description = "Amenities", body = [AmenityResponse])),
    tags = ["amenities"],
    operation_id = "listAmenities"
)]
#[get("/amenities/")]
pub async fn list_amenities(state: web::Data<HttpState>) -> web::Json<Vec<AmenityResponse>> {
    web::Json(
        state
            .facade
            .get_all_amenities()
            .iter()
            .map(AmenityResponse::from)
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/amenities/{id}",
    params(("id" = String, Path, description = "Amenity identifier")),
    responses(
        (status = 200, description = "Amenity", body = AmenityResponse),
        (status = 404, description = "Amenity not found", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "getAmenity"
)]
#[get("/amenities/{id}")]
pub async fn get_amenity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AmenityResponse>> {
    let id: AmenityId = parse_path_id(&path.into_inner(), AMENITY_NOT_FOUND)?;
    let amenity = state
        .facade
        .get_amenity(&id)
        .ok_or_else(|| Error::not_found(AMENITY_NOT_FOUND))?;
    Ok(web::Json(AmenityResponse::from(&amenity)))
}

/// Rename an amenity.
#[utoipa::path(
    put,
    path = "/api/v1/amenities/{id}",
    params(("id" = String, Path, description = "Amenity identifier")),
    request_body = AmenityPayload,
    responses(
        (status = 200, description = "Amenity updated", body = AmenityResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Amenity not found", body = ErrorSchema)
    ),
    tags = ["amenities"],
    operation_id = "updateAmenity"
)]
#[put("/amenities/{id}")]
pub async fn update_amenity(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AmenityPayload>,
) -> ApiResult<web::Json<AmenityResponse>> {
    let id: AmenityId = parse_path_id(&path.into_inner(), AMENITY_NOT_FOUND)?;
    let update = AmenityUpdate {
        name: payload.into_inner().name,
    };
    let amenity = state
        .facade
        .update_amenity(&id, &update)?
        .ok_or_else(|| Error::not_found(AMENITY_NOT_FOUND))?;
    Ok(web::Json(AmenityResponse::from(&amenity)))
}

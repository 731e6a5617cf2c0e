//! Places API handlers.
//!
//! ```text
//! POST /api/v1/places/ {"title":"Loft","price":80,"latitude":51.5,"longitude":-0.1,"owner_id":"..."}
//! GET /api/v1/places/
//! GET /api/v1/places/{id}?include_owner=true&include_amenities=true&include_reviews=true
//! PUT /api/v1/places/{id} {"price":95}
//! PUT /api/v1/places/{id}/amenities/{amenity_id}
//! GET /api/v1/places/{id}/reviews
//! ```
//!
//! Places render their references as identifier lists unless the detail
//! flags ask for the resolved entities.

use actix_web::{HttpResponse, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::{
    Amenity, AmenityId, Entity, Error, NewPlace, Place, PlaceDetails, PlaceId, PlaceUpdate,
    Review, User, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::amenities::AMENITY_NOT_FOUND;
use crate::inbound::http::reviews::ReviewResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id, parse_reference, require};

pub(crate) const PLACE_NOT_FOUND: &str = "Place not found";

const OWNER_ID: FieldName = FieldName::new("owner_id");
const AMENITY_ID: FieldName = FieldName::new("amenity_id");

/// Request body for listing a place.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PlacePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<String>,
    /// Identifiers of existing amenities to link.
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl TryFrom<PlacePayload> for NewPlace {
    type Error = Error;

    fn try_from(value: PlacePayload) -> Result<Self, Self::Error> {
        let title = require(value.title, FieldName::new("title"))?;
        let price = require(value.price, FieldName::new("price"))?;
        let latitude = require(value.latitude, FieldName::new("latitude"))?;
        let longitude = require(value.longitude, FieldName::new("longitude"))?;
        let owner_id: UserId = parse_reference(&require(value.owner_id, OWNER_ID)?, OWNER_ID)?;
        let amenity_ids = value
            .amenities
            .iter()
            .map(|raw| parse_reference::<AmenityId>(raw, AMENITY_ID))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            title,
            description: value.description,
            price,
            latitude,
            longitude,
            owner_id,
            amenity_ids,
        })
    }
}

/// Request body for changing a place. Owner and links are not editable here.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PlaceUpdatePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<PlaceUpdatePayload> for PlaceUpdate {
    fn from(value: PlaceUpdatePayload) -> Self {
        Self {
            title: value.title,
            description: value.description,
            price: value.price,
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

/// Detail flags for `GET /places/{id}`.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct PlaceDetailQuery {
    /// Embed the owner instead of `owner_id`.
    pub include_owner: bool,
    /// Embed amenities instead of `amenity_ids`.
    pub include_amenities: bool,
    /// Embed reviews instead of `review_ids`.
    pub include_reviews: bool,
}

impl PlaceDetailQuery {
    fn any(self) -> bool {
        self.include_owner || self.include_amenities || self.include_reviews
    }
}

/// Owner summary embedded in a place.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceOwner {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&User> for PlaceOwner {
    fn from(user: &User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            email: user.email().to_owned(),
        }
    }
}

/// Amenity summary embedded in a place.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceAmenity {
    pub id: Uuid,
    pub name: String,
}

impl From<&Amenity> for PlaceAmenity {
    fn from(amenity: &Amenity) -> Self {
        Self {
            id: *amenity.id().as_uuid(),
            name: amenity.name().to_owned(),
        }
    }
}

/// Review summary embedded in a place.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceReview {
    pub id: Uuid,
    pub text: String,
    pub rating: u8,
    pub user_id: Uuid,
}

impl From<&Review> for PlaceReview {
    fn from(review: &Review) -> Self {
        Self {
            id: *review.id().as_uuid(),
            text: review.text().to_owned(),
            rating: review.rating(),
            user_id: *review.user_id().as_uuid(),
        }
    }
}

/// Place representation.
///
/// Exactly one of each pair is present: `owner` or `owner_id`, `amenities`
/// or `amenity_ids`, `reviews` or `review_ids`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<PlaceOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<PlaceAmenity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenity_ids: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<PlaceReview>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_ids: Option<Vec<Uuid>>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            id: *place.id().as_uuid(),
            title: place.title().to_owned(),
            description: place.description().to_owned(),
            price: place.price(),
            latitude: place.latitude(),
            longitude: place.longitude(),
            owner: None,
            owner_id: Some(*place.owner_id().as_uuid()),
            amenities: None,
            amenity_ids: Some(place.amenity_ids().iter().map(|id| *id.as_uuid()).collect()),
            reviews: None,
            review_ids: Some(place.review_ids().iter().map(|id| *id.as_uuid()).collect()),
            created_at: place.created_at(),
            updated_at: place.updated_at(),
        }
    }
}

impl PlaceResponse {
    /// Swap identifier lists for resolved entities where `query` asks.
    ///
    /// An owner that no longer resolves keeps the `owner_id` form.
    fn with_details(mut self, details: &PlaceDetails, query: PlaceDetailQuery) -> Self {
        if query.include_owner {
            if let Some(owner) = &details.owner {
                self.owner = Some(PlaceOwner::from(owner));
                self.owner_id = None;
            }
        }
        if query.include_amenities {
            self.amenities = Some(details.amenities.iter().map(PlaceAmenity::from).collect());
            self.amenity_ids = None;
        }
        if query.include_reviews {
            self.reviews = Some(details.reviews.iter().map(PlaceReview::from).collect());
            self.review_ids = None;
        }
        self
    }
}

/// List a new place for an existing owner.
#[utoipa::path(
    post,
    path = "/api/v1/places/",
    request_body = PlacePayload,
    responses(
        (status = 201, description = "Place created", body = PlaceResponse),
        (status = 400, description = "Invalid request or unknown reference", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "createPlace"
)]
#[post("/places/")]
pub async fn create_place(
    state: web::Data<HttpState>,
    payload: web::Json<PlacePayload>,
) -> ApiResult<HttpResponse> {
    let input = NewPlace::try_from(payload.into_inner())?;
    let place = state.facade.create_place(input)?;
    Ok(HttpResponse::Created().json(PlaceResponse::from(&place)))
}

#[utoipa::path(
    get,
    path = "/api/v1/places/",
    responses((status = 200, description = "Places", body = [PlaceResponse])),
    tags = ["places"],
    operation_id = "listPlaces"
)]
#[get("/places/")]
pub async fn list_places(state: web::Data<HttpState>) -> web::Json<Vec<PlaceResponse>> {
    web::Json(
        state
            .facade
            .get_all_places()
            .iter()
            .map(PlaceResponse::from)
            .collect(),
    )
}

/// Fetch one place, optionally embedding its owner, amenities and reviews.
#[utoipa::path(
    get,
    path = "/api/v1/places/{id}",
    params(("id" = String, Path, description = "Place identifier"), PlaceDetailQuery),
    responses(
        (status = 200, description = "Place", body = PlaceResponse),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 404, description = "Place not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "getPlace"
)]
#[get("/places/{id}")]
pub async fn get_place(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<PlaceDetailQuery>,
) -> ApiResult<web::Json<PlaceResponse>> {
    let id: PlaceId = parse_path_id(&path.into_inner(), PLACE_NOT_FOUND)?;
    let query = query.into_inner();
    let not_found = || Error::not_found(PLACE_NOT_FOUND);
    let response = if query.any() {
        let details = state.facade.get_place_details(&id).ok_or_else(not_found)?;
        PlaceResponse::from(&details.place).with_details(&details, query)
    } else {
        let place = state.facade.get_place(&id).ok_or_else(not_found)?;
        PlaceResponse::from(&place)
    };
    Ok(web::Json(response))
}

/// Change a place's descriptive fields, price or location.
#[utoipa::path(
    put,
    path = "/api/v1/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    request_body = PlaceUpdatePayload,
    responses(
        (status = 200, description = "Place updated", body = PlaceResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Place not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "updatePlace"
)]
#[put("/places/{id}")]
pub async fn update_place(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<PlaceUpdatePayload>,
) -> ApiResult<web::Json<PlaceResponse>> {
    let id: PlaceId = parse_path_id(&path.into_inner(), PLACE_NOT_FOUND)?;
    let update = PlaceUpdate::from(payload.into_inner());
    let place = state
        .facade
        .update_place(&id, &update)?
        .ok_or_else(|| Error::not_found(PLACE_NOT_FOUND))?;
    Ok(web::Json(PlaceResponse::from(&place)))
}

/// Link an existing amenity to a place. Linking twice changes nothing.
#[utoipa::path(
    put,
    path = "/api/v1/places/{id}/amenities/{amenity_id}",
    params(
        ("id" = String, Path, description = "Place identifier"),
        ("amenity_id" = String, Path, description = "Amenity identifier")
    ),
    responses(
        (status = 200, description = "Amenity linked", body = PlaceResponse),
        (status = 404, description = "Place or amenity not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "addPlaceAmenity"
)]
#[put("/places/{id}/amenities/{amenity_id}")]
pub async fn add_place_amenity(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<PlaceResponse>> {
    let (place_id, amenity_id) = path.into_inner();
    let place_id: PlaceId = parse_path_id(&place_id, PLACE_NOT_FOUND)?;
    let amenity_id: AmenityId = parse_path_id(&amenity_id, AMENITY_NOT_FOUND)?;
    let place = state
        .facade
        .add_place_amenity(&place_id, &amenity_id)?
        .ok_or_else(|| Error::not_found(PLACE_NOT_FOUND))?;
    Ok(web::Json(PlaceResponse::from(&place)))
}

/// List the reviews left for a place.
#[utoipa::path(
    get,
    path = "/api/v1/places/{id}/reviews",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "Reviews for the place", body = [ReviewResponse]),
        (status = 404, description = "Place not found", body = ErrorSchema)
    ),
    tags = ["places"],
    operation_id = "listPlaceReviews"
)]
#[get("/places/{id}/reviews")]
pub async fn list_place_reviews(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ReviewResponse>>> {
    let id: PlaceId = parse_path_id(&path.into_inner(), PLACE_NOT_FOUND)?;
    if state.facade.get_place(&id).is_none() {
        return Err(Error::not_found(PLACE_NOT_FOUND));
    }
    let reviews = state.facade.get_reviews_by_place(&id);
    Ok(web::Json(reviews.iter().map(ReviewResponse::from).collect()))
}

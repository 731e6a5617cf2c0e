//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint, the request and response DTOs
//! from the inbound layer, and the error wrappers ([`ErrorSchema`],
//! [`ErrorCodeSchema`]) that keep utoipa out of the domain types.
//!
//! The generated document is served by Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::amenities::{AmenityPayload, AmenityResponse};
use crate::inbound::http::places::{
    PlaceAmenity, PlaceOwner, PlacePayload, PlaceResponse, PlaceReview, PlaceUpdatePayload,
};
use crate::inbound::http::reviews::{
    MessageResponse, ReviewPayload, ReviewResponse, ReviewUpdatePayload,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{UserPayload, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HBnB backend API",
        description = "CRUD interface for users, amenities, places and reviews, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::list_user_reviews,
        crate::inbound::http::amenities::create_amenity,
        crate::inbound::http::amenities::list_amenities,
        crate::inbound::http::amenities::get_amenity,
        crate::inbound::http::amenities::update_amenity,
        crate::inbound::http::places::create_place,
        crate::inbound::http::places::list_places,
        crate::inbound::http::places::get_place,
        crate::inbound::http::places::update_place,
        crate::inbound::http::places::add_place_amenity,
        crate::inbound::http::places::list_place_reviews,
        crate::inbound::http::reviews::create_review,
        crate::inbound::http::reviews::list_reviews,
        crate::inbound::http::reviews::get_review,
        crate::inbound::http::reviews::update_review,
        crate::inbound::http::reviews::delete_review,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserPayload,
        UserResponse,
        AmenityPayload,
        AmenityResponse,
        PlacePayload,
        PlaceUpdatePayload,
        PlaceResponse,
        PlaceOwner,
        PlaceAmenity,
        PlaceReview,
        ReviewPayload,
        ReviewUpdatePayload,
        ReviewResponse,
        MessageResponse,
    )),
    tags(
        (name = "users", description = "Registered users and the reviews they wrote"),
        (name = "amenities", description = "Amenities places can offer"),
        (name = "places", description = "Listings, their amenities and reviews"),
        (name = "reviews", description = "Guest reviews of places"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

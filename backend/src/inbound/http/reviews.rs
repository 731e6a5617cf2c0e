//! Reviews API handlers.
//!
//! ```text
//! POST /api/v1/reviews/ {"text":"Lovely","rating":5,"place_id":"...","user_id":"..."}
//! GET /api/v1/reviews/
//! GET /api/v1/reviews/{id}
//! PUT /api/v1/reviews/{id} {"rating":4}
//! DELETE /api/v1/reviews/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Entity, Error, NewReview, PlaceId, Review, ReviewId, ReviewUpdate, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id, parse_reference, require};

pub(crate) const REVIEW_NOT_FOUND: &str = "Review not found";

const PLACE_ID: FieldName = FieldName::new("place_id");
const USER_ID: FieldName = FieldName::new("user_id");

/// Request body for writing a review.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ReviewPayload {
    pub text: Option<String>,
    /// Whole number from 1 to 5.
    #[schema(value_type = Option<i64>)]
    pub rating: Option<Number>,
    pub place_id: Option<String>,
    pub user_id: Option<String>,
}

impl TryFrom<ReviewPayload> for NewReview {
    type Error = Error;

    fn try_from(value: ReviewPayload) -> Result<Self, Self::Error> {
        let text = require(value.text, FieldName::new("text"))?;
        let rating = whole_rating(&require(value.rating, FieldName::new("rating"))?);
        let place_id: PlaceId = parse_reference(&require(value.place_id, PLACE_ID)?, PLACE_ID)?;
        let user_id: UserId = parse_reference(&require(value.user_id, USER_ID)?, USER_ID)?;
        Ok(Self {
            text,
            rating,
            place_id,
            user_id,
        })
    }
}

/// Request body for editing a review's text or rating.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ReviewUpdatePayload {
    pub text: Option<String>,
    #[schema(value_type = Option<i64>)]
    pub rating: Option<Number>,
}

impl From<ReviewUpdatePayload> for ReviewUpdate {
    fn from(value: ReviewUpdatePayload) -> Self {
        Self {
            text: value.text,
            rating: value.rating.as_ref().map(whole_rating),
        }
    }
}

/// Map a JSON rating onto the domain's integer scale.
///
/// Fractional and oversized numbers become `i64::MIN`, which the rating check
/// rejects after the place and user have been resolved.
fn whole_rating(number: &Number) -> i64 {
    number.as_i64().unwrap_or(i64::MIN)
}

/// Review representation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub text: String,
    pub rating: u8,
    pub place_id: Uuid,
    pub user_id: Uuid,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: *review.id().as_uuid(),
            text: review.text().to_owned(),
            rating: review.rating(),
            place_id: *review.place_id().as_uuid(),
            user_id: *review.user_id().as_uuid(),
            created_at: review.created_at(),
            updated_at: review.updated_at(),
        }
    }
}

/// Confirmation body for deletions.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Review deleted successfully")]
    pub message: String,
}

/// Write a review of an existing place.
#[utoipa::path(
    post,
    path = "/api/v1/reviews/",
    request_body = ReviewPayload,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Invalid request or unknown reference", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "createReview"
)]
#[post("/reviews/")]
pub async fn create_review(
    state: web::Data<HttpState>,
    payload: web::Json<ReviewPayload>,
) -> ApiResult<HttpResponse> {
    let input = NewReview::try_from(payload.into_inner())?;
    let review = state.facade.create_review(input)?;
    Ok(HttpResponse::Created().json(ReviewResponse::from(&review)))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/",
    responses((status = 200, description = "Reviews", body = [ReviewResponse])),
    tags = ["reviews"],
    operation_id = "listReviews"
)]
#[get("/reviews/")]
pub async fn list_reviews(state: web::Data<HttpState>) -> web::Json<Vec<ReviewResponse>> {
    web::Json(
        state
            .facade
            .get_all_reviews()
            .iter()
            .map(ReviewResponse::from)
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review", body = ReviewResponse),
        (status = 404, description = "Review not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "getReview"
)]
#[get("/reviews/{id}")]
pub async fn get_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReviewResponse>> {
    let id: ReviewId = parse_path_id(&path.into_inner(), REVIEW_NOT_FOUND)?;
    let review = state
        .facade
        .get_review(&id)
        .ok_or_else(|| Error::not_found(REVIEW_NOT_FOUND))?;
    Ok(web::Json(ReviewResponse::from(&review)))
}

/// Edit a review's text or rating.
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    request_body = ReviewUpdatePayload,
    responses(
        (status = 200, description = "Review updated", body = ReviewResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Review not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "updateReview"
)]
#[put("/reviews/{id}")]
pub async fn update_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ReviewUpdatePayload>,
) -> ApiResult<web::Json<ReviewResponse>> {
    let id: ReviewId = parse_path_id(&path.into_inner(), REVIEW_NOT_FOUND)?;
    let update = ReviewUpdate::from(payload.into_inner());
    let review = state
        .facade
        .update_review(&id, &update)?
        .ok_or_else(|| Error::not_found(REVIEW_NOT_FOUND))?;
    Ok(web::Json(ReviewResponse::from(&review)))
}

/// Delete a review and unlink it from its place.
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review deleted", body = MessageResponse),
        (status = 404, description = "Review not found", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "deleteReview"
)]
#[delete("/reviews/{id}")]
pub async fn delete_review(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id: ReviewId = parse_path_id(&path.into_inner(), REVIEW_NOT_FOUND)?;
    if !state.facade.delete_review(&id) {
        return Err(Error::not_found(REVIEW_NOT_FOUND));
    }
    Ok(web::Json(MessageResponse {
        message: "Review deleted successfully".to_owned(),
    }))
}

//! Users API handlers.
//!
//! ```text
//! POST /api/v1/users/ {"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com"}
//! GET /api/v1/users/
//! GET /api/v1/users/{id}
//! PUT /api/v1/users/{id} {"last_name":"Byron"}
//! GET /api/v1/users/{id}/reviews
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Entity, Error, NewUser, User, UserId, UserUpdate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::reviews::ReviewResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id, require};

pub(crate) const USER_NOT_FOUND: &str = "User not found";

/// Request body for creating or updating a user.
///
/// Every field is optional at the wire level; creation requires the names
/// and email, updates apply whichever fields are present.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UserPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl TryFrom<UserPayload> for NewUser {
    type Error = Error;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: require(value.first_name, FieldName::new("first_name"))?,
            last_name: require(value.last_name, FieldName::new("last_name"))?,
            email: require(value.email, FieldName::new("email"))?,
            is_admin: value.is_admin.unwrap_or(false),
        })
    }
}

impl From<UserPayload> for UserUpdate {
    fn from(value: UserPayload) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            is_admin: value.is_admin,
        }
    }
}

/// User representation returned by every users endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            first_name: user.first_name().to_owned(),
            last_name: user.last_name().to_owned(),
            email: user.email().to_owned(),
            is_admin: user.is_admin(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/v1/users/",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let input = NewUser::try_from(payload.into_inner())?;
    let user = state.facade.create_user(input)?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// List every user in registration order.
#[utoipa::path(
    get,
    path = "/api/v1/users/",
    responses((status = 200, description = "Users", body = [UserResponse])),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users/")]
pub async fn list_users(state: web::Data<HttpState>) -> web::Json<Vec<UserResponse>> {
    web::Json(
        state
            .facade
            .get_all_users()
            .iter()
            .map(UserResponse::from)
            .collect(),
    )
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id: UserId = parse_path_id(&path.into_inner(), USER_NOT_FOUND)?;
    let user = state
        .facade
        .get_user(&id)
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// Change a user's names, email or admin flag.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserResponse>> {
    let id: UserId = parse_path_id(&path.into_inner(), USER_NOT_FOUND)?;
    let update = UserUpdate::from(payload.into_inner());
    let user = state
        .facade
        .update_user(&id, &update)?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND))?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// List the reviews a user has written.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/reviews",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Reviews by the user", body = [ReviewResponse]),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUserReviews"
)]
#[get("/users/{id}/reviews")]
pub async fn list_user_reviews(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ReviewResponse>>> {
    let id: UserId = parse_path_id(&path.into_inner(), USER_NOT_FOUND)?;
    if state.facade.get_user(&id).is_none() {
        return Err(Error::not_found(USER_NOT_FOUND));
    }
    let reviews = state.facade.get_reviews_by_user(&id);
    Ok(web::Json(reviews.iter().map(ReviewResponse::from).collect()))
}

//! HTTP inbound adapter exposing the REST endpoints under `/api/v1`.

pub mod amenities;
pub mod error;
pub mod health;
pub mod places;
pub mod reviews;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;
pub use state::HttpState;

/// Versioned API scope with every resource handler registered.
///
/// Body and query extraction failures are rendered as `invalid_request`
/// errors so clients see one error shape throughout.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use hbnb_backend::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(validation::query_error_handler))
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::list_user_reviews)
        .service(amenities::create_amenity)
        .service(amenities::list_amenities)
        .service(amenities::get_amenity)
        .service(amenities::update_amenity)
        .service(places::create_place)
        .service(places::list_places)
        .service(places::get_place)
        .service(places::update_place)
        .service(places::add_place_amenity)
        .service(places::list_place_reviews)
        .service(reviews::create_review)
        .service(reviews::list_reviews)
        .service(reviews::get_review)
        .service(reviews::update_review)
        .service(reviews::delete_review)
}

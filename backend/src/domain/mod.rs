//! Domain primitives, aggregates and the facade coordinating them.
//!
//! Purpose: define the validated entities of the rental catalogue and the
//! operations that create, look up and change them. Nothing here knows about
//! HTTP; inbound adapters translate requests into facade calls and render the
//! returned entities or [`Error`] values.
//!
//! Public surface:
//! - `User`, `Amenity`, `Place`, `Review` with their identifiers, input and
//!   update structs, and per-entity validation errors.
//! - `HbnbFacade` (alias to `facade::HbnbFacade`) for every CRUD operation.
//! - `Error` and `ErrorCode` for failures surfaced to adapters.
//! - `ports::Repository`, the storage port implemented by outbound adapters.

pub mod amenity;
pub mod entity;
pub mod error;
pub mod facade;
pub mod place;
pub mod ports;
pub mod review;
pub mod trace_id;
pub mod user;

pub use self::amenity::{Amenity, AmenityId, AmenityUpdate, AmenityValidationError, NewAmenity};
pub use self::entity::{Entity, FieldValidationError, Timestamps};
pub use self::error::{Error, ErrorCode};
pub use self::facade::{FacadeRepositories, HbnbFacade, PlaceDetails};
pub use self::place::{NewPlace, Place, PlaceId, PlaceUpdate, PlaceValidationError};
pub use self::review::{NewReview, Review, ReviewId, ReviewUpdate, ReviewValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserId, UserUpdate, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use hbnb_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("User not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;

//! Place aggregate: a rental listing owned by a user.
//!
//! A place references its owner, the amenities it offers and the reviews
//! written about it by identifier only. The facade resolves those references
//! against their repositories when a detailed view is needed.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::amenity::AmenityId;
use super::entity::{Entity, FieldValidationError, TextCheck, Timestamps, check_text, define_entity_id};
use super::review::ReviewId;
use super::user::UserId;

/// Maximum length, in characters, of a place title.
pub const TITLE_MAX: usize = 100;
/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

define_entity_id! {
    /// Stable place identifier.
    PlaceId
}

/// Validation errors raised while constructing or updating a [`Place`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Title must not exceed {max} characters")]
    TitleTooLong { max: usize },
    #[error("Price must be a positive value")]
    NonPositivePrice,
    #[error("Latitude must be between -90.0 and 90.0")]
    LatitudeOutOfRange,
    #[error("Longitude must be between -180.0 and 180.0")]
    LongitudeOutOfRange,
}

impl FieldValidationError for PlaceValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::NonPositivePrice => "price",
            Self::LatitudeOutOfRange => "latitude",
            Self::LongitudeOutOfRange => "longitude",
        }
    }
}

/// Input required to list a place. References must already be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: UserId,
    pub amenity_ids: Vec<AmenityId>,
}

/// Fields a caller may change on an existing place. Owner, amenity and review
/// links are managed through dedicated operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Rental listing.
///
/// ## Invariants
/// - `title` is non-blank and at most [`TITLE_MAX`] characters.
/// - `price` is strictly positive.
/// - `latitude` lies in [`LATITUDE_RANGE`], `longitude` in [`LONGITUDE_RANGE`].
/// - `amenity_ids` and `review_ids` hold no duplicates and keep insertion
///   order.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    id: PlaceId,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    owner_id: UserId,
    amenity_ids: Vec<AmenityId>,
    review_ids: Vec<ReviewId>,
    timestamps: Timestamps,
}

impl Place {
    /// Build and validate a new place stamped with `now`.
    ///
    /// Repeated amenity identifiers are collapsed to their first occurrence.
    pub fn try_new(input: NewPlace, now: DateTime<Utc>) -> Result<Self, PlaceValidationError> {
        let NewPlace {
            title,
            description,
            price,
            latitude,
            longitude,
            owner_id,
            amenity_ids,
        } = input;
        let mut place = Self {
            id: PlaceId::random(),
            title,
            description: description.unwrap_or_default(),
            price,
            latitude,
            longitude,
            owner_id,
            amenity_ids: Vec::with_capacity(amenity_ids.len()),
            review_ids: Vec::new(),
            timestamps: Timestamps::new(now),
        };
        for amenity_id in amenity_ids {
            place.add_amenity(amenity_id);
        }
        place.validate()?;
        Ok(place)
    }

    /// Check every scalar field against the place invariants.
    pub fn validate(&self) -> Result<(), PlaceValidationError> {
        match check_text(&self.title, Some(TITLE_MAX)) {
            TextCheck::Blank => return Err(PlaceValidationError::EmptyTitle),
            TextCheck::TooLong => return Err(PlaceValidationError::TitleTooLong { max: TITLE_MAX }),
            TextCheck::Ok => {}
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err(PlaceValidationError::NonPositivePrice);
        }
        if !LATITUDE_RANGE.contains(&self.latitude) {
            return Err(PlaceValidationError::LatitudeOutOfRange);
        }
        if !LONGITUDE_RANGE.contains(&self.longitude) {
            return Err(PlaceValidationError::LongitudeOutOfRange);
        }
        Ok(())
    }

    /// Apply `update` to a staged copy and validate it.
    pub fn with_update(
        &self,
        update: &PlaceUpdate,
        now: DateTime<Utc>,
    ) -> Result<Self, PlaceValidationError> {
        if *update == PlaceUpdate::default() {
            return Ok(self.clone());
        }
        let mut staged = self.clone();
        if let Some(title) = &update.title {
            staged.title.clone_from(title);
        }
        if let Some(description) = &update.description {
            staged.description.clone_from(description);
        }
        if let Some(price) = update.price {
            staged.price = price;
        }
        if let Some(latitude) = update.latitude {
            staged.latitude = latitude;
        }
        if let Some(longitude) = update.longitude {
            staged.longitude = longitude;
        }
        staged.validate()?;
        staged.timestamps.touch(now);
        Ok(staged)
    }

    /// Link an amenity. Returns `false` when it was already linked.
    pub fn add_amenity(&mut self, amenity_id: AmenityId) -> bool {
        if self.amenity_ids.contains(&amenity_id) {
            return false;
        }
        self.amenity_ids.push(amenity_id);
        true
    }

    /// Append a review. Returns `false` when it was already recorded.
    pub fn add_review(&mut self, review_id: ReviewId) -> bool {
        if self.review_ids.contains(&review_id) {
            return false;
        }
        self.review_ids.push(review_id);
        true
    }

    /// Unlink a review. Returns `false` when it was not recorded.
    pub fn remove_review(&mut self, review_id: &ReviewId) -> bool {
        let before = self.review_ids.len();
        self.review_ids.retain(|id| id != review_id);
        self.review_ids.len() != before
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.timestamps.touch(now);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn amenity_ids(&self) -> &[AmenityId] {
        &self.amenity_ids
    }

    pub fn review_ids(&self) -> &[ReviewId] {
        &self.review_ids
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at()
    }
}

impl Entity for Place {
    type Id = PlaceId;

    fn id(&self) -> &PlaceId {
        &self.id
    }
}

#[cfg(test)]
mod tests;

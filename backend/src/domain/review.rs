//! Review aggregate: a rated comment a user leaves on a place.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::entity::{Entity, FieldValidationError, TextCheck, Timestamps, check_text, define_entity_id};
use super::place::PlaceId;
use super::user::UserId;

/// Inclusive rating bounds.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

define_entity_id! {
    /// Stable review identifier.
    ReviewId
}

/// Validation errors raised while constructing or updating a [`Review`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewValidationError {
    #[error("Review text is required")]
    EmptyText,
    #[error("Rating must be an integer between 1 and 5")]
    RatingOutOfRange,
}

impl FieldValidationError for ReviewValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::EmptyText => "text",
            Self::RatingOutOfRange => "rating",
        }
    }
}

/// Input required to write a review. References must already be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub text: String,
    pub rating: i64,
    pub place_id: PlaceId,
    pub user_id: UserId,
}

/// Fields a caller may change on an existing review. The place and author
/// are fixed once written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub text: Option<String>,
    pub rating: Option<i64>,
}

/// Rated comment on a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: ReviewId,
    text: String,
    rating: u8,
    place_id: PlaceId,
    user_id: UserId,
    timestamps: Timestamps,
}

impl Review {
    /// Build and validate a new review stamped with `now`.
    pub fn try_new(input: NewReview, now: DateTime<Utc>) -> Result<Self, ReviewValidationError> {
        let NewReview {
            text,
            rating,
            place_id,
            user_id,
        } = input;
        let review = Self {
            id: ReviewId::random(),
            text,
            rating: parse_rating(rating)?,
            place_id,
            user_id,
            timestamps: Timestamps::new(now),
        };
        review.validate()?;
        Ok(review)
    }

    /// Check text and rating against the review invariants.
    pub fn validate(&self) -> Result<(), ReviewValidationError> {
        if check_text(&self.text, None) == TextCheck::Blank {
            return Err(ReviewValidationError::EmptyText);
        }
        if !RATING_RANGE.contains(&self.rating) {
            return Err(ReviewValidationError::RatingOutOfRange);
        }
        Ok(())
    }

    /// Apply `update` to a staged copy and validate it.
    pub fn with_update(
        &self,
        update: &ReviewUpdate,
        now: DateTime<Utc>,
    ) -> Result<Self, ReviewValidationError> {
        if *update == ReviewUpdate::default() {
            return Ok(self.clone());
        }
        let mut staged = self.clone();
        if let Some(text) = &update.text {
            staged.text.clone_from(text);
        }
        if let Some(rating) = update.rating {
            staged.rating = parse_rating(rating)?;
        }
        staged.validate()?;
        staged.timestamps.touch(now);
        Ok(staged)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn place_id(&self) -> &PlaceId {
        &self.place_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at()
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> &ReviewId {
        &self.id
    }
}

fn parse_rating(raw: i64) -> Result<u8, ReviewValidationError> {
    u8::try_from(raw)
        .ok()
        .filter(|rating| RATING_RANGE.contains(rating))
        .ok_or(ReviewValidationError::RatingOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 2, 18, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn input(text: &str, rating: i64) -> NewReview {
        NewReview {
            text: text.to_owned(),
            rating,
            place_id: PlaceId::random(),
            user_id: UserId::random(),
        }
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn ratings_within_bounds_are_accepted(now: DateTime<Utc>, #[case] rating: i64) {
        let review = Review::try_new(input("Lovely stay", rating), now).expect("valid review");
        assert_eq!(i64::from(review.rating()), rating);
        assert_eq!(review.text(), "Lovely stay");
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-1)]
    #[case(256)]
    #[case(i64::MAX)]
    fn ratings_outside_bounds_are_rejected(now: DateTime<Utc>, #[case] rating: i64) {
        let err = Review::try_new(input("Fine", rating), now).expect_err("bad rating");
        assert_eq!(err, ReviewValidationError::RatingOutOfRange);
        assert_eq!(err.field(), "rating");
    }

    #[rstest]
    fn blank_text_is_rejected(now: DateTime<Utc>) {
        let err = Review::try_new(input(" \n", 4), now).expect_err("blank text");
        assert_eq!(err, ReviewValidationError::EmptyText);
        assert_eq!(err.to_string(), "Review text is required");
    }

    #[rstest]
    fn update_keeps_links_and_touches(now: DateTime<Utc>) {
        let review = Review::try_new(input("Good", 3), now).expect("valid review");
        let later = now + chrono::Duration::days(1);
        let update = ReviewUpdate {
            text: Some("Even better on a second visit".to_owned()),
            rating: Some(5),
        };

        let updated = review.with_update(&update, later).expect("valid update");

        assert_eq!(updated.rating(), 5);
        assert_eq!(updated.place_id(), review.place_id());
        assert_eq!(updated.user_id(), review.user_id());
        assert_eq!(updated.updated_at(), later);
    }

    #[rstest]
    fn empty_update_changes_nothing(now: DateTime<Utc>) {
        let review = Review::try_new(input("Good", 3), now).expect("valid review");

        let updated = review
            .with_update(&ReviewUpdate::default(), now + chrono::Duration::days(1))
            .expect("empty update");

        assert_eq!(updated, review);
    }

    #[rstest]
    fn rejected_rating_update_leaves_review_unchanged(now: DateTime<Utc>) {
        let review = Review::try_new(input("Good", 3), now).expect("valid review");
        let update = ReviewUpdate {
            text: None,
            rating: Some(9),
        };

        let err = review
            .with_update(&update, now + chrono::Duration::days(1))
            .expect_err("bad rating");

        assert_eq!(err, ReviewValidationError::RatingOutOfRange);
        assert_eq!(review.rating(), 3);
    }
}

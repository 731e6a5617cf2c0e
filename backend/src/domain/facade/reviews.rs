//! Review operations. Reviews are mirrored in their place's review list.

use tracing::{error, info, warn};

use super::{HbnbFacade, commit_staged, map_repository_error, validation_error};
use crate::domain::entity::Entity;
use crate::domain::{Error, NewReview, PlaceId, Review, ReviewId, ReviewUpdate, UserId};

impl HbnbFacade {
    /// Write a review and append it to its place.
    ///
    /// The place is checked before the author.
    pub fn create_review(&self, input: NewReview) -> Result<Review, Error> {
        if self.places.get(&input.place_id).is_none() {
            warn!(place_id = %input.place_id, "review rejected: unknown place");
            return Err(Error::unknown_reference("place_id", input.place_id));
        }
        if self.users.get(&input.user_id).is_none() {
            warn!(user_id = %input.user_id, "review rejected: unknown user");
            return Err(Error::unknown_reference("user_id", input.user_id));
        }
        let now = self.now();
        let review = Review::try_new(input, now).map_err(|err| validation_error(&err))?;
        self.reviews
            .add(review.clone())
            .map_err(map_repository_error)?;

        let review_id = *review.id();
        let linked = self.places.modify(review.place_id(), &mut |place| {
            if place.add_review(review_id) {
                place.touch(now);
            }
        });
        if linked.is_none() {
            self.reviews.delete(&review_id);
            error!(
                review_id = %review_id,
                place_id = %review.place_id(),
                "place disappeared before the review could be linked"
            );
            return Err(Error::internal("failed to link review to its place"));
        }

        info!(review_id = %review_id, place_id = %review.place_id(), "review created");
        Ok(review)
    }

    pub fn get_review(&self, id: &ReviewId) -> Option<Review> {
        self.reviews.get(id)
    }

    pub fn get_all_reviews(&self) -> Vec<Review> {
        self.reviews.get_all()
    }

    pub fn get_reviews_by_place(&self, place_id: &PlaceId) -> Vec<Review> {
        self.reviews
            .filter(&|review: &Review| review.place_id() == place_id)
    }

    pub fn get_reviews_by_user(&self, user_id: &UserId) -> Vec<Review> {
        self.reviews
            .filter(&|review: &Review| review.user_id() == user_id)
    }

    /// Apply `update` to the review with `id`. Returns `Ok(None)` when it does
    /// not exist.
    pub fn update_review(
        &self,
        id: &ReviewId,
        update: &ReviewUpdate,
    ) -> Result<Option<Review>, Error> {
        let now = self.now();
        let updated = commit_staged(self.reviews.as_ref(), id, |review| {
            review.with_update(update, now)
        })
        .map_err(|err| validation_error(&err))?;
        if let Some(review) = &updated {
            info!(review_id = %review.id(), "review updated");
        }
        Ok(updated)
    }

    /// Remove a review and unlink it from its place.
    ///
    /// Returns `false` when no review has this identifier.
    pub fn delete_review(&self, id: &ReviewId) -> bool {
        let Some(review) = self.reviews.get(id) else {
            return false;
        };
        if !self.reviews.delete(id) {
            return false;
        }
        let now = self.now();
        self.places.modify(review.place_id(), &mut |place| {
            if place.remove_review(id) {
                place.touch(now);
            }
        });
        info!(review_id = %id, place_id = %review.place_id(), "review deleted");
        true
    }
}

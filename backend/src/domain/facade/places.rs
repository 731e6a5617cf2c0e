//! Place operations, including amenity links and the resolved detail view.

use tracing::{info, warn};

use super::{HbnbFacade, commit_staged, map_repository_error, validation_error};
use crate::domain::entity::Entity;
use crate::domain::{
    Amenity, AmenityId, Error, NewPlace, Place, PlaceId, PlaceUpdate, Review, User,
};

/// A place with its references resolved.
///
/// References that no longer resolve are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetails {
    pub place: Place,
    pub owner: Option<User>,
    pub amenities: Vec<Amenity>,
    pub reviews: Vec<Review>,
}

impl HbnbFacade {
    /// List a new place.
    ///
    /// The owner and every amenity must already exist; the first missing
    /// reference is reported before any field validation runs.
    pub fn create_place(&self, input: NewPlace) -> Result<Place, Error> {
        if self.users.get(&input.owner_id).is_none() {
            warn!(owner_id = %input.owner_id, "place rejected: unknown owner");
            return Err(Error::unknown_reference("owner_id", input.owner_id));
        }
        if let Some(missing) = input
            .amenity_ids
            .iter()
            .find(|id| self.amenities.get(id).is_none())
        {
            warn!(amenity_id = %missing, "place rejected: unknown amenity");
            return Err(Error::unknown_reference("amenity_id", missing));
        }
        let place = Place::try_new(input, self.now()).map_err(|err| validation_error(&err))?;
        self.places
            .add(place.clone())
            .map_err(map_repository_error)?;
        info!(place_id = %place.id(), owner_id = %place.owner_id(), "place created");
        Ok(place)
    }

    pub fn get_place(&self, id: &PlaceId) -> Option<Place> {
        self.places.get(id)
    }

    pub fn get_all_places(&self) -> Vec<Place> {
        self.places.get_all()
    }

    /// Fetch a place together with its owner, amenities and reviews.
    pub fn get_place_details(&self, id: &PlaceId) -> Option<PlaceDetails> {
        let place = self.places.get(id)?;
        let owner = self.users.get(place.owner_id());
        let amenities = place
            .amenity_ids()
            .iter()
            .filter_map(|amenity_id| self.amenities.get(amenity_id))
            .collect();
        let reviews = place
            .review_ids()
            .iter()
            .filter_map(|review_id| self.reviews.get(review_id))
            .collect();
        Some(PlaceDetails {
            place,
            owner,
            amenities,
            reviews,
        })
    }

    /// Apply `update` to the place with `id`. Returns `Ok(None)` when it does
    /// not exist.
    pub fn update_place(&self, id: &PlaceId, update: &PlaceUpdate) -> Result<Option<Place>, Error> {
        let now = self.now();
        let updated = commit_staged(self.places.as_ref(), id, |place| place.with_update(update, now))
            .map_err(|err| validation_error(&err))?;
        if let Some(place) = &updated {
            info!(place_id = %place.id(), "place updated");
        }
        Ok(updated)
    }

    /// Link an existing amenity to a place. Linking twice is a no-op and does
    /// not move `updated_at`.
    ///
    /// Returns `Ok(None)` when the place does not exist.
    pub fn add_place_amenity(
        &self,
        place_id: &PlaceId,
        amenity_id: &AmenityId,
    ) -> Result<Option<Place>, Error> {
        if self.amenities.get(amenity_id).is_none() {
            return Err(Error::not_found("Amenity not found"));
        }
        let now = self.now();
        let updated = self.places.modify(place_id, &mut |place| {
            if place.add_amenity(*amenity_id) {
                place.touch(now);
            }
        });
        if updated.is_some() {
            info!(place_id = %place_id, amenity_id = %amenity_id, "amenity linked to place");
        }
        Ok(updated)
    }
}

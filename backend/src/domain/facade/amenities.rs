//! Amenity operations.

use tracing::info;

use super::{HbnbFacade, commit_staged, map_repository_error, validation_error};
use crate::domain::entity::Entity;
use crate::domain::{Amenity, AmenityId, AmenityUpdate, Error, NewAmenity};

impl HbnbFacade {
    pub fn create_amenity(&self, input: NewAmenity) -> Result<Amenity, Error> {
        let amenity =
            Amenity::try_new(input, self.now()).map_err(|err| validation_error(&err))?;
        self.amenities
            .add(amenity.clone())
            .map_err(map_repository_error)?;
        info!(amenity_id = %amenity.id(), "amenity created");
        Ok(amenity)
    }

    pub fn get_amenity(&self, id: &AmenityId) -> Option<Amenity> {
        self.amenities.get(id)
    }

    pub fn get_all_amenities(&self) -> Vec<Amenity> {
        self.amenities.get_all()
    }

    /// Rename the amenity with `id`. Returns `Ok(None)` when it does not exist.
    pub fn update_amenity(
        &self,
        id: &AmenityId,
        update: &AmenityUpdate,
    ) -> Result<Option<Amenity>, Error> {
        let now = self.now();
        let updated = commit_staged(self.amenities.as_ref(), id, |amenity| {
            amenity.with_update(update, now)
        })
        .map_err(|err| validation_error(&err))?;
        if let Some(amenity) = &updated {
            info!(amenity_id = %amenity.id(), "amenity updated");
        }
        Ok(updated)
    }
}

//! Facade coordinating the four entity repositories.
//!
//! Every inbound adapter talks to [`HbnbFacade`]. It validates input through
//! the entity constructors, checks that referenced entities exist and commits
//! partial updates through staged copies so a rejected change never reaches
//! the store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::json;

use crate::domain::entity::{Entity, FieldValidationError};
use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{Amenity, Error, Place, Review, User};

mod amenities;
mod places;
mod reviews;
mod users;

pub use places::PlaceDetails;

/// Repository handles the facade is built from.
#[derive(Clone)]
pub struct FacadeRepositories {
    pub users: Arc<dyn Repository<User>>,
    pub places: Arc<dyn Repository<Place>>,
    pub amenities: Arc<dyn Repository<Amenity>>,
    pub reviews: Arc<dyn Repository<Review>>,
}

/// Entry point for every CRUD operation over users, places, amenities and
/// reviews.
#[derive(Clone)]
pub struct HbnbFacade {
    users: Arc<dyn Repository<User>>,
    places: Arc<dyn Repository<Place>>,
    amenities: Arc<dyn Repository<Amenity>>,
    reviews: Arc<dyn Repository<Review>>,
    clock: Arc<dyn Clock>,
}

impl HbnbFacade {
    /// Create a facade over `repositories`, stamping entities with `clock`.
    pub fn new(repositories: FacadeRepositories, clock: Arc<dyn Clock>) -> Self {
        let FacadeRepositories {
            users,
            places,
            amenities,
            reviews,
        } = repositories;
        Self {
            users,
            places,
            amenities,
            reviews,
            clock,
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}

fn validation_error<V: FieldValidationError>(err: &V) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": "validation_failed",
    }))
}

fn map_repository_error(err: RepositoryError) -> Error {
    match err {
        RepositoryError::DuplicateId { id } => {
            Error::internal(format!("repository already holds entity {id}"))
        }
    }
}

/// Replace the stored entity with the copy produced by `stage`.
///
/// `Ok(None)` means no entity has this identifier. When `stage` rejects the
/// change the stored entity is left as it was.
fn commit_staged<E, V>(
    repository: &dyn Repository<E>,
    id: &E::Id,
    stage: impl Fn(&E) -> Result<E, V>,
) -> Result<Option<E>, V>
where
    E: Entity,
{
    let mut rejection = None;
    let committed = repository.modify(id, &mut |current| match stage(current) {
        Ok(staged) => *current = staged,
        Err(err) => rejection = Some(err),
    });
    match rejection {
        Some(err) => Err(err),
        None => Ok(committed),
    }
}

#[cfg(test)]
mod tests;

//! Port abstraction for entity storage.
//!
//! One repository holds one entity type, keyed by the entity identifier.
//! Operations are synchronous: adapters are expected to be in-memory and
//! must serialise concurrent access themselves.

use crate::domain::entity::Entity;

use super::define_port_error;

define_port_error! {
    /// Storage errors raised by repository adapters.
    pub enum RepositoryError {
        /// An entity with the same identifier is already stored.
        DuplicateId { id: String } => "entity {id} is already stored",
    }
}

/// Keyed store for a single entity type.
///
/// Listing operations return entities in insertion order.
pub trait Repository<E: Entity>: Send + Sync {
    /// Store a new entity.
    fn add(&self, entity: E) -> Result<(), RepositoryError>;

    /// Fetch an entity by identifier.
    fn get(&self, id: &E::Id) -> Option<E>;

    /// List every stored entity.
    fn get_all(&self) -> Vec<E>;

    /// Return the first entity for which `matches` holds.
    fn get_by_attribute(&self, matches: &dyn Fn(&E) -> bool) -> Option<E>;

    /// Apply `change` to the stored entity under exclusive access.
    ///
    /// Returns the entity as stored after the change, or `None` when no
    /// entity has this identifier. The closure must not change the
    /// identifier.
    fn modify(&self, id: &E::Id, change: &mut dyn FnMut(&mut E)) -> Option<E>;

    /// Remove an entity. Returns `true` when something was removed.
    fn delete(&self, id: &E::Id) -> bool;

    /// Return every entity for which `matches` holds.
    fn filter(&self, matches: &dyn Fn(&E) -> bool) -> Vec<E> {
        self.get_all()
            .into_iter()
            .filter(|entity| matches(entity))
            .collect()
    }
}

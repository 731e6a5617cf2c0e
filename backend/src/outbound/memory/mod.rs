//! In-memory repository adapter.
//!
//! Entities live in a hash map keyed by identifier, with a separate vector
//! recording insertion order for listings. One `RwLock` per repository
//! serialises writers while letting readers proceed concurrently.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entity::Entity;
use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::FacadeRepositories;

struct Store<E: Entity> {
    entities: HashMap<E::Id, E>,
    order: Vec<E::Id>,
}

impl<E: Entity> Default for Store<E> {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<E: Entity> Store<E> {
    fn ordered(&self) -> impl Iterator<Item = &E> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }
}

/// Process-local repository for one entity type.
pub struct InMemoryRepository<E: Entity> {
    store: RwLock<Store<E>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }

    // A panic inside `modify` poisons the lock; the map itself stays
    // structurally sound so later callers keep working.
    fn read(&self) -> RwLockReadGuard<'_, Store<E>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store<E>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn add(&self, entity: E) -> Result<(), RepositoryError> {
        let mut store = self.write();
        let id = *entity.id();
        if store.entities.contains_key(&id) {
            return Err(RepositoryError::duplicate_id(id.to_string()));
        }
        store.entities.insert(id, entity);
        store.order.push(id);
        Ok(())
    }

    fn get(&self, id: &E::Id) -> Option<E> {
        self.read().entities.get(id).cloned()
    }

    fn get_all(&self) -> Vec<E> {
        self.read().ordered().cloned().collect()
    }

    fn get_by_attribute(&self, matches: &dyn Fn(&E) -> bool) -> Option<E> {
        self.read()
            .ordered()
            .find(|entity| matches(entity))
            .cloned()
    }

    fn modify(&self, id: &E::Id, change: &mut dyn FnMut(&mut E)) -> Option<E> {
        let mut store = self.write();
        let entity = store.entities.get_mut(id)?;
        change(entity);
        Some(entity.clone())
    }

    fn delete(&self, id: &E::Id) -> bool {
        let mut store = self.write();
        if store.entities.remove(id).is_none() {
            return false;
        }
        store.order.retain(|stored| stored != id);
        true
    }

    fn filter(&self, matches: &dyn Fn(&E) -> bool) -> Vec<E> {
        self.read()
            .ordered()
            .filter(|entity| matches(entity))
            .cloned()
            .collect()
    }
}

/// Fresh, empty in-memory repositories for every entity type.
pub fn in_memory_repositories() -> FacadeRepositories {
    FacadeRepositories {
        users: Arc::new(InMemoryRepository::new()),
        places: Arc::new(InMemoryRepository::new()),
        amenities: Arc::new(InMemoryRepository::new()),
        reviews: Arc::new(InMemoryRepository::new()),
    }
}

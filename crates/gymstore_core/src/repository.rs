//! Typed repository over the shared store.

use crate::entity::{Entity, EntityId};
use crate::error::{CoreError, CoreResult};
use crate::store::TypedStore;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// Type-safe access to the records of one entity type.
///
/// `Repository<T>` is a thin, cloneable handle over a shared [`TypedStore`].
/// All repositories built over the same store see the same records and share
/// the same id counters.
///
/// # Example
///
/// ```rust
/// use gymstore_core::{Repository, TrainingType, TypedStore};
/// use std::sync::Arc;
///
/// let store = Arc::new(TypedStore::new());
/// let types: Repository<TrainingType> = Repository::new(store);
///
/// let saved = types.save(TrainingType::new("Yoga"));
/// assert_eq!(saved.id().map(|id| id.as_u64()), Some(1));
///
/// let yoga = types.find_by_condition(|t| t.name == "Yoga");
/// assert_eq!(yoga.len(), 1);
/// ```
pub struct Repository<T: Entity> {
    store: Arc<TypedStore>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> Repository<T> {
    /// Creates a repository over `store`.
    pub fn new(store: Arc<TypedStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<TypedStore> {
        &self.store
    }

    /// Saves `record`, generating an id first if it has none.
    ///
    /// A record that already carries an id is stored under that id, replacing
    /// whatever was there, and the id counter is raised to it so later
    /// generated ids do not land on the same key. The returned record always
    /// has an id.
    pub fn save(&self, mut record: T) -> T {
        let id = match record.entity_id() {
            Some(id) => {
                self.store.initialize_id_counter(&T::namespace(), id);
                id
            }
            None => {
                let id = self.store.generate_id::<T>();
                record.assign_id(id);
                id
            }
        };

        self.store.put(id, record.clone());
        info!(entity = T::TYPE_NAME, %id, "saved");
        record
    }

    /// Returns the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no such record exists.
    pub fn find_by_id(&self, id: EntityId) -> CoreResult<T> {
        self.store
            .get::<T>(id)
            .ok_or_else(|| CoreError::not_found::<T>(id))
    }

    /// Returns every record matching `predicate`.
    pub fn find_by_condition(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.store.scan(predicate)
    }

    /// Returns every record of this type.
    pub fn find_all(&self) -> Vec<T> {
        self.store.scan(|_: &T| true)
    }

    /// Returns the number of records of this type.
    pub fn count(&self) -> usize {
        self.store.len_in(&T::namespace())
    }

    /// Checks whether a record exists under `id`.
    pub fn exists_by_id(&self, id: EntityId) -> bool {
        self.store.exists::<T>(id)
    }

    /// Deletes the record stored under `id`. Deleting a missing record is a
    /// no-op.
    pub fn delete_by_id(&self, id: EntityId) {
        if self.store.delete::<T>(id) {
            info!(entity = T::TYPE_NAME, %id, "deleted");
        }
    }

    /// Checks whether any identity-bearing record in the store, of any type,
    /// uses `username`.
    pub fn exists_by_username(&self, username: &str) -> bool {
        self.store.exists_by_username(username)
    }
}

impl<T: Entity> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.store))
    }
}

impl<T: Entity> std::fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &T::TYPE_NAME)
            .field("count", &self.count())
            .finish()
    }
}

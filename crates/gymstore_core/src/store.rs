//! Namespaced, concurrency-safe record store.

use crate::entity::{Entity, EntityId};
use crate::stats::StoreStats;
use crate::types::Namespace;
use parking_lot::RwLock;
use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A stored record together with the username it exposed when it was put.
struct Slot {
    record: Box<dyn Any + Send + Sync>,
    username: Option<String>,
}

type NamespaceMap = HashMap<EntityId, Slot>;

/// Process-local store of typed records.
///
/// Records live in a two-level map `namespace → id → record`, so a
/// [`StorageKey`](crate::StorageKey) maps to at most one record. Each
/// namespace also owns a monotonic identifier counter.
///
/// # Concurrency
///
/// Every method takes `&self` and is safe to call from many threads. The
/// record map sits behind a read/write lock; counters are atomics shared
/// through `Arc`, so generating ids never waits on record writes.
/// Reserving an id and storing the record under it are separate steps: an id
/// can be handed out and never used, but it is never handed out twice.
///
/// `scan` and `exists_by_username` walk every candidate record and are linear
/// in the number of stored records.
///
/// # Example
///
/// ```rust
/// use gymstore_core::{Trainee, TypedStore};
///
/// let store = TypedStore::new();
/// let id = store.generate_id::<Trainee>();
/// store.put(id, Trainee::new("John", "Doe"));
///
/// let found = store.get::<Trainee>(id).unwrap();
/// assert_eq!(found.profile.first_name, "John");
/// ```
pub struct TypedStore {
    records: RwLock<HashMap<Namespace, NamespaceMap>>,
    counters: RwLock<HashMap<Namespace, Arc<AtomicU64>>>,
    stats: StoreStats,
}

impl TypedStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            counters: RwLock::new(HashMap::new()),
            stats: StoreStats::new(),
        }
    }

    /// Returns the next identifier for record type `T`.
    ///
    /// The first call for a fresh type returns 1.
    pub fn generate_id<T: Entity>(&self) -> EntityId {
        self.generate_id_in(&T::namespace())
    }

    /// Returns the next identifier for `namespace`.
    ///
    /// Seeds are capped at [`EntityId::MAX`], which leaves the counter far
    /// from `u64::MAX`; generation never wraps around to zero.
    pub fn generate_id_in(&self, namespace: &Namespace) -> EntityId {
        let next = self.counter(namespace).fetch_add(1, Ordering::SeqCst) + 1;
        self.stats.record_id_generated();
        EntityId::new(next)
    }

    /// Raises the counter of `namespace` to at least `seed`.
    ///
    /// The next generated id is then `max(current, seed) + 1`. Lower seeds
    /// leave the counter unchanged. A seed above [`EntityId::MAX`] is treated
    /// as `EntityId::MAX`.
    pub fn initialize_id_counter(&self, namespace: &Namespace, seed: EntityId) {
        let seed = if seed > EntityId::MAX {
            warn!(%namespace, %seed, "id seed above maximum, capping");
            EntityId::MAX
        } else {
            seed
        };
        let previous = self
            .counter(namespace)
            .fetch_max(seed.as_u64(), Ordering::SeqCst);
        if previous < seed.as_u64() {
            debug!(%namespace, from = previous, to = seed.as_u64(), "raised id counter");
        }
    }

    /// Returns the last identifier handed out or seeded for `namespace`.
    ///
    /// Zero means the namespace has never produced an id.
    pub fn current_id(&self, namespace: &Namespace) -> u64 {
        self.counters
            .read()
            .get(namespace)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }

    /// Stores `record` under `id`, replacing any previous record.
    pub fn put<T: Entity>(&self, id: EntityId, record: T) {
        let username = record
            .account()
            .and_then(|account| account.username())
            .map(str::to_owned);
        let slot = Slot {
            record: Box::new(record),
            username,
        };

        self.records
            .write()
            .entry(T::namespace())
            .or_default()
            .insert(id, slot);
        self.stats.record_write();
        debug!(namespace = T::NAMESPACE, %id, "stored record");
    }

    /// Returns the record of type `T` stored under `id`.
    ///
    /// Returns `None` when nothing is stored there or when the stored value
    /// is not a `T`.
    pub fn get<T: Entity>(&self, id: EntityId) -> Option<T> {
        self.stats.record_read();
        let records = self.records.read();
        records
            .get(T::NAMESPACE)
            .and_then(|ns| ns.get(&id))
            .and_then(|slot| slot.record.downcast_ref::<T>())
            .cloned()
    }

    /// Checks whether a record of type `T` is stored under `id`.
    pub fn exists<T: Entity>(&self, id: EntityId) -> bool {
        let records = self.records.read();
        records
            .get(T::NAMESPACE)
            .and_then(|ns| ns.get(&id))
            .is_some_and(|slot| slot.record.is::<T>())
    }

    /// Returns every record of type `T` matching `predicate`, in no
    /// particular order.
    ///
    /// The predicate runs while the store is read-locked and must not call
    /// back into the store.
    pub fn scan<T: Entity>(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.stats.record_scan();
        let records = self.records.read();
        records
            .get(T::NAMESPACE)
            .map(|ns| {
                ns.values()
                    .filter_map(|slot| slot.record.downcast_ref::<T>())
                    .filter(|record| predicate(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Removes the record of type `T` stored under `id`.
    ///
    /// Returns whether a record was removed. The id counter is not touched.
    pub fn delete<T: Entity>(&self, id: EntityId) -> bool {
        self.delete_in(&T::namespace(), id)
    }

    /// Removes whatever is stored at `(namespace, id)`.
    pub fn delete_in(&self, namespace: &Namespace, id: EntityId) -> bool {
        let removed = self
            .records
            .write()
            .get_mut(namespace)
            .and_then(|ns| ns.remove(&id))
            .is_some();
        if removed {
            self.stats.record_delete();
            debug!(%namespace, %id, "deleted record");
        }
        removed
    }

    /// Checks whether any identity-bearing record, in any namespace, has
    /// the username `name`.
    pub fn exists_by_username(&self, name: &str) -> bool {
        self.stats.record_scan();
        self.records
            .read()
            .values()
            .flat_map(HashMap::values)
            .any(|slot| slot.username.as_deref() == Some(name))
    }

    /// Returns the total number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().values().map(HashMap::len).sum()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of records stored in `namespace`.
    pub fn len_in(&self, namespace: &Namespace) -> usize {
        self.records.read().get(namespace).map_or(0, HashMap::len)
    }

    /// Returns the namespaces currently holding records, sorted by name.
    pub fn namespaces(&self) -> Vec<Namespace> {
        let mut names: Vec<Namespace> = self
            .records
            .read()
            .iter()
            .filter(|(_, ns)| !ns.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Removes all records and resets every id counter to zero.
    pub fn clear(&self) {
        let mut records = self.records.write();
        let mut counters = self.counters.write();
        records.clear();
        counters.clear();
        info!("store cleared");
    }

    /// Returns the operation counters.
    pub fn stats(&self) -> &StoreStats {
        &self.stats
    }

    fn counter(&self, namespace: &Namespace) -> Arc<AtomicU64> {
        if let Some(counter) = self.counters.read().get(namespace) {
            return Arc::clone(counter);
        }
        let mut counters = self.counters.write();
        Arc::clone(counters.entry(namespace.clone()).or_default())
    }
}

impl Default for TypedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedStore")
            .field("len", &self.len())
            .field("namespaces", &self.namespaces())
            .finish_non_exhaustive()
    }
}

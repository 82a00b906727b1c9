//! Store statistics.
//!
//! Counters are updated by [`TypedStore`](crate::TypedStore) on every
//! operation and can be read while other threads keep working:
//!
//! ```rust
//! use gymstore_core::TypedStore;
//!
//! let store = TypedStore::new();
//! let _ = store.generate_id_in(&gymstore_core::Namespace::new("trainee"));
//! assert_eq!(store.stats().snapshot().ids_generated, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Store statistics.
///
/// All counters are atomic and monotonically increasing.
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Total number of `get` calls.
    reads: AtomicU64,
    /// Total number of `put` calls.
    writes: AtomicU64,
    /// Total number of `delete` calls that removed a record.
    deletes: AtomicU64,
    /// Total number of namespace scans and username scans.
    scans: AtomicU64,
    /// Total number of identifiers handed out.
    ids_generated: AtomicU64,
}

impl StoreStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_id_generated(&self) {
        self.ids_generated.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the total number of reads.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the total number of writes.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Returns the total number of effective deletes.
    pub fn deletes(&self) -> u64 {
        self.deletes.load(Ordering::Relaxed)
    }

    /// Returns the total number of full scans.
    ///
    /// Scans are linear in the store size.
    pub fn scans(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    /// Returns the total number of generated identifiers.
    pub fn ids_generated(&self) -> u64 {
        self.ids_generated.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads(),
            writes: self.writes(),
            deletes: self.deletes(),
            scans: self.scans(),
            ids_generated: self.ids_generated(),
        }
    }
}

/// A point-in-time snapshot of store statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    /// Total number of reads.
    pub reads: u64,
    /// Total number of writes.
    pub writes: u64,
    /// Total number of effective deletes.
    pub deletes: u64,
    /// Total number of full scans.
    pub scans: u64,
    /// Total number of generated identifiers.
    pub ids_generated: u64,
}

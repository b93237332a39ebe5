//! # Record Store
//!
//! In-memory, insertion-ordered catalog.
//!
//! Writers are serialised by a mutex and publish a fresh immutable vector on
//! every mutation. Readers load the current vector without locking, so a
//! snapshot can be iterated while other requests keep mutating the store.

use std::ops::Deref;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use super::record::Record;

/// Point-in-time, immutable view of the store
#[derive(Debug, Clone)]
pub struct Snapshot {
    records: Arc<Vec<Record>>,
}

impl Snapshot {
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Deref for Snapshot {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.records
    }
}

/// Concurrent record store
#[derive(Debug)]
pub struct Store {
    current: ArcSwap<Vec<Record>>,
    write_lock: Mutex<()>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
        }
    }

    /// Add a record at the end. The caller validates beforehand.
    pub fn append(&self, record: Record) {
        let _guard = self.write_lock.lock();
        let cur = self.current.load_full();
        let mut next = Vec::with_capacity(cur.len() + 1);
        next.extend(cur.iter().cloned());
        next.push(record);
        self.current.store(Arc::new(next));
    }

    /// Remove the record with the given id.
    ///
    /// Returns whether anything was removed; a missing id is not an error.
    pub fn remove_by_id(&self, id: u64) -> bool {
        let _guard = self.write_lock.lock();
        let cur = self.current.load_full();
        let Some(pos) = cur.iter().position(|r| r.id() == id) else {
            return false;
        };

        let mut next = (*cur).clone();
        next.remove(pos);
        self.current.store(Arc::new(next));
        true
    }

    /// Take a consistent view of every record, in insertion order
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: self.current.load_full(),
        }
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

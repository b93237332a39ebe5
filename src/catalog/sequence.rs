//! # Identifier Sequence
//!
//! Hands out record identities. Shared by reference wherever records are
//! constructed; there is no global counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic, process-wide source of record ids
#[derive(Debug)]
pub struct IdentifierSequence {
    next: AtomicU64,
}

impl IdentifierSequence {
    /// Create a sequence whose first id is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence whose first id is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next id. Never returns the same value twice.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdentifierSequence {
    fn default() -> Self {
        Self::new()
    }
}

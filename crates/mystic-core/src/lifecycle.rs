//! Load lifecycle: liveness of the owning view and staleness of results.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared liveness flag between a front-end and its in-flight load.
///
/// Clones observe the same flag. Once cancelled it stays cancelled.
#[derive(Debug, Clone)]
pub struct Lifeline {
    alive: Arc<AtomicBool>,
}

impl Default for Lifeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifeline {
    /// Create a live flag.
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Mark the owning view as torn down.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// Whether the owning view is still mounted.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Whether `other` observes the same flag as `self`.
    pub fn same_flag(&self, other: &Lifeline) -> bool {
        Arc::ptr_eq(&self.alive, &other.alive)
    }
}

/// Permission to apply one load result.
///
/// Issued by [`Storefront::begin_load`](crate::Storefront::begin_load) and
/// consumed by [`Storefront::finish_load`](crate::Storefront::finish_load).
#[derive(Debug, Clone)]
pub struct LoadTicket {
    pub(crate) generation: u64,
    pub(crate) lifeline: Lifeline,
}

impl LoadTicket {
    /// Sequence number of the load this ticket belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the issuing view is still mounted.
    pub fn is_live(&self) -> bool {
        self.lifeline.is_alive()
    }
}

/// What happened to a load result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The product list was replaced.
    Loaded { count: usize },
    /// The fetch failed; the list was left as it was.
    Failed,
    /// The result arrived after teardown or after a newer load began.
    Discarded,
}

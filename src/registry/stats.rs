//! Registry operation statistics.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked by the registry.
///
/// All fields are atomic for lock-free, thread-safe updates; readers can
/// bump the lookup counters while holding only the read lock.
///
/// # Memory Ordering
/// `Ordering::Relaxed` throughout: the counters only need atomicity, not
/// synchronization with each other, and a snapshot that is off by an
/// in-flight increment is fine for reporting.
#[derive(Debug, Default)]
pub struct RegistryStats {
    /// Number of successful `add` operations.
    pub adds: AtomicU64,

    /// Number of successful `remove` operations.
    pub removals: AtomicU64,

    /// Number of `search` calls.
    pub lookups: AtomicU64,

    /// Number of `search` calls that found a record.
    pub lookup_hits: AtomicU64,

    /// Number of times the grade index was rebuilt from the store.
    pub grade_rebuilds: AtomicU64,
}

impl RegistryStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of lookups that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let hits = self.lookup_hits.load(Ordering::Relaxed);

        if lookups == 0 {
            0.0
        } else {
            hits as f64 / lookups as f64
        }
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            adds: self.adds.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            grade_rebuilds: self.grade_rebuilds.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of registry statistics.
///
/// Unlike [`RegistryStats`], this is not atomic and can be safely printed,
/// compared, or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub adds: u64,
    pub removals: u64,
    pub lookups: u64,
    pub lookup_hits: u64,
    pub grade_rebuilds: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / self.lookups as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ adds: {}, removals: {}, lookups: {}, hit_rate: {:.2}%, rebuilds: {} }}",
            self.adds,
            self.removals,
            self.lookups,
            self.hit_rate() * 100.0,
            self.grade_rebuilds
        )
    }
}

//! The registry orchestrator.
//!
//! The registry owns one of each structure and keeps them synchronized:
//! every mutation updates the store and both indexes under one write lock,
//! and every read is routed to whichever structure answers it best.
//!
//! # Components
//! - [`Registry`] - the orchestrator and public API surface
//! - [`RegistryStats`] / [`StatsSnapshot`] - operation counters

mod stats;
mod student_registry;

pub use student_registry::Registry;
pub use stats::{RegistryStats, StatsSnapshot};

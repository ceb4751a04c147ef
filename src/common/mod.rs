//! Common types and utilities shared across rosterdb.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The student record and its key types (Grade, SlotId)

pub mod config;
pub mod error;
mod grade;
mod slot_id;
mod student;

pub use error::{Error, Result};
pub use grade::Grade;
pub use slot_id::SlotId;
pub use student::Student;

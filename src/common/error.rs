//! Error types for rosterdb.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in rosterdb.
///
/// Both variants are expected, recoverable conditions reported to the
/// caller as values. Neither leaves the registry partially updated: `add`
/// checks for duplicates before touching any structure, and `remove`
/// touches nothing when the ID is absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `add` was called with a student ID that is already registered.
    #[error("student ID {0} already exists")]
    DuplicateId(String),

    /// `remove` was called with a student ID that is not registered.
    #[error("student ID {0} not found")]
    NotFound(String),
}

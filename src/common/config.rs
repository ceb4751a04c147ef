//! Configuration constants for rosterdb.

/// Number of buckets in the [`IdIndex`](crate::index::IdIndex) hash table.
///
/// This value is chosen to match the reference registry layout:
/// - 100 buckets with the polynomial rolling hash spreads typical
///   `S001`-style IDs evenly
/// - Per-bucket chains stay short (a handful of entries) up to a few
///   thousand students
///
/// The bucket count is fixed at construction; the table does not resize.
/// `IdIndex::with_buckets` exists for tests that want to force collisions.
pub const BUCKET_COUNT: usize = 100;

/// Lowest grade a caller should ever hand to the registry.
pub const MIN_GRADE: f64 = 0.0;

/// Highest grade a caller should ever hand to the registry.
///
/// Grade validation is the caller's job (the registry is the core, not the
/// input layer); these bounds exist so callers agree on the range.
pub const MAX_GRADE: f64 = 100.0;

/// Conventional threshold for the "top performers" range query.
pub const DEFAULT_TOP_GRADE: f64 = 80.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bounds() {
        assert!(MIN_GRADE < MAX_GRADE);
        assert!(MIN_GRADE <= DEFAULT_TOP_GRADE && DEFAULT_TOP_GRADE <= MAX_GRADE);
    }

    #[test]
    fn test_bucket_count_nonzero() {
        assert!(BUCKET_COUNT > 0);
    }
}

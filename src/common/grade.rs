//! Grade key type.

use std::cmp::Ordering;
use std::fmt;

/// A student's grade, expected to lie in `[0.0, 100.0]`.
///
/// Wraps `f64` with a *total* order (via [`f64::total_cmp`]) so grades can
/// key the BST and sort deterministically. Plain `f64` only implements
/// `PartialOrd`, which would push NaN handling into every comparison site.
///
/// Range validation is the input layer's responsibility
/// (see [`MIN_GRADE`](crate::common::config::MIN_GRADE) /
/// [`MAX_GRADE`](crate::common::config::MAX_GRADE)); the registry never
/// rejects a grade.
///
/// # Example
/// ```
/// use rosterdb::Grade;
///
/// let a = Grade::new(78.3);
/// let b = Grade::new(92.5);
/// assert!(a < b);
/// assert_eq!(format!("{}", b), "92.50");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Grade(pub f64);

impl Grade {
    /// Create a new Grade.
    #[inline]
    pub fn new(value: f64) -> Self {
        Grade(value)
    }

    /// The raw grade value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

// Manual impls keep Eq/Ord consistent with each other: both go through
// total_cmp, so 0.0 and -0.0 compare the same way everywhere.

impl PartialEq for Grade {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Grade {}

impl PartialOrd for Grade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Grade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Grade {
    fn from(value: f64) -> Self {
        Grade(value)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

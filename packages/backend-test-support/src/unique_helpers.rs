//! Test helpers for generating unique test data
//!
//! Utilities to generate unique test data so tests stay isolated and
//! never collide between runs.

use std::sync::atomic::{AtomicU64, Ordering};

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("employee");
/// let id2 = unique_str("employee");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("employee-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

static NEXT_DNI: AtomicU64 = AtomicU64::new(40_000_000);

/// Generate a unique 8-digit DNI for test fixtures
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_dni;
///
/// let dni1 = unique_dni();
/// let dni2 = unique_dni();
/// assert_ne!(dni1, dni2);
/// assert_eq!(dni1.len(), 8);
/// ```
pub fn unique_dni() -> String {
    let n = NEXT_DNI.fetch_add(1, Ordering::Relaxed);
    format!("{n:08}")
}

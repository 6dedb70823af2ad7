//! # Identity Generation
//!
//! Every zone, unit, item and user gets a random UUID v4 at creation time.
//!
//! Ids are embedded in QR-coded links that get printed and shared, so they
//! must not be guessable or sequential. Everything outside this module treats
//! them as opaque strings.

use uuid::Uuid;

/// Generates a fresh opaque identifier.
///
/// ## Example
/// ```rust
/// let a = boxtrack_core::new_id();
/// let b = boxtrack_core::new_id();
/// assert_ne!(a, b);
/// ```
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_ids_are_not_empty() {
        assert!(!new_id().is_empty());
    }
}

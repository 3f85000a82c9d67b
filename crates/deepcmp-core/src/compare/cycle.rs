//! Pointer cycle guard.
//!
//! Lookups use the expected-side identity against both sets; the actual-side
//! identity is recorded but never looked up. This is a heuristic, not an
//! aliasing-safe algorithm: two graphs that alias differently can compare
//! equal where they structurally differ.

use std::collections::HashSet;

/// Identities of pointees entered during one comparison, one set per side.
#[derive(Debug, Default)]
pub(crate) struct VisitedRegistry {
    expected: HashSet<usize>,
    actual: HashSet<usize>,
}

impl VisitedRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True if the subtree behind `expected_addr` was already entered.
    pub(crate) fn already_entered(&self, expected_addr: usize) -> bool {
        self.expected.contains(&expected_addr) || self.actual.contains(&expected_addr)
    }

    /// Record a pointer pair. An actual side without identity is not recorded.
    pub(crate) fn enter(&mut self, expected_addr: usize, actual_addr: Option<usize>) {
        self.expected.insert(expected_addr);
        if let Some(actual_addr) = actual_addr {
            self.actual.insert(actual_addr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_registry_has_no_entries() {
        let registry = VisitedRegistry::new();
        assert!(!registry.already_entered(0x1000));
    }

    #[test]
    fn test_entered_expected_identity_is_found() {
        let mut registry = VisitedRegistry::new();
        registry.enter(0x1000, Some(0x2000));
        assert!(registry.already_entered(0x1000));
    }

    #[test]
    fn test_actual_set_is_probed_with_expected_identity() {
        let mut registry = VisitedRegistry::new();
        registry.enter(0x1000, Some(0x2000));
        // 0x2000 is only in the actual set, yet probing with it hits.
        assert!(registry.already_entered(0x2000));
        assert!(!registry.already_entered(0x3000));
    }

    #[test]
    fn test_actual_side_without_identity_is_skipped() {
        let mut registry = VisitedRegistry::new();
        registry.enter(0x1000, None);
        assert!(registry.already_entered(0x1000));
        assert_eq!(registry.actual.len(), 0);
    }
}

use crate::compare::model::{Diff, FieldPath};
use crate::compare::snapshot::snapshot;
use crate::inspect::Inspect;
use serde_json::Value;

/// Accumulates diffs in traversal order.
///
/// Never deduplicates, sorts or truncates. A subtree that fails with a
/// structural error never reaches the collector: the `?` at the call site
/// drops it together with everything collected so far.
#[derive(Debug, Default)]
pub(crate) struct DiffCollector {
    diffs: Vec<Diff>,
}

impl DiffCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, diffs: Vec<Diff>) {
        self.diffs.extend(diffs);
    }

    pub(crate) fn finish(self) -> Vec<Diff> {
        self.diffs
    }
}

/// A single diff at `path` carrying snapshots of both values.
pub(crate) fn leaf_diff(path: &FieldPath, expected: &dyn Inspect, actual: &dyn Inspect) -> Vec<Diff> {
    vec![Diff::new(path.as_str(), snapshot(expected), snapshot(actual))]
}

/// A single diff at `path` whose actual side is missing altogether.
pub(crate) fn missing_diff(path: &FieldPath, expected: &dyn Inspect) -> Vec<Diff> {
    vec![Diff::new(path.as_str(), snapshot(expected), Value::Null)]
}

//! Array, slice and map handlers.

use crate::compare::collector::{missing_diff, DiffCollector};
use crate::compare::engine::Comparator;
use crate::compare::model::{Diff, FieldPath};
use crate::errors::{CompareError, Result};
use crate::inspect::{Elements, Entries};

impl Comparator {
    /// Compare two arrays or slices element by element in ascending index order.
    ///
    /// Lengths must match exactly; contents are never inspected otherwise.
    pub(crate) fn compare_elements(
        &mut self,
        path: &FieldPath,
        expected: &dyn Elements,
        actual: &dyn Elements,
    ) -> Result<Vec<Diff>> {
        let len = expected.len();
        if len != actual.len() {
            return Err(CompareError::LengthMismatch {
                field: path.to_string(),
                expected_len: len,
                actual_len: actual.len(),
            });
        }
        if len == 0 {
            return Ok(Vec::new());
        }

        let mut collector = DiffCollector::new();
        for index in 0..len {
            let element_path = path.index(index);
            let pair = (expected.element(index), actual.element(index));
            let (Some(exp), Some(act)) = pair else {
                return Err(CompareError::LengthMismatch {
                    field: path.to_string(),
                    expected_len: len,
                    actual_len: actual.len(),
                });
            };
            collector.extend(self.dispatch(&element_path, exp, act)?);
        }
        Ok(collector.finish())
    }

    /// Compare two maps entry by entry, ordered by the expected side's key labels.
    ///
    /// Key counts must match. A key missing on the actual side yields one
    /// diff at `[key]` with a null actual value. Equal labels keep the
    /// expected map's iteration order.
    pub(crate) fn compare_map(
        &mut self,
        path: &FieldPath,
        expected: &dyn Entries,
        actual: &dyn Entries,
    ) -> Result<Vec<Diff>> {
        if expected.len() != actual.len() {
            return Err(CompareError::LengthMismatch {
                field: path.to_string(),
                expected_len: expected.len(),
                actual_len: actual.len(),
            });
        }
        if expected.is_empty() {
            return Ok(Vec::new());
        }

        let mut entries = expected.entries();
        entries.sort_by(|a, b| a.label.cmp(&b.label));

        let mut collector = DiffCollector::new();
        for entry in entries {
            let entry_path = path.key(&entry.label);
            match actual.lookup(entry.key) {
                Some(act) => collector.extend(self.dispatch(&entry_path, entry.value, act)?),
                None => collector.extend(missing_diff(&entry_path, entry.value)),
            }
        }
        Ok(collector.finish())
    }
}

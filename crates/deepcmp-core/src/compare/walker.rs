//! Struct field walker.

use crate::compare::collector::DiffCollector;
use crate::compare::engine::Comparator;
use crate::compare::model::{Diff, FieldPath};
use crate::errors::{CompareError, Result};
use crate::inspect::Fields;

impl Comparator {
    /// Compare two structs member by member, in the expected side's declaration order.
    ///
    /// Members are resolved by name on each side independently rather than by
    /// position. The first structural error from any member aborts the walk.
    pub(crate) fn compare_struct(
        &mut self,
        path: &FieldPath,
        expected: &dyn Fields,
        actual: &dyn Fields,
    ) -> Result<Vec<Diff>> {
        let mut collector = DiffCollector::new();
        for name in expected.field_names() {
            let member_path = path.field(name);
            let (Some(exp), Some(act)) = (expected.field(name), actual.field(name)) else {
                return Err(CompareError::MissingField {
                    field: member_path.into_string(),
                });
            };
            collector.extend(self.dispatch(&member_path, exp, act)?);
        }
        Ok(collector.finish())
    }
}

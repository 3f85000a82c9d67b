//! Structural comparison engine.
//!
//! The entry point is [`compare`]. It owns a [`Comparator`] for the duration
//! of one call; the comparator holds the cycle-guard state and recurses
//! through [`Comparator::dispatch`].

use crate::compare::collector::leaf_diff;
use crate::compare::cycle::VisitedRegistry;
use crate::compare::model::{Diff, FieldPath};
use crate::core_types::schema::OP_COMPARE;
use crate::errors::{CompareError, Result};
use crate::inspect::{Indirect, Inspect, Shape};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

/// Compare `expected` against `actual` and return every leaf difference.
///
/// Both values must have the same runtime type. Diffs are returned in
/// traversal order: struct members in declaration order, elements by
/// ascending index, map entries by key label.
///
/// # Errors
///
/// - `TypeMismatch`: the runtime types differ at some path (including the root)
/// - `LengthMismatch`: arrays, slices or maps differ in length
/// - `MissingField`: a struct member cannot be resolved by name
/// - `InvalidType`: a value is opaque or its target cannot be reached
///
/// Any error discards the diffs collected before it.
pub fn compare(expected: &dyn Inspect, actual: &dyn Inspect) -> Result<Vec<Diff>> {
    let start = Instant::now();
    log_op_start!(OP_COMPARE, expected_type = expected.type_info().name());

    let result = Comparator::new().dispatch(&FieldPath::root(), expected, actual);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(diffs) => log_op_end!(OP_COMPARE, duration_ms = duration_ms, diff_count = diffs.len()),
        Err(err) => log_op_error!(OP_COMPARE, err.clone(), duration_ms = duration_ms, field = err.field()),
    }
    result
}

/// Per-call comparison state.
pub(crate) struct Comparator {
    visited: VisitedRegistry,
}

impl Comparator {
    pub(crate) fn new() -> Self {
        Self {
            visited: VisitedRegistry::new(),
        }
    }

    /// Classify a value pair and route it to its structural handler.
    pub(crate) fn dispatch(
        &mut self,
        path: &FieldPath,
        expected: &dyn Inspect,
        actual: &dyn Inspect,
    ) -> Result<Vec<Diff>> {
        let expected_type = expected.type_info();
        let actual_type = actual.type_info();
        if expected_type != actual_type {
            tracing::debug!(field = path.as_str(), %expected_type, %actual_type, "type mismatch");
            return Err(CompareError::TypeMismatch {
                field: path.to_string(),
                expected_type: expected_type.name(),
                actual_type: actual_type.name(),
            });
        }

        match (expected.shape(), actual.shape()) {
            (Shape::Struct(exp), Shape::Struct(act)) => self.compare_struct(path, exp, act),
            (Shape::Array(exp), Shape::Array(act)) => self.compare_elements(path, exp, act),
            (Shape::Absent, Shape::Absent) => Ok(Vec::new()),
            (Shape::Absent, _) | (_, Shape::Absent) => Ok(leaf_diff(path, expected, actual)),
            (Shape::Opaque, _) | (_, Shape::Opaque) => Err(CompareError::InvalidType {
                field: path.to_string(),
                type_name: expected_type.name(),
                reason: "value exposes no structure".to_string(),
            }),
            (Shape::Pointer(exp), Shape::Pointer(act)) => {
                self.compare_pointer(path, expected_type.name(), exp, act)
            }
            (Shape::Slice(exp), Shape::Slice(act)) => self.compare_elements(path, exp, act),
            (Shape::Map(exp), Shape::Map(act)) => self.compare_map(path, exp, act),
            (Shape::Cell(exp), Shape::Cell(act)) | (Shape::Present(exp), Shape::Present(act)) => {
                self.compare_targets(path, path, expected_type.name(), exp, act)
            }
            (Shape::Primitive(exp), Shape::Primitive(act)) => {
                if exp.leaf_eq(act) {
                    Ok(Vec::new())
                } else {
                    Ok(leaf_diff(path, expected, actual))
                }
            }
            (exp, act) => Err(CompareError::InvalidType {
                field: path.to_string(),
                type_name: expected_type.name(),
                reason: format!(
                    "shapes disagree: expected is {}, actual is {}",
                    exp.kind_name(),
                    act.kind_name()
                ),
            }),
        }
    }

    /// Dereference a present pointer pair under the cycle guard.
    fn compare_pointer(
        &mut self,
        path: &FieldPath,
        type_name: &'static str,
        expected: &dyn Indirect,
        actual: &dyn Indirect,
    ) -> Result<Vec<Diff>> {
        if let Some(expected_addr) = expected.address() {
            if self.visited.already_entered(expected_addr) {
                tracing::trace!(field = path.as_str(), expected_addr, "pointer already entered");
                return Ok(Vec::new());
            }
            self.visited.enter(expected_addr, actual.address());
        }
        self.compare_targets(path, &path.deref(), type_name, expected, actual)
    }

    /// Dispatch the targets of two indirections at `target_path`.
    ///
    /// Both indirections have the same type, so targets of different runtime
    /// types sit behind a `dyn` pointee. That is a value difference, reported
    /// once at `path`.
    fn compare_targets(
        &mut self,
        path: &FieldPath,
        target_path: &FieldPath,
        type_name: &'static str,
        expected: &dyn Indirect,
        actual: &dyn Indirect,
    ) -> Result<Vec<Diff>> {
        let mut outcome = None;
        expected.visit(&mut |exp: &dyn Inspect| {
            actual.visit(&mut |act: &dyn Inspect| {
                outcome = Some(if exp.type_info() == act.type_info() {
                    self.dispatch(target_path, exp, act)
                } else {
                    Ok(leaf_diff(path, exp, act))
                });
            });
        });
        outcome.unwrap_or_else(|| {
            Err(CompareError::InvalidType {
                field: path.to_string(),
                type_name,
                reason: "target is not accessible".to_string(),
            })
        })
    }
}

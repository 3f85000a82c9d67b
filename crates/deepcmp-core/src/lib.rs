//! deepcmp Core - structural comparison of arbitrarily nested values
//!
//! This crate provides:
//! - The [`Inspect`] type-descriptor trait and its implementations for
//!   standard library types
//! - Declarative descriptors for user structs and leaf types
//! - The recursive comparator with a pointer cycle guard
//! - Structured errors and logging facilities
//! - Assertion macros for tests

pub mod assert;
pub mod compare;
pub mod errors;
pub mod inspect;
pub mod logging_facility;

pub use deepcmp_core_types as core_types;

// Re-export commonly used types
pub use compare::{compare, Diff, FieldPath};
pub use errors::{CompareError, ExError, ExErrorKind, Result};
pub use inspect::{Inspect, Shape, TypeInfo};

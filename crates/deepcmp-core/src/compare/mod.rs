//! Structural comparator.
//!
//! Walks two values of the same type and reports every leaf where they
//! differ, terminating on cyclic pointer graphs.
//!
//! ## Entry point
//!
//! ```
//! use deepcmp_core::{compare, inspect_struct};
//!
//! struct Track {
//!     title: String,
//!     bitrate: u32,
//! }
//!
//! inspect_struct!(Track { title, bitrate });
//!
//! let expected = Track { title: "intro".into(), bitrate: 128 };
//! let actual = Track { title: "intro".into(), bitrate: 192 };
//! let diffs = compare(&expected, &actual).unwrap();
//! assert_eq!(diffs[0].field, ".bitrate");
//! println!("{}", deepcmp_core::compare::render_human_summary(&diffs));
//! ```
//!
//! ## Guarantees
//!
//! - **Fail closed**: type, length and member mismatches are errors, never diffs,
//!   and an error carries no partial diff list.
//! - **Determinism**: diffs come out in traversal order; map entries are ordered
//!   by the textual form of their keys.
//! - **Termination on cycles**: pointers are entered at most once per call.

pub(crate) mod collector;
mod collections;
pub(crate) mod cycle;
pub mod engine;
pub mod human_summary;
pub mod model;
pub mod snapshot;
mod walker;

pub use engine::compare;
pub use human_summary::render_human_summary;
pub use model::{Diff, FieldPath};
pub use snapshot::snapshot;

//! Core types shared across deepcmp facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and by anything that inspects its output:
//!
//! - **Field keys**: component, op, event, duration and error fields
//! - **Comparison fields**: field path and diff count
//! - **Event names**: start, end, end_error

pub mod schema;

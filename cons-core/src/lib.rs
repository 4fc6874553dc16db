//! Core types and utilities for the cons-coder constant generator.
//!
//! This crate holds the canonical data model every front end produces and
//! every renderer consumes, together with the small helpers shared across
//! the workspace (case conversion, timestamps, file writing).

mod error;
mod file;
mod model;
mod types;
mod utils;
mod version;

// Data model
pub use error::ModelError;
pub use model::{Constant, ConstantGroup, ConstantsFile};
pub use types::ScalarType;
// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{
    TIMESTAMP_FORMAT, format_timestamp, sanitize_identifier, to_camel_case, to_pascal_case,
    to_title_words, to_upper_snake,
};
pub use version::Version;

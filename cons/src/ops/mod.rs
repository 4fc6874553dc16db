//! Core operations.
//!
//! This module contains the business logic for cons-coder commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod load;

pub use check::check;
pub use generate::{WriteMode, generate};
pub use load::{LoadedInputs, load_inputs};

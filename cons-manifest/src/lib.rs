//! Constant definition front end for cons-coder.
//!
//! Parses XML and YAML definition files into the canonical
//! [`ConstantsFile`](cons_coder_core::ConstantsFile) model, reports problems
//! as [`miette`] diagnostics, and holds the run-level selections
//! ([`Target`], [`Flavor`], [`ProjectConfig`]).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod load;
mod target;
mod xml;
mod yaml;

pub use config::ProjectConfig;
pub use error::{Error, Result, SourceContext};
pub use load::{Format, SourceInfo, discover, load, parse_str};
pub use target::{Flavor, Target};
pub use xml::parse_xml;
pub use yaml::parse_yaml;

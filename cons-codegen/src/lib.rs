//! Shared code generation utilities for the cons-coder constant generator.
//!
//! This crate provides target-neutral abstractions and utilities used by
//! the per-target renderers (e.g., `cons-coder-codegen-python`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Comment, etc.)
//! - [`language`] - Target abstractions (Renderer, NamingConvention, TypeMapper, etc.)
//! - [`group`] - Resolved group views for rich and minimal output
//! - [`accessor`] - The accessor repertoire and its per-target template
//! - [`header`] - Provenance header of generated files
//! - [`testing`] - Test fixtures (feature-gated)

pub mod accessor;
pub mod builder;
mod config;
pub mod group;
pub mod header;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::RenderConfig;

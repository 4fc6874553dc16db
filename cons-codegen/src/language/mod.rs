//! Language-specific abstractions.
//!
//! This module provides traits and types for per-target rendering:
//! - [`Renderer`] - Main trait for target renderers
//! - [`TypeMapper`] - Trait for mapping scalar types to target types
//! - [`NamingConvention`] - Target-specific naming rules
//! - [`LiteralStyle`] - Target-specific value literals
//! - [`RenderedFile`] - A rendered output unit

mod literal;
mod naming;
mod renderer;
mod type_mapper;

pub use literal::{LiteralStyle, format_value};
pub use naming::NamingConvention;
pub use renderer::{RenderError, RenderedFile, Renderer};
pub use type_mapper::TypeMapper;

//! Kotlin renderer for the cons-coder constant generator.
//!
//! # Generated Output
//!
//! - `<Pascal>.kt` - One file per source file. Rich-class output holds one
//!   `object` per group with `const val` members and accessor functions;
//!   minimal output holds top-level `const val` declarations.

mod naming;
mod renderer;
mod type_mapper;

pub use naming::KOTLIN_NAMING;
pub use renderer::KotlinRenderer;
pub use type_mapper::KotlinTypeMapper;

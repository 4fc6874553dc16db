//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Mutable builder for indented code
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Comment`] - Comment blocks in each target's syntax
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod comment;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use comment::{Comment, CommentStyle};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};

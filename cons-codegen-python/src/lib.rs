//! Python renderer for the cons-coder constant generator.
//!
//! # Generated Output
//!
//! - `<stem>.py` - One module per source file. Rich-class output holds one
//!   non-instantiable class per group with classmethod accessors; minimal
//!   output holds flat `GROUP_CONSTANT` assignments.
//! - `__init__.py` - Package index re-exporting every class (rich-class only).

mod index;
mod naming;
mod renderer;
mod type_mapper;

pub use naming::PY_NAMING;
pub use renderer::PythonRenderer;
pub use type_mapper::PythonTypeMapper;

//! Go renderer for the cons-coder constant generator.
//!
//! # Generated Output
//!
//! - `<stem>.go` - One file per source file. Rich-class output holds, per
//!   group, an unexported struct type, one exported variable of that type
//!   and value-receiver accessor methods; minimal output holds one
//!   `const ( ... )` block per group.
//!
//! Go has no package index; `render_index` always returns `None`.

mod naming;
mod renderer;
mod type_mapper;

pub use naming::{GO_NAMING, struct_name};
pub use renderer::GoRenderer;
pub use type_mapper::GoTypeMapper;

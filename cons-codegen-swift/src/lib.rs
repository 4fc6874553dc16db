//! Swift renderer for the cons-coder constant generator.
//!
//! # Generated Output
//!
//! - `<Pascal>.swift` - One file per source file. Rich-class output holds
//!   one case-less `public enum` per group, which cannot be instantiated,
//!   with static members and static accessor functions; minimal output
//!   holds top-level `public let` declarations.

mod naming;
mod renderer;
mod type_mapper;

pub use naming::SWIFT_NAMING;
pub use renderer::SwiftRenderer;
pub use type_mapper::SwiftTypeMapper;

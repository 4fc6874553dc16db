//! Java renderer for the cons-coder constant generator.
//!
//! # Generated Output
//!
//! - `<Pascal>.java` - One non-instantiable outer class per source file.
//!   Rich-class output nests one `public static final class` per group
//!   with static accessor methods; minimal output holds flat
//!   `public static final` fields.

mod naming;
mod renderer;
mod type_mapper;

pub use naming::JAVA_NAMING;
pub use renderer::JavaRenderer;
pub use type_mapper::JavaTypeMapper;

//! TypeScript renderer for the cons-coder constant generator.
//!
//! # Generated Output
//!
//! - `<stem>.ts` - One module per source file. Rich-class output holds one
//!   exported class per group with `static readonly` members, static
//!   accessors and `<Group>Value`/`<Group>Key` type aliases; minimal output
//!   holds `export const` declarations.
//! - `index.ts` - Barrel re-exporting every class and alias (rich-class only).

mod index;
mod naming;
mod renderer;
mod type_mapper;

pub use naming::TS_NAMING;
pub use renderer::TypeScriptRenderer;
pub use type_mapper::TypeScriptTypeMapper;

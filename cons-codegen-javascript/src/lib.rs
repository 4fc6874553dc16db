//! JavaScript renderer for the cons-coder constant generator.
//!
//! # Generated Output
//!
//! - `<stem>.js` - One CommonJS module per source file. Rich-class output
//!   holds one class per group with static fields and static accessors;
//!   minimal output holds `const` declarations. Both end with
//!   `module.exports`.
//! - `index.js` - Package index re-exporting every class (rich-class only).

mod index;
mod naming;
mod renderer;
mod type_mapper;

pub use naming::JS_NAMING;
pub use renderer::JavaScriptRenderer;
pub use type_mapper::JavaScriptTypeMapper;

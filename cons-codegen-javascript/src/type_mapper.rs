//! JavaScript type names, used in JSDoc annotations.

use cons_coder_codegen::language::TypeMapper;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// JavaScript type mapper implementation.
pub struct JavaScriptTypeMapper;

impl TypeMapper for JavaScriptTypeMapper {
    fn target(&self) -> Target {
        Target::JavaScript
    }

    fn map_type(&self, ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Int => "number",
            ScalarType::String => "string",
            ScalarType::Float => "number",
            ScalarType::Bool => "boolean",
            ScalarType::Unknown => "any",
        }
    }
}

//! TypeScript type mapper implementation.

use cons_coder_codegen::language::TypeMapper;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn target(&self) -> Target {
        Target::TypeScript
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

//! Java type mapper implementation.

use cons_coder_codegen::language::TypeMapper;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// Java type mapper implementation.
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn target(&self) -> Target {
        Target::Java
    }

    fn map_type(&self, ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Int => "int",
            ScalarType::String => "String",
            ScalarType::Float => "double",
            ScalarType::Bool => "boolean",
            ScalarType::Unknown => "Object",
        }
    }

    fn map_boxed_type(&self, ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Int => "Integer",
            ScalarType::String => "String",
            ScalarType::Float => "Double",
            ScalarType::Bool => "Boolean",
            ScalarType::Unknown => "Object",
        }
    }
}

//! Kotlin type mapper implementation.

use cons_coder_codegen::language::TypeMapper;
use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// Kotlin type mapper implementation.
pub struct KotlinTypeMapper;

impl TypeMapper for KotlinTypeMapper {
    fn target(&self) -> Target {
        Target::Kotlin
    }

    fn map_type(&self, ty: ScalarType) -> &'static str {
        match ty {
            ScalarType::Int => "Int",
            ScalarType::String => "String",
            ScalarType::Float => "Double",
            ScalarType::Bool => "Boolean",
            ScalarType::Unknown => "Any",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kotlin_types() {
        let mapper = KotlinTypeMapper;

        assert_eq!(mapper.map_type(ScalarType::Int), "Int");
        assert_eq!(mapper.map_type(ScalarType::String), "String");
        assert_eq!(mapper.map_type(ScalarType::Float), "Double");
        assert_eq!(mapper.map_type(ScalarType::Bool), "Boolean");
        assert_eq!(mapper.map_type(ScalarType::Unknown), "Any");
    }
}

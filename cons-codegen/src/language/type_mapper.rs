use cons_coder_core::ScalarType;
use cons_coder_manifest::Target;

/// Trait for mapping scalar types to target-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language
    fn target(&self) -> Target;

    /// Map a scalar type to a target type string
    fn map_type(&self, ty: ScalarType) -> &'static str;

    /// Map a scalar type for use inside generic collections.
    ///
    /// Only differs from [`map_type`](Self::map_type) on targets with
    /// boxed primitives.
    fn map_boxed_type(&self, ty: ScalarType) -> &'static str {
        self.map_type(ty)
    }
}

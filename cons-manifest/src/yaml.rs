//! YAML front end.
//!
//! Same shape as the XML format, with mappings keeping declaration order:
//!
//! ```yaml
//! label: User module
//! groups:
//!   status:
//!     label: Account status
//!     constants:
//!       active: { type: int, label: 激活, value: 1 }
//! ```

use cons_coder_core::{Constant, ConstantGroup, ConstantsFile, ScalarType};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{debug, warn};

use crate::{
    Result, SourceInfo,
    error::{SourceContext, find_name_span},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    #[serde(default)]
    label: String,
    #[serde(default)]
    groups: IndexMap<String, RawGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroup {
    #[serde(default)]
    label: String,
    #[serde(default)]
    constants: IndexMap<String, RawConstant>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConstant {
    #[serde(rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    label: String,
    #[serde(default, alias = "description")]
    desc: String,
    value: Value,
}

/// Type implied by a YAML scalar when no `type` is given.
fn implied_type(value: &Value) -> ScalarType {
    match value {
        Value::Bool(_) => ScalarType::Bool,
        Value::Number(n) if n.is_f64() => ScalarType::Float,
        Value::Number(_) => ScalarType::Int,
        Value::String(_) => ScalarType::String,
        _ => ScalarType::Unknown,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

fn build_constant(
    ctx: &SourceContext,
    group: &str,
    name: String,
    raw: RawConstant,
) -> Result<Constant> {
    let ty = match raw.ty.as_deref() {
        Some(tag) => ScalarType::from_tag(tag),
        None => implied_type(&raw.value),
    };
    if ty == ScalarType::Unknown {
        warn!(group, constant = %name, "unknown type, falling back to the dynamic type");
    }

    let Some(value) = scalar_text(&raw.value) else {
        let span = find_name_span(ctx.src(), &name, &[":"]);
        return Err(ctx.validation_error_at(
            format!(
                "constant '{}' in group '{}' must have a scalar value",
                name, group
            ),
            span,
        ));
    };

    Ok(Constant::new(name, ty, value)
        .with_label(raw.label)
        .with_description(raw.desc))
}

/// Parse a YAML constants document.
pub fn parse_yaml(content: &str, filename: &str, info: SourceInfo) -> Result<ConstantsFile> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawFile = serde_yaml::from_str(content).map_err(|e| ctx.yaml_error(e))?;

    let mut groups = Vec::with_capacity(raw.groups.len());
    for (group_name, raw_group) in raw.groups {
        let constants = raw_group
            .constants
            .into_iter()
            .map(|(name, constant)| build_constant(&ctx, &group_name, name, constant))
            .collect::<Result<Vec<_>>>()?;

        let span = find_name_span(content, &group_name, &[":"]);
        let group = ConstantGroup::new(group_name, raw_group.label, constants)
            .map_err(|e| ctx.model_error(e, span))?;
        debug!(group = %group.name, constants = group.len(), "parsed group");
        groups.push(group);
    }

    ConstantsFile::new(
        info.file_name,
        info.path,
        raw.label,
        groups,
        info.last_modified,
    )
    .map_err(|e| ctx.model_error(e, None))
}

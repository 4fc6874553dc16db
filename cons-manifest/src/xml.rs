//! XML front end.
//!
//! The root element carries the file label, each child element is a group
//! and each grandchild a constant:
//!
//! ```xml
//! <constants label="User module">
//!   <status label="Account status">
//!     <active type="int" label="激活" desc="Account is usable" value="1"/>
//!   </status>
//! </constants>
//! ```

use cons_coder_core::{Constant, ConstantGroup, ConstantsFile, ScalarType};
use miette::SourceSpan;
use roxmltree::{Document, Node};
use tracing::{debug, warn};

use crate::{Result, SourceInfo, error::SourceContext};

/// Span of an element's tag name.
fn tag_span(node: &Node<'_, '_>) -> SourceSpan {
    let start = node.range().start + 1;
    SourceSpan::from((start, node.tag_name().name().len()))
}

fn parse_constant(ctx: &SourceContext, group: &str, node: &Node<'_, '_>) -> Result<Constant> {
    let name = node.tag_name().name();
    let tag = node.attribute("type").unwrap_or("string");
    let ty = ScalarType::from_tag(tag);
    if ty == ScalarType::Unknown {
        warn!(group, constant = name, tag, "unknown type, falling back to the dynamic type");
    }

    let Some(value) = node.attribute("value") else {
        return Err(ctx.validation_error_at(
            format!("constant '{}' in group '{}' has no value", name, group),
            Some(tag_span(node)),
        ));
    };

    Ok(Constant::new(name, ty, value.trim())
        .with_label(node.attribute("label").unwrap_or_default())
        .with_description(node.attribute("desc").unwrap_or_default()))
}

/// Parse an XML constants document.
pub fn parse_xml(content: &str, filename: &str, info: SourceInfo) -> Result<ConstantsFile> {
    let ctx = SourceContext::new(content, filename);
    let doc = Document::parse(content).map_err(|e| ctx.xml_error(e))?;
    let root = doc.root_element();

    let mut groups = Vec::new();
    for group_node in root.children().filter(|n| n.is_element()) {
        let group_name = group_node.tag_name().name();
        let constants = group_node
            .children()
            .filter(|n| n.is_element())
            .map(|node| parse_constant(&ctx, group_name, &node))
            .collect::<Result<Vec<_>>>()?;

        let group = ConstantGroup::new(
            group_name,
            group_node.attribute("label").unwrap_or_default(),
            constants,
        )
        .map_err(|e| ctx.model_error(e, Some(tag_span(&group_node))))?;
        debug!(group = group_name, constants = group.len(), "parsed group");
        groups.push(group);
    }

    ConstantsFile::new(
        info.file_name,
        info.path,
        root.attribute("label").unwrap_or_default(),
        groups,
        info.last_modified,
    )
    .map_err(|e| {
        let span = e
            .group()
            .and_then(|group| crate::error::find_name_span(content, group, &[" ", ">"]));
        ctx.model_error(e, span)
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::Error;

    fn info() -> SourceInfo {
        SourceInfo {
            file_name: "user".to_string(),
            path: "config/user.xml".into(),
            last_modified: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_parse_groups_and_constants() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<constants label="用户模块">
    <status label="账号状态">
        <active type="int" label="激活" desc="账号可用" value="1"/>
        <inactive type="int" label="停用" value="0"/>
    </status>
    <gender label="性别">
        <male type="string" label="男" value="M"/>
    </gender>
</constants>"#;

        let file = parse_xml(xml, "user.xml", info()).unwrap();
        assert_eq!(file.label, "用户模块");
        assert_eq!(file.file_name, "user");
        assert_eq!(file.groups.len(), 2);

        let status = &file.groups[0];
        assert_eq!(status.name, "status");
        assert_eq!(status.label, "账号状态");
        assert_eq!(status.value_type().unwrap(), ScalarType::Int);
        assert_eq!(status.constants[0].name, "active");
        assert_eq!(status.constants[0].label, "激活");
        assert_eq!(status.constants[0].description, "账号可用");
        assert_eq!(status.constants[0].value, "1");
        assert_eq!(status.constants[1].description, "");

        assert_eq!(file.groups[1].constants[0].value, "M");
    }

    #[test]
    fn test_missing_type_defaults_to_string() {
        let xml = r##"<constants><color><red value="#ff0000"/></color></constants>"##;
        let file = parse_xml(xml, "colors.xml", info()).unwrap();
        assert_eq!(file.groups[0].constants[0].ty, ScalarType::String);
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let xml = r#"<constants><limits><max type="decimal" value="9.5"/></limits></constants>"#;
        let file = parse_xml(xml, "limits.xml", info()).unwrap();
        assert_eq!(file.groups[0].constants[0].ty, ScalarType::Unknown);
    }

    #[test]
    fn test_comments_are_ignored() {
        let xml = r#"<constants>
    <!-- order states -->
    <order><paid type="int" value="2"/><!-- more later --></order>
</constants>"#;
        let file = parse_xml(xml, "order.xml", info()).unwrap();
        assert_eq!(file.groups[0].len(), 1);
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_xml("<constants><status>", "bad.xml", info()).unwrap_err();
        assert!(matches!(*err, Error::Xml { .. }));
    }

    #[test]
    fn test_missing_value() {
        let xml = r#"<constants><status><active type="int"/></status></constants>"#;
        let err = parse_xml(xml, "user.xml", info()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "constant 'active' in group 'status' has no value"
        );
    }

    #[test]
    fn test_mixed_types_fail_fast() {
        let xml = r#"<constants>
    <status>
        <active type="int" value="1"/>
        <unknown type="string" value="?"/>
    </status>
</constants>"#;
        let err = parse_xml(xml, "user.xml", info()).unwrap_err();
        match *err {
            Error::Model { span, .. } => {
                let span = span.unwrap();
                assert_eq!(&xml[span.offset()..span.offset() + span.len()], "status");
            }
            other => panic!("expected model error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_group_fails() {
        let xml = r#"<constants><status label="状态"></status></constants>"#;
        let err = parse_xml(xml, "user.xml", info()).unwrap_err();
        assert_eq!(err.to_string(), "group 'status' has no constants");
    }

    #[test]
    fn test_duplicate_group_fails() {
        let xml = r#"<constants>
    <status><a type="int" value="1"/></status>
    <status><b type="int" value="2"/></status>
</constants>"#;
        let err = parse_xml(xml, "user.xml", info()).unwrap_err();
        assert_eq!(err.to_string(), "group 'status' is declared more than once");
    }
}

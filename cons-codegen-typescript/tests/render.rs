//! Rendering tests for TypeScript output.

use cons_coder_codegen::{
    RenderConfig,
    language::Renderer,
    testing::{file_with_groups, frozen_config, order_file, sample_file, status_file},
};
use cons_coder_codegen_typescript::TypeScriptRenderer;
use cons_coder_core::ConstantsFile;
use cons_coder_manifest::{Flavor, Target};

fn render_one(file: &ConstantsFile, config: &RenderConfig) -> (String, String) {
    let mut files = TypeScriptRenderer.render(file, config).expect("render failed");
    assert_eq!(files.len(), 1);
    let rendered = files.remove(0);
    (rendered.path.display().to_string(), rendered.content)
}

#[test]
fn test_minimal_flavor() {
    let config = frozen_config(Target::TypeScript).with_flavor(Flavor::Constants);
    let (path, content) = render_one(&status_file(), &config);

    assert_eq!(path, "user.ts");
    insta::assert_snapshot!(content, @r"
    /*
     * 用户模块
     *
     * Source: user.xml
     * Last modified: 2024-05-01 08:30:00
     * Generated at: 2024-06-01 10:00:00
     * Generator: cons-coder v1.0.0
     */

    // 账号状态
    export const STATUS_ACTIVE = 1; // 激活
    export const STATUS_INACTIVE = 0; // 停用
    ");

    let index = TypeScriptRenderer.render_index(&[status_file()], &config).unwrap();
    assert!(index.is_none());
}

#[test]
fn test_class() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::TypeScript));

    assert!(content.contains("/** 账号状态 */\nexport class Status {\n"));
    assert!(content.contains(
        "  /** 激活 */\n  public static readonly ACTIVE = 1;\n  /** 停用 */\n  public static readonly INACTIVE = 0;\n"
    ));
    assert!(content.contains(
        "  private constructor() {\n    throw new Error('Status cannot be instantiated');\n  }\n"
    ));
    assert!(content.ends_with(
        "}\n\nexport type StatusKey = ReturnType<typeof Status.getAllKeys>[number];\nexport type StatusValue = (typeof Status)[StatusKey];\n"
    ));
}

#[test]
fn test_accessors() {
    let (_, content) = render_one(&status_file(), &frozen_config(Target::TypeScript));

    assert!(content.contains(
        "  public static getAllValues(): number[] {\n    return [Status.ACTIVE, Status.INACTIVE];\n  }\n"
    ));
    assert!(content.contains("    return ['ACTIVE', 'INACTIVE'] as const;\n"));
    assert!(content.contains(
        "    return {\n      ACTIVE: Status.ACTIVE,\n      INACTIVE: Status.INACTIVE,\n    };\n"
    ));
    assert!(content.contains(
        "    const labels = new Map<number, string>([\n      [Status.ACTIVE, '激活'],\n      [Status.INACTIVE, '停用'],\n    ]);\n"
    ));
    assert!(content.contains("return labels.get(value) ?? `Unknown(${value})`;"));
    assert!(content.contains("public static isValid(value: unknown): value is StatusValue {"));
    assert!(content.contains("public static fromString(key: string): number | undefined {"));
    assert!(content.contains("Object.prototype.hasOwnProperty.call(pairs, key)"));
    assert!(content.contains("[Status.ACTIVE, 'Account is usable'],"));
    assert!(content.contains("`Unknown constant value: ${value}`"));
}

#[test]
fn test_sample_types() {
    let (path, content) = render_one(&sample_file(), &frozen_config(Target::TypeScript));

    assert_eq!(path, "settings.ts");
    assert!(content.contains("public static readonly BLUE = '#0000ff';"));
    assert!(content.contains("public static getAllValues(): boolean[] {"));
    assert!(content.contains("const labels = new Map<string, string>(["));
    assert!(content.contains("export type ThemeColorValue = (typeof ThemeColor)[ThemeColorKey];"));
}

#[test]
fn test_index() {
    let config = frozen_config(Target::TypeScript);
    let index = TypeScriptRenderer
        .render_index(&[status_file(), order_file()], &config)
        .unwrap()
        .expect("index expected");

    assert_eq!(index.path.display().to_string(), "index.ts");
    assert!(index.content.starts_with("/*\n * Package index\n *\n * Sources: user.xml, order.yaml\n"));
    assert!(index.content.ends_with(
        "export { Status } from './user';\n\
         export type { StatusValue, StatusKey } from './user';\n\
         export { PayChannel } from './order';\n\
         export type { PayChannelValue, PayChannelKey } from './order';\n"
    ));
}

#[test]
fn test_index_skips_files_without_groups() {
    let files = [file_with_groups("empty", vec![]), status_file()];
    let index = TypeScriptRenderer
        .render_index(&files, &frozen_config(Target::TypeScript))
        .unwrap()
        .expect("index expected");

    assert!(!index.content.contains("'./empty'"));
    assert!(index.content.contains("export { Status } from './user';\n"));
}

#[test]
fn test_index_rejects_duplicate_exports() {
    let err = TypeScriptRenderer
        .render_index(&[status_file(), sample_file()], &frozen_config(Target::TypeScript))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "'user.status' and 'settings.status' both map to package index identifier 'Status'"
    );
}

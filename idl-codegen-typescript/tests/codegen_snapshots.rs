//! Snapshot tests for TypeScript declaration generation.
//!
//! These tests verify that the generated declarations match expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{fs, str::FromStr};

use idlpack_codegen::Error;
use idlpack_codegen_typescript::{BANNER, Generator, LanguageCodegen};
use idlpack_manifest::Manifest;

const STORAGE: &str = r#"
[package]
name = "storage"
path = "acme.dev/cloud/storage"

[[files]]
path = "types.idl"

[[files.members]]
kind = "enum"
name = "Region"
values = ["us-east", "eu-west"]

[[files.members]]
kind = "alias"
name = "Tags"
target = { map = { key = { basic = "string" }, elem = { basic = "string" } } }

[[files.members]]
kind = "const"
name = "DefaultRegion"
type = { named = { name = "Region" } }
value = '"us-east"'

[[files.members]]
kind = "struct"
name = "Base"
fields = [
    { name = "Id", type = { basic = "string" } },
    { name = "Labels", type = { named = { name = "Tags" } } },
]
options = [
    { name = "id", out = true },
    { name = "labels", optional = true },
]

[[files]]
path = "storage/bucket.idl"

[[files.members]]
kind = "resource"
name = "Bucket"
fields = [
    { name = "Base", type = { named = { name = "Base" } }, embedded = true },
    { name = "Name", type = { basic = "string" } },
    { name = "Region", type = { pointer = { named = { name = "Region" } } } },
]
options = [
    { name = "id", out = true },
    { name = "labels", optional = true },
    { name = "name", replaces = true },
    { name = "region", optional = true },
]
"#;

/// Generate declarations from a manifest and return files sorted by path.
fn generate_files(manifest_toml: &str) -> Vec<(String, String)> {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let files = Generator::from_manifest(&manifest)
        .preview()
        .expect("Generation failed");

    let mut result: Vec<(String, String)> =
        files.into_iter().map(|f| (f.path, f.content)).collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

fn header() -> String {
    format!("{}\n{}\n\n", BANNER[0], BANNER[1])
}

#[test]
fn test_types_file() {
    let files = generate_files(STORAGE);
    let types = get_file(&files, "types.ts").expect("types file not found");
    insta::assert_snapshot!("types_file", types);
}

#[test]
fn test_resource_file() {
    let files = generate_files(STORAGE);
    let bucket = get_file(&files, "storage/bucket.ts").expect("bucket file not found");
    insta::assert_snapshot!("resource_file", bucket);
}

#[test]
fn test_preview_paths_use_target_extension() {
    let manifest = Manifest::from_str(STORAGE).unwrap();
    let generator = Generator::from_manifest(&manifest);
    assert_eq!(generator.language(), "typescript");
    assert_eq!(generator.file_extension(), "ts");

    let suffix = format!(".{}", generator.file_extension());
    let files = generator.preview().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.path.ends_with(&suffix)));
}

#[test]
fn test_file_without_resource_has_no_runtime_import() {
    let files = generate_files(STORAGE);
    let types = get_file(&files, "types.ts").unwrap();
    assert!(!types.contains("import"));
    assert!(types.ends_with("}\n\n"));
}

#[test]
fn test_enum_only_file() {
    let files = generate_files(
        r#"
        [package]
        name = "palette"

        [[files]]
        path = "color.idl"

        [[files.members]]
        kind = "enum"
        name = "Color"
        values = ["Red", "Green", "Blue"]
        "#,
    );

    assert_eq!(
        get_file(&files, "color.ts").unwrap(),
        format!(
            "{}export type Color =\n    \"Red\" |\n    \"Green\" |\n    \"Blue\";\n\n",
            header()
        )
    );
}

#[test]
fn test_resource_args_and_guards() {
    let files = generate_files(
        r#"
        [package]
        name = "storage"

        [[files]]
        path = "bucket.idl"

        [[files.members]]
        kind = "resource"
        name = "Bucket"
        fields = [
            { name = "Name", type = { basic = "string" } },
            { name = "Region", type = { basic = "string" } },
        ]
        options = [
            { name = "name" },
            { name = "region", optional = true },
        ]
        "#,
    );

    let bucket = get_file(&files, "bucket.ts").unwrap();
    assert!(bucket.contains(
        "export interface BucketArgs {\n    name: string;\n    region?: string;\n}\n"
    ));
    assert!(bucket.contains("if (args.name === undefined) {"));
    assert!(!bucket.contains("if (args.region === undefined) {"));
    assert!(bucket.contains("import * as runtime from \"@idlpack/runtime\";\n\n"));
}

#[test]
fn test_codegen_settings_are_applied() {
    let files = generate_files(
        r#"
        [package]
        name = "storage"

        [codegen]
        runtime_module = "@acme/sdk"
        runtime_alias = "sdk"
        indent = 2

        [[files]]
        path = "bucket.idl"

        [[files.members]]
        kind = "resource"
        name = "Bucket"
        fields = [ { name = "Name", type = { basic = "string" } } ]
        options = [ { name = "name", optional = true } ]
        "#,
    );

    let bucket = get_file(&files, "bucket.ts").unwrap();
    assert!(bucket.contains("import * as sdk from \"@acme/sdk\";\n"));
    assert!(bucket.contains("export class Bucket extends sdk.Resource implements BucketArgs {\n"));
    assert!(bucket.contains("\n  public name?: string;\n"));
}

#[test]
fn test_sibling_imports_are_sorted() {
    let files = generate_files(
        r#"
        [package]
        name = "shapes"

        [[files]]
        path = "a.idl"

        [[files.members]]
        kind = "alias"
        name = "Zeta"
        target = { basic = "string" }

        [[files.members]]
        kind = "alias"
        name = "Alpha"
        target = { basic = "bool" }

        [[files]]
        path = "b.idl"

        [[files.members]]
        kind = "alias"
        name = "Pair"
        target = { map = { key = { named = { name = "Zeta" } }, elem = { slice = { named = { name = "Alpha" } } } } }
        "#,
    );

    assert_eq!(
        get_file(&files, "b.ts").unwrap(),
        format!(
            "{}import {{Alpha}} from \"./a\";\nimport {{Zeta}} from \"./a\";\n\nexport type Pair = {{[key: Zeta]: Alpha[]}};\n\n",
            header()
        )
    );
}

#[test]
fn test_foreign_reference_is_fatal() {
    let manifest = Manifest::from_str(
        r#"
        [package]
        name = "storage"
        path = "acme.dev/cloud/storage"

        [dependencies."acme.dev/cloud/core"]
        name = "core"

        [[files]]
        path = "types.idl"

        [[files.members]]
        kind = "alias"
        name = "Owner"
        target = { named = { name = "Urn", package = "acme.dev/cloud/core" } }
        "#,
    )
    .unwrap();

    let err = Generator::from_manifest(&manifest).preview().unwrap_err();
    assert!(matches!(&err, Error::ForeignImport { alias, package }
        if alias == "core" && package == "acme.dev/cloud/core"));
    assert_eq!(
        err.to_string(),
        "foreign imports not yet supported: import=core pkg=acme.dev/cloud/core"
    );
}

#[test]
fn test_unsupported_basic_is_fatal() {
    let manifest = Manifest::from_str(
        r#"
        [package]
        name = "counters"

        [[files]]
        path = "count.idl"

        [[files.members]]
        kind = "const"
        name = "Max"
        type = { basic = "int64" }
        value = "10"
        "#,
    )
    .unwrap();

    let err = Generator::from_manifest(&manifest).preview().unwrap_err();
    assert!(matches!(err, Error::UnsupportedBasic { .. }));
}

#[test]
fn test_generate_writes_every_file() {
    let manifest = Manifest::from_str(STORAGE).unwrap();
    let temp = tempfile::tempdir().unwrap();

    let result = Generator::from_manifest(&manifest)
        .generate(temp.path())
        .unwrap();

    assert!(result.is_success());
    assert_eq!(
        result.written,
        vec![
            temp.path().join("types.ts"),
            temp.path().join("storage").join("bucket.ts"),
        ]
    );
    let preview = generate_files(STORAGE);
    assert_eq!(
        fs::read_to_string(temp.path().join("storage/bucket.ts")).unwrap(),
        get_file(&preview, "storage/bucket.ts").unwrap()
    );
}

#[test]
fn test_generate_stops_at_write_failure() {
    let manifest = Manifest::from_str(STORAGE).unwrap();
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("storage"), "not a directory").unwrap();

    let err = Generator::from_manifest(&manifest)
        .generate(temp.path())
        .unwrap_err();

    assert!(format!("{:#}", err).contains("storage"));
    assert!(temp.path().join("types.ts").exists());
}

#[test]
fn test_generate_keep_going_records_failures() {
    let manifest = Manifest::from_str(STORAGE).unwrap();
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("storage"), "not a directory").unwrap();

    let result = Generator::from_manifest(&manifest)
        .keep_going(true)
        .generate(temp.path())
        .unwrap();

    assert!(!result.is_success());
    assert_eq!(result.written, vec![temp.path().join("types.ts")]);
    assert_eq!(result.failed.len(), 1);
    assert_eq!(result.failed[0].0, temp.path().join("storage").join("bucket.ts"));
}

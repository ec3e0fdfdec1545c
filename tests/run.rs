//! End-to-end runs against real files in temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use json_schema_to_openapi::{
    ConversionError, ConvertSettings, ErrorKind, OpenApi3Converter, run, run_with,
};
use serde_json::{Value, json};

const MINIMAL_SCHEMA: &str = r#"{"type": "object", "properties": {"id": {"type": "string"}}}"#;

fn jsonapi_schema_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("jsonapi-1.0-json-schema.json")
}

fn read_json(path: &Path) -> Value {
    let text: String = fs::read_to_string(path).expect("output should be readable");
    serde_json::from_str(&text).expect("output should be valid JSON")
}

#[test]
fn converting_twice_is_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first: PathBuf = dir.path().join("first.json");
    let second: PathBuf = dir.path().join("second.json");

    run(jsonapi_schema_path(), &first).expect("first run should succeed");
    run(jsonapi_schema_path(), &second).expect("second run should succeed");

    let first_bytes: Vec<u8> = fs::read(&first).expect("read first");
    let second_bytes: Vec<u8> = fs::read(&second).expect("read second");
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn missing_input_is_io_read_error_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output: PathBuf = dir.path().join("out.json");

    let err = run(dir.path().join("does-not-exist.json"), &output).unwrap_err();

    assert_eq!(ErrorKind::IoRead, err.kind());
    assert!(!output.exists());
}

#[test]
fn malformed_input_is_parse_error_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input: PathBuf = dir.path().join("in.json");
    let output: PathBuf = dir.path().join("out.json");
    fs::write(&input, "{not valid json").expect("write input");

    let err = run(&input, &output).unwrap_err();

    assert_eq!(ErrorKind::Parse, err.kind());
    assert!(!output.exists());
}

#[test]
fn minimal_schema_keeps_core_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input: PathBuf = dir.path().join("in.json");
    let output: PathBuf = dir.path().join("out.json");
    fs::write(&input, MINIMAL_SCHEMA).expect("write input");

    run(&input, &output).expect("run should succeed");

    let converted: Value = read_json(&output);
    assert_eq!(json!("object"), converted["type"]);
    assert_eq!(json!("string"), converted["properties"]["id"]["type"]);
}

#[test]
fn output_is_compact() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input: PathBuf = dir.path().join("in.json");
    let output: PathBuf = dir.path().join("out.json");
    fs::write(&input, MINIMAL_SCHEMA).expect("write input");

    run(&input, &output).expect("run should succeed");

    let actual: String = fs::read_to_string(&output).expect("read output");
    let expected: &str = r#"{"type":"object","properties":{"id":{"type":"string"}}}"#;
    assert_eq!(expected, actual);
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input: PathBuf = dir.path().join("in.json");
    let output: PathBuf = dir.path().join("out.json");
    fs::write(&input, MINIMAL_SCHEMA).expect("write input");
    fs::write(&output, "stale content that is longer than the converted document ...")
        .expect("write stale output");

    run(&input, &output).expect("run should succeed");

    let converted: Value = read_json(&output);
    assert_eq!(json!("object"), converted["type"]);
}

#[test]
fn unwritable_output_is_io_write_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input: PathBuf = dir.path().join("in.json");
    let output: PathBuf = dir.path().join("missing-dir").join("out.json");
    fs::write(&input, MINIMAL_SCHEMA).expect("write input");

    let err = run(&input, &output).unwrap_err();

    assert_eq!(ErrorKind::IoWrite, err.kind());
    assert!(!output.exists());
}

#[test]
fn rejected_conversion_leaves_previous_output_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input: PathBuf = dir.path().join("in.json");
    let output: PathBuf = dir.path().join("out.json");
    fs::write(&input, MINIMAL_SCHEMA).expect("write input");
    run(&input, &output).expect("first run should succeed");
    let before: Vec<u8> = fs::read(&output).expect("read output");

    let reject = |_: Value| -> Result<Value, ConversionError> { Err("no equivalent".into()) };
    let err = run_with(&input, &output, &reject).unwrap_err();

    assert_eq!(ErrorKind::Conversion, err.kind());
    let after: Vec<u8> = fs::read(&output).expect("read output");
    assert_eq!(before, after);
}

#[test]
fn unconvertible_schema_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input: PathBuf = dir.path().join("in.json");
    let output: PathBuf = dir.path().join("out.json");
    fs::write(&input, r#"{"type": "array", "items": [{"type": "string"}]}"#)
        .expect("write input");

    let err = run(&input, &output).unwrap_err();

    assert_eq!(ErrorKind::Conversion, err.kind());
    assert!(!output.exists());
}

#[test]
fn jsonapi_schema_converts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output: PathBuf = dir.path().join("jsonapi_oas3.json");

    run(jsonapi_schema_path(), &output).expect("run should succeed");

    let converted: Value = read_json(&output);
    assert!(converted.get("$schema").is_none());
    assert_eq!(json!("JSON:API Schema"), converted["title"]);

    let definitions: &Value = &converted["definitions"];
    assert_eq!(
        json!({ "description": "Describes an empty to-one relationship.", "nullable": true }),
        definitions["empty"]
    );
    assert_eq!(json!("string"), definitions["resource"]["properties"]["id"]["type"]);
    assert_eq!(json!(false), definitions["attributes"]["additionalProperties"]);
    assert!(definitions["attributes"].get("patternProperties").is_none());
    assert!(
        definitions["attributes"]["x-patternProperties"]
            .as_object()
            .is_some_and(|patterns| patterns.len() == 1)
    );
    assert_eq!(
        json!({ "nullable": true }),
        definitions["pagination"]["properties"]["next"]["oneOf"][1]
    );
}

#[test]
fn jsonapi_schema_dereferences_with_valid_patterns() {
    let settings = ConvertSettings {
        dereference: true,
        validate_patterns: true,
        ..ConvertSettings::default()
    };
    let dir = tempfile::tempdir().expect("tempdir");
    let output: PathBuf = dir.path().join("jsonapi_oas3.json");

    run_with(jsonapi_schema_path(), &output, &OpenApi3Converter::new(settings))
        .expect("run should succeed");

    let converted: Value = read_json(&output);
    let text: String = converted.to_string();
    assert!(!text.contains("\"$ref\""));
    assert_eq!(
        json!("string"),
        converted["oneOf"][0]["properties"]["data"]["oneOf"][0]["properties"]["id"]["type"]
    );
}

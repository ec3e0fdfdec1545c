//! Pre-conversion checks.
//!
//! Walks the raw JSON Schema (as `serde_json::Value`) and collects every
//! construct that has no OpenAPI 3 rendition, without stopping at the first.

use crate::error::{ConversionError, SchemaIssue, SchemaIssueKind};
use crate::json_pointer;
use crate::schema::JsonType;
use crate::settings::ConvertSettings;
use crate::walk;
use serde_json::{Map, Value};

/// Validates the schema. Returns Ok(()) if no issues, or a
/// `ConversionError` with all collected issues.
pub fn validate_schema(value: &Value, settings: &ConvertSettings) -> Result<(), ConversionError> {
    let mut issues: Vec<SchemaIssue> = Vec::new();
    match value {
        Value::Object(obj) => collect_issues(obj, "", settings, &mut issues),
        Value::Bool(_) => {}
        _ => push_issue(&mut issues, "", SchemaIssueKind::RootNotSchema),
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ConversionError { issues })
    }
}

fn push_issue(issues: &mut Vec<SchemaIssue>, path: &str, kind: SchemaIssueKind) {
    issues.push(SchemaIssue {
        path: path.to_string(),
        kind,
    });
}

fn collect_issues(
    obj: &Map<String, Value>,
    path: &str,
    settings: &ConvertSettings,
    issues: &mut Vec<SchemaIssue>,
) {
    if let Some(ty) = obj.get("type") {
        validate_type(ty, &json_pointer::format(path, "type"), issues);
    }

    for keyword in ["items", "prefixItems"] {
        if obj.get(keyword).is_some_and(Value::is_array) {
            push_issue(
                issues,
                &json_pointer::format(path, keyword),
                SchemaIssueKind::TupleItemsUnsupported,
            );
        }
    }

    if settings.validate_patterns {
        if let Some(Value::String(pattern)) = obj.get("pattern") {
            validate_pattern(pattern, &json_pointer::format(path, "pattern"), issues);
        }
        if let Some(Value::Object(patterns)) = obj.get("patternProperties") {
            let keyword_path: String = json_pointer::format(path, "patternProperties");
            for pattern in patterns.keys() {
                validate_pattern(pattern, &json_pointer::format(&keyword_path, pattern), issues);
            }
        }
    }

    walk::for_each_subschema(obj, path, &mut |child, child_path, _| {
        if let Value::Object(child_obj) = child {
            collect_issues(child_obj, child_path, settings, issues);
        }
    });
}

fn validate_type(value: &Value, path: &str, issues: &mut Vec<SchemaIssue>) {
    let names: Vec<&Value> = match value {
        Value::String(_) => vec![value],
        Value::Array(entries) => entries.iter().collect(),
        _ => {
            push_issue(issues, path, SchemaIssueKind::InvalidTypeValue);
            return;
        }
    };
    for name in names {
        match name.as_str() {
            Some(s) if JsonType::parse(s).is_some() => {}
            Some(s) => push_issue(issues, path, SchemaIssueKind::InvalidTypeName(s.to_string())),
            None => {
                push_issue(issues, path, SchemaIssueKind::InvalidTypeValue);
                return;
            }
        }
    }
}

fn validate_pattern(pattern: &str, path: &str, issues: &mut Vec<SchemaIssue>) {
    if let Err(err) = regress::Regex::new(pattern) {
        push_issue(
            issues,
            path,
            SchemaIssueKind::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            },
        );
    }
}

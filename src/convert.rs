//! JSON Schema to OpenAPI 3.0 Schema Object rewrite rules.
//!
//! Each rule rewrites one schema object in place. Rules run on a node before
//! its subschemas are visited, so schemas a rule creates (e.g. the branches
//! built from `if`/`then`/`else`) are converted as well.

use crate::schema::JsonType;
use crate::settings::{ConvertSettings, PatternPropertiesHandling};
use crate::walk;
use serde_json::{Map, Value, json};

/// Rewrites a validated JSON Schema document into an OpenAPI 3 Schema Object.
pub fn rewrite(mut schema: Value, settings: &ConvertSettings) -> Value {
    rewrite_node(&mut schema, None, settings);
    schema
}

fn rewrite_node(node: &mut Value, keyword: Option<&str>, settings: &ConvertSettings) {
    if let Value::Bool(allowed) = *node {
        if keyword == Some("additionalProperties") {
            return;
        }
        *node = if allowed { json!({}) } else { json!({ "not": {} }) };
    }
    let Value::Object(obj) = node else {
        return;
    };

    strip_identifiers(obj);
    convert_types(obj);
    rewrite_const(obj);
    convert_dependencies(obj);
    rewrite_if_then_else(obj);
    rewrite_exclusive_bounds(obj);
    convert_examples(obj);
    convert_pattern_properties(obj, settings.pattern_properties);
    default_array_items(obj);

    walk::for_each_subschema_mut(obj, "", &mut |child, _, child_keyword| {
        rewrite_node(child, Some(child_keyword), settings);
    });
}

/// Appends to `allOf`, creating it when absent.
fn append_all_of(obj: &mut Map<String, Value>, entries: Vec<Value>) {
    if !obj.get("allOf").is_some_and(Value::is_array) {
        obj.insert("allOf".to_string(), Value::Array(Vec::new()));
    }
    if let Some(Value::Array(all_of)) = obj.get_mut("allOf") {
        all_of.extend(entries);
    }
}

fn strip_identifiers(obj: &mut Map<String, Value>) {
    obj.shift_remove("$schema");
    obj.shift_remove("$id");
    // draft-4 identifier; a non-string `id` is someone's data
    if obj.get("id").is_some_and(Value::is_string) {
        obj.shift_remove("id");
    }
}

fn convert_types(obj: &mut Map<String, Value>) {
    let types: Vec<JsonType> = match obj.get("type") {
        Some(Value::String(name)) => match JsonType::parse(name) {
            Some(JsonType::Null) => vec![JsonType::Null],
            _ => return,
        },
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(JsonType::parse)
            .collect(),
        _ => return,
    };

    let mut non_null: Vec<JsonType> = Vec::new();
    for ty in &types {
        if *ty != JsonType::Null && !non_null.contains(ty) {
            non_null.push(*ty);
        }
    }
    if types.contains(&JsonType::Null) {
        obj.insert("nullable".to_string(), Value::Bool(true));
    }

    match non_null.as_slice() {
        [] => {
            obj.shift_remove("type");
        }
        [single] => {
            obj.insert("type".to_string(), Value::from(single.as_str()));
        }
        several => {
            obj.shift_remove("type");
            let alternatives: Value = several
                .iter()
                .map(|ty| json!({ "type": ty.as_str() }))
                .collect();
            if let Some(existing) = obj.shift_remove("anyOf") {
                append_all_of(
                    obj,
                    vec![json!({ "anyOf": existing }), json!({ "anyOf": alternatives })],
                );
            } else {
                obj.insert("anyOf".to_string(), alternatives);
            }
        }
    }
}

fn rewrite_const(obj: &mut Map<String, Value>) {
    if let Some(value) = obj.shift_remove("const") {
        obj.insert("enum".to_string(), Value::Array(vec![value]));
    }
}

fn convert_dependencies(obj: &mut Map<String, Value>) {
    let mut entries: Vec<Value> = Vec::new();
    for keyword in ["dependencies", "dependentRequired", "dependentSchemas"] {
        if !obj.get(keyword).is_some_and(Value::is_object) {
            continue;
        }
        let Some(Value::Object(dependencies)) = obj.shift_remove(keyword) else {
            continue;
        };
        for (name, dependency) in dependencies {
            let present: Value = match dependency {
                Value::Array(names) => {
                    let mut required: Vec<Value> = vec![Value::String(name.clone())];
                    required.extend(names);
                    json!({ "required": required })
                }
                schema => json!({ "allOf": [{ "required": [name.clone()] }, schema] }),
            };
            let absent: Value = json!({ "not": { "required": [name] } });
            entries.push(json!({ "oneOf": [absent, present] }));
        }
    }
    if !entries.is_empty() {
        append_all_of(obj, entries);
    }
}

/// `if: X, then: Y, else: Z` becomes `oneOf: [allOf: [X, Y], allOf: [not: X, Z]]`.
fn rewrite_if_then_else(obj: &mut Map<String, Value>) {
    let condition: Option<Value> = obj.shift_remove("if");
    let then_branch: Option<Value> = obj.shift_remove("then");
    let else_branch: Option<Value> = obj.shift_remove("else");
    let Some(condition) = condition else {
        return;
    };
    if then_branch.is_none() && else_branch.is_none() {
        return;
    }

    let mut when_true: Vec<Value> = vec![condition.clone()];
    when_true.extend(then_branch);
    let mut when_false: Vec<Value> = vec![json!({ "not": condition })];
    when_false.extend(else_branch);
    let branches: Value = json!([{ "allOf": when_true }, { "allOf": when_false }]);

    if let Some(existing) = obj.shift_remove("oneOf") {
        append_all_of(
            obj,
            vec![json!({ "oneOf": existing }), json!({ "oneOf": branches })],
        );
    } else {
        obj.insert("oneOf".to_string(), branches);
    }
}

/// Draft 6+ numeric `exclusiveMinimum`/`exclusiveMaximum` become the
/// draft-4 style boolean flag next to `minimum`/`maximum`.
fn rewrite_exclusive_bounds(obj: &mut Map<String, Value>) {
    for (exclusive, inclusive, is_lower) in [
        ("exclusiveMinimum", "minimum", true),
        ("exclusiveMaximum", "maximum", false),
    ] {
        let Some(bound) = obj.get(exclusive).and_then(Value::as_f64) else {
            continue;
        };
        let inclusive_is_tighter: bool = obj
            .get(inclusive)
            .and_then(Value::as_f64)
            .is_some_and(|existing| {
                if is_lower {
                    existing > bound
                } else {
                    existing < bound
                }
            });
        if inclusive_is_tighter {
            obj.shift_remove(exclusive);
        } else if let Some(value) = obj.insert(exclusive.to_string(), Value::Bool(true)) {
            obj.insert(inclusive.to_string(), value);
        }
    }
}

fn convert_examples(obj: &mut Map<String, Value>) {
    if !obj.get("examples").is_some_and(Value::is_array) {
        return;
    }
    if let Some(Value::Array(examples)) = obj.shift_remove("examples")
        && let Some(first) = examples.into_iter().next()
        && !obj.contains_key("example")
    {
        obj.insert("example".to_string(), first);
    }
}

fn convert_pattern_properties(obj: &mut Map<String, Value>, handling: PatternPropertiesHandling) {
    let Some(patterns) = obj.shift_remove("patternProperties") else {
        return;
    };
    if handling == PatternPropertiesHandling::Extension {
        obj.insert("x-patternProperties".to_string(), patterns);
        if !obj.contains_key("additionalProperties") {
            obj.insert("additionalProperties".to_string(), Value::Bool(true));
        }
    }
}

fn default_array_items(obj: &mut Map<String, Value>) {
    if obj.get("type").and_then(Value::as_str) == Some("array") && !obj.contains_key("items") {
        obj.insert("items".to_string(), json!({}));
    }
}

//! Schema-aware traversal.
//!
//! Only values in subschema positions are visited, so a property *named*
//! `id` or `$ref` is never mistaken for the keyword of the same name.

use crate::json_pointer;
use crate::schema::{SUBSCHEMA_KEYWORDS, SubschemaShape};
use serde_json::{Map, Value};

fn is_schema(value: &Value) -> bool {
    value.is_object() || value.is_boolean()
}

/// Calls `visit(subschema, path, keyword)` for each direct subschema of `obj`.
pub fn for_each_subschema<F>(obj: &Map<String, Value>, path: &str, visit: &mut F)
where
    F: FnMut(&Value, &str, &'static str),
{
    for &(keyword, shape) in SUBSCHEMA_KEYWORDS {
        let Some(value) = obj.get(keyword) else {
            continue;
        };
        let keyword_path: String = json_pointer::format(path, keyword);
        match (shape, value) {
            (SubschemaShape::List | SubschemaShape::SingleOrList, Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    if is_schema(item) {
                        visit(item, &json_pointer::format_index(&keyword_path, index), keyword);
                    }
                }
            }
            (SubschemaShape::Map, Value::Object(members)) => {
                for (name, member) in members {
                    if is_schema(member) {
                        visit(member, &json_pointer::format(&keyword_path, name), keyword);
                    }
                }
            }
            (SubschemaShape::Single | SubschemaShape::SingleOrList, single) if is_schema(single) => {
                visit(single, &keyword_path, keyword);
            }
            _ => {}
        }
    }
}

/// Mutable counterpart of [`for_each_subschema`].
pub fn for_each_subschema_mut<F>(obj: &mut Map<String, Value>, path: &str, visit: &mut F)
where
    F: FnMut(&mut Value, &str, &'static str),
{
    for &(keyword, shape) in SUBSCHEMA_KEYWORDS {
        let Some(value) = obj.get_mut(keyword) else {
            continue;
        };
        let keyword_path: String = json_pointer::format(path, keyword);
        match shape {
            SubschemaShape::List | SubschemaShape::SingleOrList if value.is_array() => {
                if let Value::Array(items) = value {
                    for (index, item) in items.iter_mut().enumerate() {
                        if is_schema(item) {
                            let item_path: String = json_pointer::format_index(&keyword_path, index);
                            visit(item, &item_path, keyword);
                        }
                    }
                }
            }
            SubschemaShape::Map => {
                if let Value::Object(members) = value {
                    for (name, member) in members.iter_mut() {
                        if is_schema(member) {
                            let member_path: String = json_pointer::format(&keyword_path, name);
                            visit(member, &member_path, keyword);
                        }
                    }
                }
            }
            SubschemaShape::Single | SubschemaShape::SingleOrList => {
                if is_schema(value) {
                    visit(value, &keyword_path, keyword);
                }
            }
            SubschemaShape::List => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn visited_paths(schema: &Value) -> Vec<String> {
        let mut paths: Vec<String> = Vec::new();
        if let Some(obj) = schema.as_object() {
            for_each_subschema(obj, "", &mut |_, path, _| paths.push(path.to_string()));
        }
        paths
    }

    #[test]
    fn visits_properties_items_and_combinators() {
        let schema = json!({
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "tags": { "type": "array", "items": { "type": "string" } }
            },
            "oneOf": [{ "required": ["id"] }, true]
        });
        let expected: Vec<&str> = vec!["/properties/id", "/properties/tags", "/oneOf/0", "/oneOf/1"];
        assert_eq!(expected, visited_paths(&schema));
    }

    #[test]
    fn skips_non_schema_values() {
        let schema = json!({
            "required": ["id"],
            "enum": [{ "type": "string" }],
            "default": { "properties": {} },
            "dependencies": { "a": ["b"], "c": { "required": ["d"] } }
        });
        let expected: Vec<&str> = vec!["/dependencies/c"];
        assert_eq!(expected, visited_paths(&schema));
    }

    #[test]
    fn tuple_items_are_visited_by_index() {
        let schema = json!({ "items": [{ "type": "string" }, { "type": "integer" }] });
        let expected: Vec<&str> = vec!["/items/0", "/items/1"];
        assert_eq!(expected, visited_paths(&schema));
    }

    #[test]
    fn property_names_are_escaped() {
        let schema = json!({ "properties": { "a/b": {} } });
        let expected: Vec<&str> = vec!["/properties/a~1b"];
        assert_eq!(expected, visited_paths(&schema));
    }

    #[test]
    fn mutable_walk_reports_keyword() {
        let mut schema = json!({
            "additionalProperties": false,
            "not": true
        });
        let mut seen: Vec<(String, &'static str)> = Vec::new();
        if let Some(obj) = schema.as_object_mut() {
            for_each_subschema_mut(obj, "", &mut |value, path, keyword| {
                *value = json!({});
                seen.push((path.to_string(), keyword));
            });
        }
        let expected: Vec<(String, &str)> = vec![
            ("/additionalProperties".to_string(), "additionalProperties"),
            ("/not".to_string(), "not"),
        ];
        assert_eq!(expected, seen);
        assert_eq!(json!({ "additionalProperties": {}, "not": {} }), schema);
    }
}

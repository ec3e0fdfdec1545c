//! Inlining of local `$ref`s.

use crate::error::{SchemaIssue, SchemaIssueKind};
use crate::json_pointer::{self, RefTarget};
use crate::walk;
use serde_json::Value;

/// Returns a copy of `root` with every local `$ref` in a subschema position
/// replaced by its target. Siblings of `$ref` are dropped, as drafts 4 to 7
/// ignore them.
pub fn dereference(root: &Value) -> Result<Value, Vec<SchemaIssue>> {
    let mut issues: Vec<SchemaIssue> = Vec::new();
    let mut resolved: Value = root.clone();
    let mut active: Vec<String> = Vec::new();
    inline_refs(&mut resolved, root, "", &mut active, &mut issues);
    if issues.is_empty() {
        Ok(resolved)
    } else {
        Err(issues)
    }
}

fn inline_refs(
    node: &mut Value,
    root: &Value,
    path: &str,
    active: &mut Vec<String>,
    issues: &mut Vec<SchemaIssue>,
) {
    let Value::Object(obj) = node else {
        return;
    };
    let Some(reference) = obj.get("$ref").and_then(Value::as_str).map(str::to_string) else {
        walk::for_each_subschema_mut(obj, path, &mut |child, child_path, _| {
            inline_refs(child, root, child_path, active, issues);
        });
        return;
    };

    let kind: SchemaIssueKind = match json_pointer::ref_target(&reference) {
        RefTarget::Local(pointer) => match root.pointer(&pointer) {
            Some(_) if active.contains(&pointer) => SchemaIssueKind::CircularReference(reference),
            Some(target) => {
                let mut replacement: Value = target.clone();
                active.push(pointer);
                inline_refs(&mut replacement, root, path, active, issues);
                active.pop();
                *node = replacement;
                return;
            }
            None => SchemaIssueKind::UnresolvableReference(reference),
        },
        RefTarget::Malformed => SchemaIssueKind::UnresolvableReference(reference),
        RefTarget::External => SchemaIssueKind::RemoteReference(reference),
    };
    tracing::debug!(path, %kind, "cannot inline $ref");
    issues.push(SchemaIssue {
        path: json_pointer::format(path, "$ref"),
        kind,
    });
}

use serde::Deserialize;

/// One of the seven JSON Schema primitive type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Null,
    Boolean,
    Object,
    Array,
    Number,
    String,
    Integer,
}

impl JsonType {
    /// Parses a `type` keyword entry. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(name.to_string())).ok()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Number => "number",
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// How a keyword holds its subschemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubschemaShape {
    /// The value is a schema.
    Single,
    /// The value is a schema or an array of schemas (`items`).
    SingleOrList,
    /// The value is an array of schemas.
    List,
    /// The value is an object whose member values are schemas.
    /// Non-schema members (e.g. array-form `dependencies`) are skipped.
    Map,
}

/// Every keyword across drafts 4 to 2020-12 whose value contains subschemas,
/// plus the `x-patternProperties` extension produced by conversion.
pub const SUBSCHEMA_KEYWORDS: &[(&str, SubschemaShape)] = &[
    ("properties", SubschemaShape::Map),
    ("patternProperties", SubschemaShape::Map),
    ("x-patternProperties", SubschemaShape::Map),
    ("additionalProperties", SubschemaShape::Single),
    ("propertyNames", SubschemaShape::Single),
    ("unevaluatedProperties", SubschemaShape::Single),
    ("items", SubschemaShape::SingleOrList),
    ("prefixItems", SubschemaShape::List),
    ("additionalItems", SubschemaShape::Single),
    ("unevaluatedItems", SubschemaShape::Single),
    ("contains", SubschemaShape::Single),
    ("allOf", SubschemaShape::List),
    ("anyOf", SubschemaShape::List),
    ("oneOf", SubschemaShape::List),
    ("not", SubschemaShape::Single),
    ("if", SubschemaShape::Single),
    ("then", SubschemaShape::Single),
    ("else", SubschemaShape::Single),
    ("dependencies", SubschemaShape::Map),
    ("dependentSchemas", SubschemaShape::Map),
    ("definitions", SubschemaShape::Map),
    ("$defs", SubschemaShape::Map),
];

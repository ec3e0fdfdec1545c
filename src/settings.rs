//! Settings for JSON Schema to OpenAPI 3 conversion.

/// What to do with `patternProperties`, which OpenAPI 3.0 does not support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatternPropertiesHandling {
    /// Move the keyword to the `x-patternProperties` extension and default
    /// `additionalProperties` to `true` so the pattern-matched members stay allowed.
    #[default]
    Extension,
    /// Drop the keyword.
    Remove,
}

/// Settings that control conversion behavior.
#[derive(Debug, Clone, Default)]
pub struct ConvertSettings {
    /// When true, every local `$ref` is replaced by a copy of its target
    /// before conversion. Remote, dangling or circular references then fail
    /// the conversion.
    ///
    /// **Default: false.** References are passed through untouched.
    pub dereference: bool,

    /// Handling of `patternProperties`.
    pub pattern_properties: PatternPropertiesHandling,

    /// When true, every `pattern` value and `patternProperties` key must
    /// compile as an ECMA-262 regular expression, the dialect OpenAPI 3 uses.
    ///
    /// **Default: false (disabled).** Patterns are copied as-is.
    pub validate_patterns: bool,
}

//! Convert a JSON Schema document (the JSON:API 1.0 schema by default) into
//! an OpenAPI 3 Schema Object document.

mod convert;
mod dereference;
mod error;
mod json_pointer;
mod schema;
mod settings;
mod validate;
mod walk;

pub use error::{ConversionError, ConvertError, ErrorKind, SchemaIssue, SchemaIssueKind};
pub use settings::{ConvertSettings, PatternPropertiesHandling};

use serde_json::Value;
use std::path::Path;

/// Input read by the `jsonapi-oas3` binary, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "jsonapi-1.0-json-schema.json";

/// Output written by the `jsonapi-oas3` binary, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "jsonapi_oas3.json";

/// Turns a JSON Schema document into an OpenAPI 3 Schema Object document.
pub trait SchemaConverter {
    /// # Errors
    ///
    /// Returns `ConversionError` if the schema uses constructs with no
    /// OpenAPI 3 equivalent.
    fn convert(&self, schema: Value) -> Result<Value, ConversionError>;
}

impl<F> SchemaConverter for F
where
    F: Fn(Value) -> Result<Value, ConversionError>,
{
    fn convert(&self, schema: Value) -> Result<Value, ConversionError> {
        self(schema)
    }
}

/// The built-in JSON Schema → OpenAPI 3.0 collaborator.
#[derive(Debug, Clone, Default)]
pub struct OpenApi3Converter {
    settings: ConvertSettings,
}

impl OpenApi3Converter {
    #[must_use]
    pub const fn new(settings: ConvertSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub const fn settings(&self) -> &ConvertSettings {
        &self.settings
    }
}

impl SchemaConverter for OpenApi3Converter {
    fn convert(&self, schema: Value) -> Result<Value, ConversionError> {
        convert_value(schema, &self.settings)
    }
}

/// Convert a parsed JSON Schema into an OpenAPI 3 Schema Object.
///
/// # Errors
///
/// Returns `ConversionError` with every issue found if references cannot be
/// inlined (when `settings.dereference` is set) or the schema uses constructs
/// with no OpenAPI 3 equivalent.
pub fn convert_value(schema: Value, settings: &ConvertSettings) -> Result<Value, ConversionError> {
    let schema: Value = if settings.dereference {
        dereference::dereference(&schema).map_err(|issues| ConversionError { issues })?
    } else {
        schema
    };
    validate::validate_schema(&schema, settings)?;
    Ok(convert::rewrite(schema, settings))
}

/// Convert a JSON Schema string into compact OpenAPI 3 JSON text.
///
/// # Errors
///
/// Returns `ConvertError::Parse` if `schema_json` is not valid JSON, or
/// `ConvertError::Conversion` if the schema cannot be converted.
pub fn convert_str(schema_json: &str, settings: &ConvertSettings) -> Result<String, ConvertError> {
    let schema: Value = serde_json::from_str(schema_json)?;
    let converted: Value = convert_value(schema, settings)?;
    Ok(converted.to_string())
}

/// Read the schema at `input_path`, convert it with the built-in converter
/// and write compact JSON to `output_path`, replacing any existing file.
///
/// # Errors
///
/// See [`run_with`].
pub fn run(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Result<(), ConvertError> {
    run_with(input_path, output_path, &OpenApi3Converter::default())
}

/// Same as [`run`] with an explicit conversion collaborator.
///
/// The output file is only touched once reading, parsing and conversion
/// have all succeeded.
///
/// # Errors
///
/// Returns `ConvertError::IoRead` if the input cannot be read,
/// `ConvertError::Parse` if it is not JSON, `ConvertError::Conversion` if the
/// converter rejects it, and `ConvertError::IoWrite` if the output cannot be written.
pub fn run_with<C>(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    converter: &C,
) -> Result<(), ConvertError>
where
    C: SchemaConverter + ?Sized,
{
    let input_path: &Path = input_path.as_ref();
    let output_path: &Path = output_path.as_ref();

    let raw: Vec<u8> = std::fs::read(input_path).map_err(|source| ConvertError::IoRead {
        path: input_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %input_path.display(), bytes = raw.len(), "read schema");

    let schema: Value = serde_json::from_slice(&raw)?;
    let converted: Value = converter.convert(schema).inspect_err(|err| {
        tracing::warn!(issues = err.issues.len(), "schema conversion rejected");
    })?;
    let data: String = converted.to_string();

    std::fs::write(output_path, &data).map_err(|source| ConvertError::IoWrite {
        path: output_path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %output_path.display(), bytes = data.len(), "wrote converted schema");
    Ok(())
}

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// The stage of the pipeline a [`ConvertError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    IoRead,
    Parse,
    Conversion,
    IoWrite,
}

/// Error type for a read → convert → write run.
#[derive(Debug)]
pub enum ConvertError {
    /// The input file is missing, unreadable, or permission-denied.
    IoRead { path: PathBuf, source: io::Error },

    /// The input is not syntactically valid JSON.
    Parse(serde_json::Error),

    /// The conversion collaborator rejected the schema.
    Conversion(ConversionError),

    /// The output file could not be created or written.
    IoWrite { path: PathBuf, source: io::Error },
}

impl ConvertError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IoRead { .. } => ErrorKind::IoRead,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Conversion(_) => ErrorKind::Conversion,
            Self::IoWrite { .. } => ErrorKind::IoWrite,
        }
    }
}

impl error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IoRead { source, .. } | Self::IoWrite { source, .. } => Some(source),
            Self::Parse(json_error) => Some(json_error),
            Self::Conversion(conversion_error) => Some(conversion_error),
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoRead { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse(json_error) => write!(f, "input is not valid JSON: {json_error}"),
            Self::Conversion(conversion_error) => fmt::Display::fmt(conversion_error, f),
            Self::IoWrite { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::Parse(json_error)
    }
}

impl From<ConversionError> for ConvertError {
    fn from(conversion_error: ConversionError) -> Self {
        Self::Conversion(conversion_error)
    }
}

/// Kind of a single construct that cannot be expressed as an OpenAPI 3 Schema Object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaIssueKind {
    /// The document root is neither an object nor a boolean schema.
    RootNotSchema,
    /// `type` is neither a string nor an array of strings.
    InvalidTypeValue,
    /// `type` names something outside the seven JSON Schema types.
    InvalidTypeName(String),
    /// `items` is an array (positional tuple validation).
    TupleItemsUnsupported,
    /// A `pattern` or `patternProperties` key is not an ECMA-262 regex.
    InvalidPattern { pattern: String, message: String },
    /// `$ref` points outside the current document.
    RemoteReference(String),
    /// `$ref` points at a location that does not exist.
    UnresolvableReference(String),
    /// `$ref` eventually refers back to itself.
    CircularReference(String),
    /// Free-form rejection reported by a custom collaborator.
    Rejected(String),
}

impl fmt::Display for SchemaIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotSchema => write!(f, "document root must be an object or boolean schema"),
            Self::InvalidTypeValue => {
                write!(f, "\"type\" must be a string or an array of strings")
            }
            Self::InvalidTypeName(name) => write!(f, "type \"{name}\" is not a valid type"),
            Self::TupleItemsUnsupported => {
                write!(f, "array-form \"items\" has no OpenAPI 3 equivalent")
            }
            Self::InvalidPattern { pattern, message } => {
                write!(f, "pattern \"{pattern}\" is not a valid regular expression: {message}")
            }
            Self::RemoteReference(reference) => {
                write!(f, "cannot dereference non-local $ref \"{reference}\"")
            }
            Self::UnresolvableReference(reference) => {
                write!(f, "$ref \"{reference}\" does not resolve")
            }
            Self::CircularReference(reference) => {
                write!(f, "$ref \"{reference}\" is circular")
            }
            Self::Rejected(message) => write!(f, "{message}"),
        }
    }
}

/// A single issue with its JSON Pointer location in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    pub path: String,
    pub kind: SchemaIssueKind,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location: &str = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{location}: {}", self.kind)
    }
}

/// The conversion collaborator could not represent the schema in OpenAPI 3.
///
/// Carries every issue found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionError {
    pub issues: Vec<SchemaIssue>,
}

impl error::Error for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema cannot be converted to OpenAPI 3")?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

impl From<&str> for ConversionError {
    fn from(message: &str) -> Self {
        Self::from(message.to_string())
    }
}

impl From<String> for ConversionError {
    fn from(message: String) -> Self {
        Self {
            issues: vec![SchemaIssue {
                path: String::new(),
                kind: SchemaIssueKind::Rejected(message),
            }],
        }
    }
}

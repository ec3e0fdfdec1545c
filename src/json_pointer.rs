//! JSON Pointer (RFC 6901) helpers.
//!
//! Pointers locate issues in the source document and resolve local `$ref`
//! fragments. Segments are `/`-separated, with `~` escaped as `~0` and `/` as `~1`.

use percent_encoding::percent_decode_str;

/// Appends `segment` as a new reference token of `path`.
pub fn push_segment(path: &mut String, segment: &str) {
    path.push('/');
    // `~` first, or the `~` of a freshly written `~1` would be escaped again
    path.push_str(&segment.replace('~', "~0").replace('/', "~1"));
}

/// `path` extended by one escaped reference token.
#[must_use]
pub fn format(path: &str, segment: &str) -> String {
    let mut joined: String = String::with_capacity(path.len() + segment.len() + 1);
    joined.push_str(path);
    push_segment(&mut joined, segment);
    joined
}

/// Returns a new JSON Pointer path by appending an array index.
#[must_use]
pub fn format_index(path: &str, index: usize) -> String {
    format!("{path}/{index}")
}

/// Where a `$ref` value points.
#[derive(Debug, PartialEq, Eq)]
pub enum RefTarget {
    /// A JSON Pointer into the current document (`""` is the root).
    Local(String),
    /// Anything with a base URI, or a plain-name fragment anchor.
    External,
    /// A local fragment that is not valid percent-encoded UTF-8.
    Malformed,
}

/// Classifies a `$ref` value and, for local references, decodes the URI
/// fragment into a JSON Pointer usable with `serde_json::Value::pointer`.
#[must_use]
pub fn ref_target(reference: &str) -> RefTarget {
    let Some(fragment) = reference.strip_prefix('#') else {
        return RefTarget::External;
    };
    if !fragment.is_empty() && !fragment.starts_with('/') {
        return RefTarget::External;
    }
    if !has_well_formed_escapes(fragment) {
        return RefTarget::Malformed;
    }
    percent_decode_str(fragment)
        .decode_utf8()
        .map_or(RefTarget::Malformed, |pointer| RefTarget::Local(pointer.into_owned()))
}

/// Every `%` must introduce exactly two hex digits; the decoder itself
/// passes broken escapes through verbatim.
fn has_well_formed_escapes(fragment: &str) -> bool {
    let bytes: &[u8] = fragment.as_bytes();
    bytes.iter().enumerate().all(|(i, &byte)| {
        byte != b'%'
            || bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

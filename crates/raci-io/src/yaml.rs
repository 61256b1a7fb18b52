//! YAML input loader
//!
//! Deserializes the parser's output straight into [`InputDocument`].

use crate::error::IoError;
use raci_model::InputDocument;
use serde_yaml::Value;
use std::path::Path;

const INLINE_SOURCE: &str = "<inline>";

/// Read and parse a YAML document from disk
///
/// # Errors
/// Returns [`IoError::Read`] if the file cannot be read and
/// [`IoError::Yaml`] if it is empty or malformed.
pub fn load_document(path: impl AsRef<Path>) -> Result<InputDocument, IoError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    let doc = parse_source(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        groups = doc.activity_groups.len(),
        "Loaded RACI document"
    );
    Ok(doc)
}

/// Parse a YAML document from a string
///
/// # Errors
/// Returns [`IoError::Yaml`] if the content is empty or malformed.
pub fn parse_document(content: &str) -> Result<InputDocument, IoError> {
    parse_source(content, Path::new(INLINE_SOURCE))
}

fn parse_source(content: &str, path: &Path) -> Result<InputDocument, IoError> {
    let value: Value = serde_yaml::from_str(content)
        .map_err(|e| IoError::yaml(path, format!("YAML parse error: {e}")))?;

    if matches!(value, Value::Null) {
        return Err(IoError::yaml(path, "empty YAML document"));
    }

    serde_yaml::from_value(value)
        .map_err(|e| IoError::yaml(path, format!("unexpected document shape: {e}")))
}

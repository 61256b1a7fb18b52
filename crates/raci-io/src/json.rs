//! Enriched dataset JSON writer

use crate::error::IoError;
use raci_model::EnrichedDataset;
use std::path::Path;

/// Render dataset as pretty JSON, fields in declaration order
///
/// # Errors
/// Returns [`IoError::Json`] if serialization fails.
pub fn to_json_string(dataset: &EnrichedDataset) -> Result<String, IoError> {
    let mut json = serde_json::to_string_pretty(dataset)?;
    json.push('\n');
    Ok(json)
}

/// Write dataset as pretty JSON
///
/// # Errors
/// Returns [`IoError::Json`] or [`IoError::Write`].
pub fn write_enriched_json(path: impl AsRef<Path>, dataset: &EnrichedDataset) -> Result<(), IoError> {
    let path = path.as_ref();
    let json = to_json_string(dataset)?;
    std::fs::write(path, json).map_err(|e| IoError::write(path, e))?;
    tracing::debug!(path = %path.display(), "Wrote enriched JSON");
    Ok(())
}

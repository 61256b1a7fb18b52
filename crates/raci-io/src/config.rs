//! TOML configuration loader

use crate::error::IoError;
use raci_enrich::EnrichConfig;
use std::path::Path;

/// Read an [`EnrichConfig`] from a TOML file
///
/// Absent keys fall back to their defaults.
///
/// # Errors
/// Returns [`IoError::Read`] or [`IoError::Config`].
pub fn load_config(path: impl AsRef<Path>) -> Result<EnrichConfig, IoError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| IoError::read(path, e))?;
    let config = toml::from_str(&content).map_err(|e| IoError::config(path, e.to_string()))?;
    tracing::debug!(path = %path.display(), "Loaded enrichment config");
    Ok(config)
}

/// Parse an [`EnrichConfig`] from TOML text
///
/// # Errors
/// Returns [`IoError::Config`] on malformed TOML or mistyped keys.
pub fn parse_config(content: &str) -> Result<EnrichConfig, IoError> {
    toml::from_str(content).map_err(|e| IoError::config("<inline>", e.to_string()))
}

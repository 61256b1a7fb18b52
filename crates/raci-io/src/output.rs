//! Output directory writer

use crate::error::IoError;
use crate::json::write_enriched_json;
use crate::table::{write_dependency_csv, write_relationship_csv};
use raci_model::EnrichedDataset;
use std::path::{Path, PathBuf};

/// Enriched dataset file name
pub const ENRICHED_JSON: &str = "raci_enriched.json";
/// Relationship table file name
pub const TABLE_CSV: &str = "raci_table.csv";
/// Dependency table file name
pub const DEPENDENCY_CSV: &str = "activity_dependencies.csv";

/// Paths of the files written by [`write_outputs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Enriched dataset JSON
    pub enriched_json: PathBuf,
    /// Relationship table CSV
    pub relationship_csv: PathBuf,
    /// Dependency table CSV
    pub dependency_csv: PathBuf,
}

impl OutputPaths {
    /// Standard file layout under a directory
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            enriched_json: dir.join(ENRICHED_JSON),
            relationship_csv: dir.join(TABLE_CSV),
            dependency_csv: dir.join(DEPENDENCY_CSV),
        }
    }

    /// All paths in write order
    #[must_use]
    pub fn all(&self) -> [&Path; 3] {
        [
            self.enriched_json.as_path(),
            self.relationship_csv.as_path(),
            self.dependency_csv.as_path(),
        ]
    }
}

/// Create `dir` if needed and write all three outputs into it
///
/// # Errors
/// Returns the first [`IoError`] encountered.
pub fn write_outputs(dir: impl AsRef<Path>, dataset: &EnrichedDataset) -> Result<OutputPaths, IoError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| IoError::write(dir, e))?;

    let paths = OutputPaths::in_dir(dir);
    write_enriched_json(&paths.enriched_json, dataset)?;
    write_relationship_csv(&paths.relationship_csv, dataset)?;
    write_dependency_csv(&paths.dependency_csv, dataset)?;

    tracing::info!(
        dir = %dir.display(),
        relationships = dataset.relationships.len(),
        dependencies = dataset.activity_dependencies.len(),
        "Wrote enrichment outputs"
    );
    Ok(paths)
}

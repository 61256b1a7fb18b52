//! RACI IO
//!
//! Boundary adapters around the enrichment pipeline:
//! - Input documents (YAML) via serde_yaml
//! - Pipeline configuration (TOML)
//! - Enriched dataset (JSON) via serde_json
//! - Flattened relationship and dependency tables (CSV)
//!
//! # Example
//!
//! ```rust,no_run
//! use raci_enrich::{enrich, EnrichConfig};
//!
//! # fn main() -> Result<(), raci_io::IoError> {
//! let doc = raci_io::load_document("data/raci.yaml")?;
//! let dataset = enrich(&doc, &EnrichConfig::default())?;
//! let paths = raci_io::write_outputs("build", &dataset)?;
//! println!("wrote {}", paths.enriched_json.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod json;
mod output;
mod table;
mod yaml;

// Re-exports
pub use config::{load_config, parse_config};
pub use error::IoError;
pub use json::{to_json_string, write_enriched_json};
pub use output::{write_outputs, OutputPaths, DEPENDENCY_CSV, ENRICHED_JSON, TABLE_CSV};
pub use table::{
    dependency_rows, relationship_rows, write_dependency_csv, write_relationship_csv,
    DependencyRow, RelationshipRow,
};
pub use yaml::{load_document, parse_document};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Error types for the IO adapters

use raci_enrich::EnrichError;
use std::path::PathBuf;

/// Errors while loading inputs or writing outputs
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Filesystem read failure
    #[error("io error reading {path}: {source}")]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Filesystem write failure
    #[error("io error writing {path}: {source}")]
    Write {
        /// File or directory being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Malformed or empty YAML document
    #[error("yaml error in {path}: {message}")]
    Yaml {
        /// Source document
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Malformed TOML configuration
    #[error("config error in {path}: {message}")]
    Config {
        /// Config file
        path: PathBuf,
        /// Deserializer message
        message: String,
    },

    /// JSON serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failure
    #[error("csv error writing {path}: {source}")]
    Csv {
        /// Table being written
        path: PathBuf,
        /// Underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// Structural input defect reported by the pipeline
    #[error(transparent)]
    Enrich(#[from] EnrichError),
}

impl IoError {
    /// Create read error for path
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create write error for path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create YAML error for path
    pub fn yaml(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Yaml {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create config error for path
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error is an input contract violation rather than an
    /// environment failure
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Yaml { .. } | Self::Config { .. } | Self::Enrich(_))
    }
}

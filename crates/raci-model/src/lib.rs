//! RACI Model
//!
//! Data types shared by the enrichment pipeline and its adapters.
//!
//! # Overview
//!
//! - **Input**: [`InputDocument`] as produced by the document parser
//! - **Entities**: [`Role`], [`ActivityGroup`], [`Action`]
//! - **Edges**: [`RelationshipEdge`] (action, role, letter) and [`DependencyEdge`]
//! - **Diagnostics**: [`ActionWarning`], [`DependencyWarning`]
//! - **Output**: [`EnrichedDataset`] with its [`Metrics`] block
//!
//! All output types serialize in declaration order so that the enriched
//! dataset is byte-reproducible for a given input.
//!
//! # Example
//!
//! ```rust
//! use raci_model::{LetterCounts, RaciLetter};
//!
//! let mut counts = LetterCounts::default();
//! counts.increment(RaciLetter::R);
//! counts.increment(RaciLetter::A);
//! assert_eq!(counts.decision_load(), 2);
//! ```

#![warn(missing_docs)]

pub mod dataset;
pub mod edge;
pub mod entity;
pub mod input;
pub mod metrics;
pub mod warning;

// Re-exports
pub use dataset::EnrichedDataset;
pub use edge::{DependencyEdge, LetterCounts, LetterDistribution, RaciLetter, RelationshipEdge};
pub use entity::{Action, ActivityGroup, Role};
pub use input::{ActivityInput, AssignmentCell, DependencyRef, GroupInput, InputDocument};
pub use metrics::{DependencySummary, GroupSummary, Metrics, RoleSummary};
pub use warning::{ActionWarning, DependencyWarning};

/// Relation type used when a dependency reference does not name one
pub const DEFAULT_RELATION_TYPE: &str = "depends_on";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! RACI Enrichment Pipeline
//!
//! Turns a parsed responsibility-assignment document into a canonicalized,
//! cross-referenced [`EnrichedDataset`](raci_model::EnrichedDataset).
//!
//! # Stages
//!
//! - [`slug`]: display string to identifier
//! - [`tokens`]: tolerant parsing of assignment cells
//! - [`RoleRegistry`]: role canonicalization and alias merging
//! - [`ActionCatalog`]: groups, actions, relationship edges, action warnings
//! - [`DependencyResolver`]: name-based references to dependency edges
//! - [`metrics`]: role workload, overload ranking, group and dependency stats
//!
//! # Example
//!
//! ```rust
//! use raci_enrich::{enrich, EnrichConfig};
//! use raci_model::{ActivityInput, GroupInput, InputDocument};
//!
//! let mut activity = ActivityInput {
//!     name: Some("Draft Plan".to_string()),
//!     ..ActivityInput::default()
//! };
//! activity.assignments.insert("Alice".to_string(), "R".into());
//! activity.assignments.insert("Bob".to_string(), "A".into());
//!
//! let doc = InputDocument::new(vec![GroupInput {
//!     group_title: Some("Planning".to_string()),
//!     activities: vec![activity],
//!     ..GroupInput::default()
//! }]);
//!
//! let dataset = enrich(&doc, &EnrichConfig::default()).unwrap();
//! assert_eq!(dataset.actions[0].id, "planning__draft_plan");
//! assert_eq!(dataset.relationships.len(), 2);
//! assert!(dataset.is_clean());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod catalog;
pub mod config;
pub mod dependency;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod roles;
pub mod slug;
pub mod tokens;

// Re-exports
pub use catalog::{ActionCatalog, ActionLookup, ActionRef, Catalog};
pub use config::EnrichConfig;
pub use dependency::{DependencyResolution, DependencyResolver, DependencySpec};
pub use error::EnrichError;
pub use pipeline::{enrich, Enricher};
pub use roles::RoleRegistry;
pub use slug::slugify;
pub use tokens::normalize_tokens;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running the pipeline
    pub use crate::{enrich, EnrichConfig, EnrichError, Enricher};
    pub use raci_model::{EnrichedDataset, InputDocument, RaciLetter};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

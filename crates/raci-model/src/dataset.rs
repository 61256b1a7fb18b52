//! Enriched dataset
//!
//! Immutable snapshot produced by one enrichment run.

use crate::edge::{DependencyEdge, RelationshipEdge};
use crate::entity::{Action, ActivityGroup, Role};
use crate::metrics::Metrics;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonicalized, cross-referenced dataset with diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnrichedDataset {
    /// Canonical roles in registration order
    pub roles: Vec<Role>,
    /// Groups in input order
    pub activity_groups: Vec<ActivityGroup>,
    /// Actions in input order
    pub actions: Vec<Action>,
    /// One edge per assigned letter
    pub relationships: Vec<RelationshipEdge>,
    /// Resolved dependency edges, sorted
    pub activity_dependencies: Vec<DependencyEdge>,
    /// Derived metrics and diagnostics
    pub metrics: Metrics,
}

impl EnrichedDataset {
    /// Find role by id
    #[must_use]
    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Find group by id
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&ActivityGroup> {
        self.activity_groups.iter().find(|g| g.id == id)
    }

    /// Find action by id
    #[must_use]
    pub fn action(&self, id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Whether the run recorded no warnings
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.metrics.warning_count() == 0
    }
}

//! Derived metrics block

use crate::edge::{LetterCounts, LetterDistribution};
use crate::warning::{ActionWarning, DependencyWarning};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Workload of one canonical role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleSummary {
    /// Role id
    pub role_id: String,
    /// Display name
    pub role_name: String,
    /// Recorded alternative spellings
    pub aliases: Vec<String>,
    /// Edges per letter
    pub counts: LetterCounts,
    /// Sum of `counts`
    pub total_assignments: usize,
}

impl RoleSummary {
    /// Ranking key for overload detection: (R + A, total)
    #[inline]
    #[must_use]
    pub fn overload_key(&self) -> (usize, usize) {
        (self.counts.decision_load(), self.total_assignments)
    }
}

/// Per-group activity and edge distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupSummary {
    /// Group title
    pub title: String,
    /// Number of activities declared in the group
    pub action_count: usize,
    /// Relationship edges per letter that occurred in the group
    pub edge_distribution: LetterDistribution,
}

/// Resolved dependency statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencySummary {
    /// Resolved edge count
    pub total: usize,
    /// Edge count per relation type, in first-resolved order
    pub counts_by_type: IndexMap<String, usize>,
}

/// Metrics block of the enriched dataset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Metrics {
    /// Role summaries, busiest first
    pub role_summary: Vec<RoleSummary>,
    /// Roles with the highest decision load
    pub overloaded_roles: Vec<RoleSummary>,
    /// Cataloging diagnostics
    pub action_warnings: Vec<ActionWarning>,
    /// Summary per group id, in input order
    pub group_summary: IndexMap<String, GroupSummary>,
    /// Dependency statistics
    pub dependency_summary: DependencySummary,
    /// Resolution diagnostics
    pub dependency_warnings: Vec<DependencyWarning>,
}

impl Metrics {
    /// Total number of warnings of both kinds
    #[inline]
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.action_warnings.len() + self.dependency_warnings.len()
    }
}

//! Metrics aggregation
//!
//! Derives role workload, overload ranking and dependency statistics from
//! the catalog and resolution outputs. All sorts are stable; ties keep role
//! registration order.

use crate::catalog::Catalog;
use crate::dependency::DependencyResolution;
use indexmap::IndexMap;
use raci_model::{
    DependencySummary, LetterCounts, Metrics, RelationshipEdge, Role, RoleSummary,
};

/// Build role summaries, busiest role first
///
/// Every registered role appears, including roles with no edges.
#[must_use]
pub fn role_summaries<'r>(
    roles: impl IntoIterator<Item = &'r Role>,
    relationships: &[RelationshipEdge],
) -> Vec<RoleSummary> {
    let mut counts: IndexMap<&str, LetterCounts> = IndexMap::new();
    for edge in relationships {
        counts
            .entry(edge.role_id.as_str())
            .or_default()
            .increment(edge.raci);
    }

    let mut summaries: Vec<RoleSummary> = roles
        .into_iter()
        .map(|role| {
            let counts = counts.get(role.id.as_str()).copied().unwrap_or_default();
            RoleSummary {
                role_id: role.id.clone(),
                role_name: role.name.clone(),
                aliases: role.aliases.clone(),
                counts,
                total_assignments: counts.total(),
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.total_assignments.cmp(&a.total_assignments));
    summaries
}

/// Top `limit` roles by decision load (R + A), then by total assignments
#[must_use]
pub fn overloaded_roles(summaries: &[RoleSummary], limit: usize) -> Vec<RoleSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| b.overload_key().cmp(&a.overload_key()));
    ranked.truncate(limit);
    ranked
}

/// Dependency totals
#[must_use]
pub fn dependency_summary(resolution: &DependencyResolution) -> DependencySummary {
    DependencySummary {
        total: resolution.edges.len(),
        counts_by_type: resolution.counts_by_type.clone(),
    }
}

/// Assemble the full metrics block
#[must_use]
pub fn aggregate(
    catalog: &Catalog,
    resolution: &DependencyResolution,
    overload_limit: usize,
) -> Metrics {
    let role_summary = role_summaries(catalog.roles.iter(), &catalog.relationships);
    let overloaded_roles = overloaded_roles(&role_summary, overload_limit);

    Metrics {
        role_summary,
        overloaded_roles,
        action_warnings: catalog.action_warnings.clone(),
        group_summary: catalog.group_summary.clone(),
        dependency_summary: dependency_summary(resolution),
        dependency_warnings: resolution.warnings.clone(),
    }
}

//! Dependency resolution
//!
//! References name their target by `(group title, activity name)`. The
//! group defaults to the declaring activity's own group. Resolution is by
//! name, never by id, so renaming an activity breaks references to it.

use crate::catalog::ActionLookup;
use indexmap::IndexMap;
use raci_model::{DependencyEdge, DependencyRef, DependencyWarning, DEFAULT_RELATION_TYPE};
use std::collections::HashSet;

/// Dependency declarations captured from one activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Declaring action id
    pub source_action_id: String,
    /// Declaring action name
    pub source_action_name: String,
    /// Declaring group id
    pub source_group_id: String,
    /// Declaring group title
    pub source_group_title: String,
    /// References in declaration order
    pub depends_on: Vec<DependencyRef>,
}

/// Output of the resolution stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyResolution {
    /// Deduplicated edges, sorted by source group, source name, target
    /// group, target name, type
    pub edges: Vec<DependencyEdge>,
    /// Unresolvable references
    pub warnings: Vec<DependencyWarning>,
    /// Edge count per relation type in first-resolved order
    pub counts_by_type: IndexMap<String, usize>,
}

/// Resolves captured specs against the action lookup
#[derive(Debug)]
pub struct DependencyResolver<'a> {
    lookup: &'a ActionLookup,
    default_relation: String,
    seen: HashSet<(String, String, String)>,
    resolution: DependencyResolution,
}

impl<'a> DependencyResolver<'a> {
    /// Create resolver with the default `depends_on` relation type
    #[must_use]
    pub fn new(lookup: &'a ActionLookup) -> Self {
        Self {
            lookup,
            default_relation: DEFAULT_RELATION_TYPE.to_string(),
            seen: HashSet::new(),
            resolution: DependencyResolution::default(),
        }
    }

    /// With a different default relation type
    #[must_use]
    pub fn with_default_relation(mut self, relation: impl Into<String>) -> Self {
        self.default_relation = relation.into();
        self
    }

    /// Resolve every reference of every spec, then sort the edges
    #[must_use]
    pub fn resolve_all(mut self, specs: &[DependencySpec]) -> DependencyResolution {
        for spec in specs {
            for reference in &spec.depends_on {
                self.resolve(spec, reference);
            }
        }
        self.finish()
    }

    /// Resolve one reference; records an edge or a warning
    pub fn resolve(&mut self, spec: &DependencySpec, reference: &DependencyRef) {
        let Some(activity) = non_empty(reference.activity.as_deref()) else {
            self.warn(spec, "Dependency missing activity name".to_string());
            return;
        };
        let group_title =
            non_empty(reference.group.as_deref()).unwrap_or(&spec.source_group_title);

        let Some(target) = self.lookup.get(group_title, activity) else {
            self.warn(
                spec,
                format!("Dependency target not found: {group_title} :: {activity}"),
            );
            return;
        };

        let relation = reference
            .relation
            .clone()
            .unwrap_or_else(|| self.default_relation.clone());

        let key = (
            spec.source_action_id.clone(),
            target.action_id.clone(),
            relation.clone(),
        );
        if !self.seen.insert(key) {
            tracing::trace!(source = %spec.source_action_id, target = %target.action_id, "duplicate dependency");
            return;
        }

        *self
            .resolution
            .counts_by_type
            .entry(relation.clone())
            .or_insert(0) += 1;
        self.resolution.edges.push(DependencyEdge {
            source_action_id: spec.source_action_id.clone(),
            source_action_name: spec.source_action_name.clone(),
            source_group_id: spec.source_group_id.clone(),
            source_group_title: spec.source_group_title.clone(),
            target_action_id: target.action_id.clone(),
            target_action_name: activity.to_string(),
            target_group_id: target.group_id.clone(),
            target_group_title: group_title.to_string(),
            relation,
        });
    }

    fn warn(&mut self, spec: &DependencySpec, issue: String) {
        tracing::debug!(source = %spec.source_action_id, %issue, "dependency warning");
        self.resolution.warnings.push(DependencyWarning::new(
            &spec.source_action_id,
            &spec.source_action_name,
            issue,
        ));
    }

    /// Sort edges and return the resolution
    #[must_use]
    pub fn finish(mut self) -> DependencyResolution {
        self.resolution
            .edges
            .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        self.resolution
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActionRef;

    fn lookup() -> ActionLookup {
        let mut lookup = ActionLookup::new();
        for (group, name) in [
            ("Planning", "Draft Plan"),
            ("Planning", "Review Plan"),
            ("Delivery", "Build"),
        ] {
            let group_id = crate::slug::slugify(group);
            lookup.insert(
                group,
                name,
                ActionRef {
                    action_id: crate::slug::action_id(&group_id, name),
                    group_id,
                },
            );
        }
        lookup
    }

    fn spec(source: &str, group: &str, refs: Vec<DependencyRef>) -> DependencySpec {
        let group_id = crate::slug::slugify(group);
        DependencySpec {
            source_action_id: crate::slug::action_id(&group_id, source),
            source_action_name: source.to_string(),
            source_group_id: group_id,
            source_group_title: group.to_string(),
            depends_on: refs,
        }
    }

    #[test]
    fn resolves_within_own_group() {
        let lookup = lookup();
        let specs = vec![spec(
            "Review Plan",
            "Planning",
            vec![DependencyRef::to_activity("Draft Plan")],
        )];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);

        assert!(resolution.warnings.is_empty());
        assert_eq!(resolution.edges.len(), 1);
        let edge = &resolution.edges[0];
        assert_eq!(edge.target_action_id, "planning__draft_plan");
        assert_eq!(edge.target_group_title, "Planning");
        assert_eq!(edge.relation, "depends_on");
        assert_eq!(resolution.counts_by_type.get("depends_on"), Some(&1));
    }

    #[test]
    fn resolves_across_groups() {
        let lookup = lookup();
        let specs = vec![spec(
            "Build",
            "Delivery",
            vec![DependencyRef::to_activity("Review Plan")
                .in_group("Planning")
                .with_relation("blocked_by")],
        )];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);

        let edge = &resolution.edges[0];
        assert_eq!(edge.source_group_id, "delivery");
        assert_eq!(edge.target_group_id, "planning");
        assert_eq!(edge.relation, "blocked_by");
    }

    #[test]
    fn missing_activity_name_warns() {
        let lookup = lookup();
        let specs = vec![spec(
            "Build",
            "Delivery",
            vec![
                DependencyRef::default(),
                DependencyRef::to_activity(""),
            ],
        )];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);

        assert!(resolution.edges.is_empty());
        assert_eq!(resolution.warnings.len(), 2);
        assert_eq!(resolution.warnings[0].issue, "Dependency missing activity name");
    }

    #[test]
    fn unknown_target_warns_once_without_edge() {
        let lookup = lookup();
        let specs = vec![spec(
            "Build",
            "Delivery",
            vec![DependencyRef::to_activity("Draft Plan")],
        )];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);

        assert!(resolution.edges.is_empty());
        assert_eq!(resolution.warnings.len(), 1);
        assert_eq!(
            resolution.warnings[0].issue,
            "Dependency target not found: Delivery :: Draft Plan"
        );
        assert_eq!(resolution.warnings[0].source_action_id, "delivery__build");
    }

    #[test]
    fn empty_group_defaults_to_source_group() {
        let lookup = lookup();
        let specs = vec![spec(
            "Review Plan",
            "Planning",
            vec![DependencyRef::to_activity("Draft Plan").in_group("")],
        )];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);
        assert_eq!(resolution.edges.len(), 1);
    }

    #[test]
    fn duplicate_declaration_yields_one_edge() {
        let lookup = lookup();
        let specs = vec![spec(
            "Review Plan",
            "Planning",
            vec![
                DependencyRef::to_activity("Draft Plan"),
                DependencyRef::to_activity("Draft Plan").in_group("Planning"),
                DependencyRef::to_activity("Draft Plan").with_relation("depends_on"),
            ],
        )];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);

        assert_eq!(resolution.edges.len(), 1);
        assert!(resolution.warnings.is_empty());
        assert_eq!(resolution.counts_by_type.get("depends_on"), Some(&1));
    }

    #[test]
    fn distinct_types_are_distinct_edges() {
        let lookup = lookup();
        let specs = vec![spec(
            "Review Plan",
            "Planning",
            vec![
                DependencyRef::to_activity("Draft Plan"),
                DependencyRef::to_activity("Draft Plan").with_relation("informs"),
            ],
        )];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);

        assert_eq!(resolution.edges.len(), 2);
        let keys: Vec<&str> = resolution.counts_by_type.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["depends_on", "informs"]);
    }

    #[test]
    fn edges_sorted_independent_of_declaration_order() {
        let lookup = lookup();
        let specs = vec![
            spec(
                "Review Plan",
                "Planning",
                vec![DependencyRef::to_activity("Draft Plan")],
            ),
            spec(
                "Build",
                "Delivery",
                vec![DependencyRef::to_activity("Review Plan").in_group("Planning")],
            ),
            spec(
                "Draft Plan",
                "Planning",
                vec![DependencyRef::to_activity("Build").in_group("Delivery")],
            ),
        ];
        let resolution = DependencyResolver::new(&lookup).resolve_all(&specs);

        let order: Vec<(&str, &str)> = resolution
            .edges
            .iter()
            .map(|e| (e.source_group_id.as_str(), e.source_action_name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("delivery", "Build"),
                ("planning", "Draft Plan"),
                ("planning", "Review Plan"),
            ]
        );
    }

    #[test]
    fn custom_default_relation() {
        let lookup = lookup();
        let specs = vec![spec(
            "Review Plan",
            "Planning",
            vec![DependencyRef::to_activity("Draft Plan")],
        )];
        let resolution = DependencyResolver::new(&lookup)
            .with_default_relation("follows")
            .resolve_all(&specs);
        assert_eq!(resolution.edges[0].relation, "follows");
    }
}

//! Action catalog
//!
//! Registers groups and activities in input order, turns assignment cells
//! into relationship edges, and validates the Responsible/Accountable
//! assignments of every activity.
//!
//! Dependency references are only captured here. They are resolved after
//! the whole document is cataloged because a reference may point at a group
//! that has not been processed yet.

use crate::config::EnrichConfig;
use crate::dependency::DependencySpec;
use crate::error::EnrichError;
use crate::roles::RoleRegistry;
use crate::slug::{action_id, slugify};
use crate::tokens::normalize_tokens;
use indexmap::IndexMap;
use raci_model::{
    Action, ActionWarning, ActivityGroup, ActivityInput, GroupInput, GroupSummary, InputDocument,
    LetterDistribution, RaciLetter, RelationshipEdge,
};
use std::collections::HashMap;

/// Registered action as seen by dependency resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRef {
    /// Action id
    pub action_id: String,
    /// Owning group id
    pub group_id: String,
}

/// Lookup of actions by `(group title, activity name)`
///
/// Keys are the names as written in the input. A later activity with the
/// same key replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct ActionLookup {
    by_group: HashMap<String, HashMap<String, ActionRef>>,
}

impl ActionLookup {
    /// Create empty lookup
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action under its group title and activity name
    pub fn insert(&mut self, group_title: &str, activity_name: &str, action: ActionRef) {
        self.by_group
            .entry(group_title.to_string())
            .or_default()
            .insert(activity_name.to_string(), action);
    }

    /// Find action by group title and activity name
    #[must_use]
    pub fn get(&self, group_title: &str, activity_name: &str) -> Option<&ActionRef> {
        self.by_group.get(group_title)?.get(activity_name)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_group.values().map(HashMap::len).sum()
    }

    /// Check if lookup is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the catalog stage produces
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Canonical roles
    pub roles: RoleRegistry,
    /// Letters assigned per role id; group-level roles are seeded at zero
    pub role_usage: IndexMap<String, usize>,
    /// Groups in input order
    pub groups: Vec<ActivityGroup>,
    /// Actions in input order
    pub actions: Vec<Action>,
    /// Relationship edges in processing order
    pub relationships: Vec<RelationshipEdge>,
    /// Action lookup for dependency resolution
    pub lookup: ActionLookup,
    /// Per-group activity count and letter distribution
    pub group_summary: IndexMap<String, GroupSummary>,
    /// Cataloging diagnostics
    pub action_warnings: Vec<ActionWarning>,
    /// Captured dependency declarations, unresolved
    pub dependency_specs: Vec<DependencySpec>,
}

/// Single-pass builder for a [`Catalog`]
#[derive(Debug)]
pub struct ActionCatalog<'c> {
    config: &'c EnrichConfig,
    state: Catalog,
    /// Action id -> first activity name registered under it
    registered_names: HashMap<String, String>,
}

impl<'c> ActionCatalog<'c> {
    /// Create empty catalog
    #[must_use]
    pub fn new(config: &'c EnrichConfig) -> Self {
        Self {
            config,
            state: Catalog {
                roles: RoleRegistry::with_config(config),
                ..Catalog::default()
            },
            registered_names: HashMap::new(),
        }
    }

    /// Catalog a whole document
    ///
    /// # Errors
    /// Returns [`EnrichError`] on the first group without a title or
    /// activity without a name.
    pub fn build(doc: &InputDocument, config: &'c EnrichConfig) -> Result<Catalog, EnrichError> {
        let mut catalog = Self::new(config);
        for (index, group) in doc.activity_groups.iter().enumerate() {
            catalog.register_group(index, group)?;
        }
        Ok(catalog.finish())
    }

    /// Register one group and all of its activities
    ///
    /// # Errors
    /// Returns [`EnrichError`] if the group or one of its activities lacks
    /// its identity field.
    pub fn register_group(&mut self, index: usize, input: &GroupInput) -> Result<(), EnrichError> {
        let title = input
            .group_title
            .as_deref()
            .ok_or_else(|| EnrichError::missing_group_title(index))?;
        let group = ActivityGroup {
            id: slugify(title),
            title: title.to_string(),
            description: input.description.clone(),
        };
        tracing::debug!(group = %group.id, activities = input.activities.len(), "cataloging group");

        for role_name in &input.roles {
            let (role, _) = self.state.roles.canonicalize(role_name);
            self.state.role_usage.entry(role.id.clone()).or_insert(0);
        }

        let mut distribution = LetterDistribution::new();
        for (position, activity) in input.activities.iter().enumerate() {
            self.register_activity(&group, position, activity, &mut distribution)?;
        }

        self.state.group_summary.insert(
            group.id.clone(),
            GroupSummary {
                title: group.title.clone(),
                action_count: input.activities.len(),
                edge_distribution: distribution,
            },
        );
        self.state.groups.push(group);
        Ok(())
    }

    fn register_activity(
        &mut self,
        group: &ActivityGroup,
        position: usize,
        input: &ActivityInput,
        distribution: &mut LetterDistribution,
    ) -> Result<(), EnrichError> {
        let name = input
            .name
            .as_deref()
            .ok_or_else(|| EnrichError::missing_activity_name(&group.title, position))?;
        let action = Action {
            id: action_id(&group.id, name),
            name: name.to_string(),
            group_id: group.id.clone(),
            details: input.details.clone(),
        };

        self.check_collision(&action);
        self.state.lookup.insert(
            &group.title,
            name,
            ActionRef {
                action_id: action.id.clone(),
                group_id: group.id.clone(),
            },
        );

        // letter -> role ids carrying it, one entry per edge
        let mut carriers: HashMap<RaciLetter, Vec<String>> = HashMap::new();

        for (raw_role, cell) in &input.assignments {
            let (role, _) = self.state.roles.canonicalize(raw_role);
            let role_id = role.id.clone();
            let letters = normalize_tokens(cell.tokens());

            if letters.is_empty() {
                self.warn(
                    &action,
                    format!("No valid RACI tokens for role '{raw_role}'"),
                );
                continue;
            }

            *self.state.role_usage.entry(role_id.clone()).or_insert(0) += letters.len();

            for letter in letters {
                self.state.relationships.push(RelationshipEdge {
                    action_id: action.id.clone(),
                    role_id: role_id.clone(),
                    raci: letter,
                    group_id: group.id.clone(),
                });
                carriers.entry(letter).or_default().push(role_id.clone());
                distribution.increment(letter);
            }
        }

        for letter in RaciLetter::ALL.into_iter().filter(|l| l.is_critical()) {
            match carriers.get(&letter).map(Vec::as_slice).unwrap_or_default() {
                [] => self.warn(&action, format!("Missing {} assignment", letter.label())),
                [_] => {}
                many => self.warn(
                    &action,
                    format!("Multiple {} assignments: {}", letter.label(), format_id_list(many)),
                ),
            }
        }

        let dependencies = input.dependencies();
        if !dependencies.is_empty() {
            self.state.dependency_specs.push(DependencySpec {
                source_action_id: action.id.clone(),
                source_action_name: action.name.clone(),
                source_group_id: group.id.clone(),
                source_group_title: group.title.clone(),
                depends_on: dependencies.to_vec(),
            });
        }

        self.state.actions.push(action);
        Ok(())
    }

    fn check_collision(&mut self, action: &Action) {
        match self.registered_names.get(&action.id).cloned() {
            None => {
                self.registered_names
                    .insert(action.id.clone(), action.name.clone());
            }
            Some(earlier) if earlier != action.name && self.config.report_slug_collisions => {
                self.warn(action, format!("Action id collision with '{earlier}'"));
            }
            Some(_) => {}
        }
    }

    fn warn(&mut self, action: &Action, issue: String) {
        tracing::debug!(action = %action.id, %issue, "action warning");
        self.state
            .action_warnings
            .push(ActionWarning::new(&action.id, &action.name, issue));
    }

    /// Finish cataloging
    #[must_use]
    pub fn finish(self) -> Catalog {
        self.state
    }
}

/// Render role ids as `['a', 'b']`
fn format_id_list(ids: &[String]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| format!("'{id}'")).collect();
    format!("[{}]", quoted.join(", "))
}

//! Input document types
//!
//! Mirrors the structure emitted by the upstream document parser. Identity
//! fields (`group_title`, activity `name`) are optional here so that their
//! absence surfaces as a structural enrichment error rather than a parse
//! failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a parsed RACI document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InputDocument {
    /// Activity groups in document order
    #[serde(default)]
    pub activity_groups: Vec<GroupInput>,
}

impl InputDocument {
    /// Create document from groups
    #[inline]
    #[must_use]
    pub fn new(activity_groups: Vec<GroupInput>) -> Self {
        Self { activity_groups }
    }

    /// Total number of activities across all groups
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.activity_groups.iter().map(|g| g.activities.len()).sum()
    }
}

/// One group of activities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupInput {
    /// Display title (required)
    #[serde(default)]
    pub group_title: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Roles declared at group level, possibly never assigned
    #[serde(default)]
    pub roles: Vec<String>,

    /// Activities in document order
    #[serde(default)]
    pub activities: Vec<ActivityInput>,
}

/// One activity with its role assignments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityInput {
    /// Activity name (required)
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form details
    #[serde(default)]
    pub details: Option<String>,

    /// Raw role name to assignment cell.
    ///
    /// Ordered map: iteration is lexicographic by raw role name.
    #[serde(default)]
    pub assignments: BTreeMap<String, AssignmentCell>,

    /// Name-based references to other activities
    #[serde(default)]
    pub depends_on: Option<Vec<DependencyRef>>,
}

impl ActivityInput {
    /// Declared dependency references (empty when absent or null)
    #[inline]
    #[must_use]
    pub fn dependencies(&self) -> &[DependencyRef] {
        self.depends_on.as_deref().unwrap_or_default()
    }
}

/// Raw value of one assignment cell
///
/// Cells hold either a single token (`R`), a list of tokens (`[R, A]`) or
/// nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AssignmentCell {
    /// Null cell
    #[default]
    Empty,
    /// Single token
    Single(String),
    /// Token list
    Many(Vec<String>),
}

impl AssignmentCell {
    /// Iterate raw tokens in cell order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Empty => &[],
            Self::Single(token) => std::slice::from_ref(token),
            Self::Many(tokens) => tokens,
        };
        slice.iter().map(String::as_str)
    }
}

impl From<&str> for AssignmentCell {
    fn from(token: &str) -> Self {
        Self::Single(token.to_string())
    }
}

impl From<Vec<&str>> for AssignmentCell {
    fn from(tokens: Vec<&str>) -> Self {
        Self::Many(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Reference from one activity to another by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyRef {
    /// Target activity name
    #[serde(default)]
    pub activity: Option<String>,

    /// Target group title; the source group when absent
    #[serde(default)]
    pub group: Option<String>,

    /// Relation type; `depends_on` when absent
    #[serde(default, rename = "type")]
    pub relation: Option<String>,
}

impl DependencyRef {
    /// Reference an activity in the same group
    #[inline]
    #[must_use]
    pub fn to_activity(activity: impl Into<String>) -> Self {
        Self {
            activity: Some(activity.into()),
            ..Self::default()
        }
    }

    /// Set target group title
    #[inline]
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set relation type
    #[inline]
    #[must_use]
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }
}

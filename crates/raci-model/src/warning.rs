//! Data-quality diagnostics
//!
//! Warnings never stop a run; they travel with the enriched dataset.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue found while cataloging one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionWarning {
    /// Action id
    pub action_id: String,
    /// Action name
    pub action_name: String,
    /// Human-readable issue
    pub issue: String,
}

impl ActionWarning {
    /// Create warning
    #[inline]
    #[must_use]
    pub fn new(
        action_id: impl Into<String>,
        action_name: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            action_id: action_id.into(),
            action_name: action_name.into(),
            issue: issue.into(),
        }
    }
}

impl fmt::Display for ActionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.action_name, self.action_id, self.issue)
    }
}

/// Issue found while resolving a dependency reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyWarning {
    /// Declaring action id
    pub source_action_id: String,
    /// Declaring action name
    pub source_action_name: String,
    /// Human-readable issue
    pub issue: String,
}

impl DependencyWarning {
    /// Create warning
    #[inline]
    #[must_use]
    pub fn new(
        source_action_id: impl Into<String>,
        source_action_name: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            source_action_id: source_action_id.into(),
            source_action_name: source_action_name.into(),
            issue: issue.into(),
        }
    }
}

impl fmt::Display for DependencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.source_action_name, self.source_action_id, self.issue
        )
    }
}

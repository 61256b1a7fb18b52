//! Canonical entities
//!
//! Roles, groups and actions as registered by one enrichment run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical role merged from all of its spellings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Role {
    /// Slug of the display name
    pub id: String,
    /// Display name
    pub name: String,
    /// Distinct non-canonical spellings in first-seen order
    pub aliases: Vec<String>,
}

impl Role {
    /// Create role without aliases
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Record a spelling unless it is the display name or already known
    ///
    /// Returns `true` if the alias was appended.
    pub fn record_alias(&mut self, spelling: &str) -> bool {
        if spelling == self.name || self.aliases.iter().any(|a| a == spelling) {
            return false;
        }
        self.aliases.push(spelling.to_string());
        true
    }
}

/// Group of activities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivityGroup {
    /// Slug of the title
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form description
    pub description: Option<String>,
}

/// Registered activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Action {
    /// `<group_id>__<slug(name)>`
    pub id: String,
    /// Activity name as written
    pub name: String,
    /// Owning group id
    pub group_id: String,
    /// Free-form details
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_alias_skips_display_name() {
        let mut role = Role::new("product_owner", "Product Owner");
        assert!(!role.record_alias("Product Owner"));
        assert!(role.aliases.is_empty());
    }

    #[test]
    fn record_alias_keeps_first_seen_order() {
        let mut role = Role::new("product_owner", "Product Owner");
        assert!(role.record_alias("product owner"));
        assert!(role.record_alias("Product owner"));
        assert!(!role.record_alias("product owner"));
        assert_eq!(role.aliases, vec!["product owner", "Product owner"]);
    }

    #[test]
    fn absent_description_serializes_as_null() {
        let group = ActivityGroup {
            id: "planning".to_string(),
            title: "Planning".to_string(),
            description: None,
        };
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(json, r#"{"id":"planning","title":"Planning","description":null}"#);
    }
}

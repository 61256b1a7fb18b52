//! Role registry
//!
//! Canonicalizes raw role names into [`Role`] records. Identity is the
//! lower-cased display name, so spellings that differ only in case or
//! whitespace collapse into one role regardless of input order.

use crate::config::EnrichConfig;
use crate::slug::role_slug;
use indexmap::IndexMap;
use raci_model::Role;

/// Registry of canonical roles in registration order
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    /// Canonical key -> role
    roles: IndexMap<String, Role>,
    /// Lower-case cleaned name -> preferred display name
    overrides: IndexMap<String, String>,
}

impl RoleRegistry {
    /// Create registry using the static override table
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&EnrichConfig::default())
    }

    /// Create registry with configured overrides
    #[must_use]
    pub fn with_config(config: &EnrichConfig) -> Self {
        Self {
            roles: IndexMap::new(),
            overrides: config.effective_role_overrides(),
        }
    }

    /// Resolve a raw name to its canonical role, creating it on first sight
    ///
    /// Returns the role and whether it was created by this call. The cleaned
    /// spelling is recorded as an alias when it differs from the display name.
    pub fn canonicalize(&mut self, raw_name: &str) -> (&Role, bool) {
        let cleaned = collapse_whitespace(raw_name);
        let display_name = self
            .overrides
            .get(&cleaned.to_lowercase())
            .cloned()
            .unwrap_or_else(|| cleaned.clone());
        let key = display_name.to_lowercase();

        let created = !self.roles.contains_key(&key);
        let role = self.roles.entry(key).or_insert_with(|| {
            tracing::debug!(role = %display_name, "registering role");
            Role::new(role_slug(&display_name), display_name)
        });
        role.record_alias(&cleaned);

        (&*role, created)
    }

    /// Look up a role by raw name without registering it
    #[must_use]
    pub fn get(&self, raw_name: &str) -> Option<&Role> {
        let cleaned = collapse_whitespace(raw_name);
        let lowered = cleaned.to_lowercase();
        let key = self
            .overrides
            .get(&lowered)
            .map_or(lowered, |display| display.to_lowercase());
        self.roles.get(&key)
    }

    /// Iterate roles in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    /// Number of canonical roles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Consume into roles in registration order
    #[must_use]
    pub fn into_roles(self) -> Vec<Role> {
        self.roles.into_values().collect()
    }
}

/// Trim and collapse internal whitespace runs to a single space
fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

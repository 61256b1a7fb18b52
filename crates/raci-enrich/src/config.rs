//! Pipeline configuration
//!
//! Every field has a default, so an empty TOML file is a valid config.

use indexmap::IndexMap;
use raci_model::DEFAULT_RELATION_TYPE;
use serde::{Deserialize, Serialize};

/// Preferred display spellings, keyed by lower-case cleaned name
pub const DEFAULT_ROLE_OVERRIDES: &[(&str, &str)] = &[("product owner", "Product Owner")];

/// Enrichment configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Extra display overrides merged over [`DEFAULT_ROLE_OVERRIDES`]
    pub role_overrides: IndexMap<String, String>,
    /// Number of roles reported as overloaded
    pub overload_limit: usize,
    /// Relation type for references that do not name one
    pub default_relation_type: String,
    /// Warn when two differently-named activities share an action id
    pub report_slug_collisions: bool,
}

impl EnrichConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an extra role override
    #[must_use]
    pub fn with_role_override(mut self, name: &str, display: impl Into<String>) -> Self {
        self.role_overrides
            .insert(name.trim().to_lowercase(), display.into());
        self
    }

    /// With overload limit
    #[inline]
    #[must_use]
    pub fn with_overload_limit(mut self, limit: usize) -> Self {
        self.overload_limit = limit;
        self
    }

    /// With default relation type
    #[inline]
    #[must_use]
    pub fn with_default_relation_type(mut self, relation: impl Into<String>) -> Self {
        self.default_relation_type = relation.into();
        self
    }

    /// With slug collision reporting
    #[inline]
    #[must_use]
    pub fn with_slug_collision_reporting(mut self, enabled: bool) -> Self {
        self.report_slug_collisions = enabled;
        self
    }

    /// Static defaults overlaid with configured overrides.
    ///
    /// Keys are lower-cased so lookups are case-insensitive regardless of
    /// how the config file spells them.
    #[must_use]
    pub fn effective_role_overrides(&self) -> IndexMap<String, String> {
        let mut table: IndexMap<String, String> = DEFAULT_ROLE_OVERRIDES
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        for (key, display) in &self.role_overrides {
            table.insert(key.trim().to_lowercase(), display.clone());
        }
        table
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            role_overrides: IndexMap::new(),
            overload_limit: 3,
            default_relation_type: DEFAULT_RELATION_TYPE.to_string(),
            report_slug_collisions: false,
        }
    }
}

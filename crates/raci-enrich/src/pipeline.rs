//! End-to-end enrichment
//!
//! Runs catalog, resolution and aggregation in order and assembles the
//! immutable [`EnrichedDataset`].

use crate::catalog::ActionCatalog;
use crate::config::EnrichConfig;
use crate::dependency::DependencyResolver;
use crate::error::EnrichError;
use crate::metrics;
use raci_model::{EnrichedDataset, InputDocument};

/// Configured pipeline runner
#[derive(Debug, Clone, Default)]
pub struct Enricher {
    config: EnrichConfig,
}

impl Enricher {
    /// Create runner with configuration
    #[inline]
    #[must_use]
    pub fn new(config: EnrichConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }

    /// Enrich one document
    ///
    /// # Errors
    /// Returns [`EnrichError`] when a group or activity lacks its identity
    /// field. Data-quality issues are reported as warnings instead.
    pub fn run(&self, doc: &InputDocument) -> Result<EnrichedDataset, EnrichError> {
        tracing::info!(
            groups = doc.activity_groups.len(),
            activities = doc.activity_count(),
            "Enriching RACI document"
        );

        let catalog = ActionCatalog::build(doc, &self.config)?;
        tracing::debug!(
            roles = catalog.roles.len(),
            relationships = catalog.relationships.len(),
            specs = catalog.dependency_specs.len(),
            "Catalog built"
        );

        let resolution = DependencyResolver::new(&catalog.lookup)
            .with_default_relation(self.config.default_relation_type.clone())
            .resolve_all(&catalog.dependency_specs);
        tracing::debug!(
            edges = resolution.edges.len(),
            warnings = resolution.warnings.len(),
            "Dependencies resolved"
        );

        let metrics = metrics::aggregate(&catalog, &resolution, self.config.overload_limit);

        let dataset = EnrichedDataset {
            roles: catalog.roles.into_roles(),
            activity_groups: catalog.groups,
            actions: catalog.actions,
            relationships: catalog.relationships,
            activity_dependencies: resolution.edges,
            metrics,
        };

        tracing::info!(
            roles = dataset.roles.len(),
            actions = dataset.actions.len(),
            relationships = dataset.relationships.len(),
            dependencies = dataset.activity_dependencies.len(),
            warnings = dataset.metrics.warning_count(),
            "Enrichment completed"
        );
        Ok(dataset)
    }
}

/// Enrich a document with the given configuration
///
/// # Errors
/// See [`Enricher::run`].
pub fn enrich(doc: &InputDocument, config: &EnrichConfig) -> Result<EnrichedDataset, EnrichError> {
    Enricher::new(config.clone()).run(doc)
}

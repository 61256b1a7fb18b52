//! Flattened CSV projections
//!
//! One row per relationship edge and one row per dependency edge, in edge
//! order. Display names are joined back in from the dataset's entities.

use crate::error::IoError;
use raci_model::EnrichedDataset;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Relationship table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipRow {
    /// Group id
    pub group_id: String,
    /// Group title
    pub group_title: String,
    /// Action id
    pub action_id: String,
    /// Action name
    pub action_name: String,
    /// Role id
    pub role_id: String,
    /// Role display name
    pub role_name: String,
    /// Letter
    pub raci: String,
}

/// Dependency table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRow {
    /// Declaring group id
    pub source_group_id: String,
    /// Declaring group title
    pub source_group_title: String,
    /// Declaring action id
    pub source_action_id: String,
    /// Declaring action name
    pub source_action_name: String,
    /// Referenced group id
    pub target_group_id: String,
    /// Referenced group title
    pub target_group_title: String,
    /// Referenced action id
    pub target_action_id: String,
    /// Referenced activity name
    pub target_action_name: String,
    /// Relation type
    #[serde(rename = "type")]
    pub relation: String,
}

/// Project relationship edges into table rows
#[must_use]
pub fn relationship_rows(dataset: &EnrichedDataset) -> Vec<RelationshipRow> {
    let groups: HashMap<&str, &str> = dataset
        .activity_groups
        .iter()
        .map(|g| (g.id.as_str(), g.title.as_str()))
        .collect();
    let actions: HashMap<&str, &str> = dataset
        .actions
        .iter()
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect();
    let roles: HashMap<&str, &str> = dataset
        .roles
        .iter()
        .map(|r| (r.id.as_str(), r.name.as_str()))
        .collect();

    let lookup = |table: &HashMap<&str, &str>, key: &str| {
        table.get(key).copied().unwrap_or_default().to_string()
    };

    dataset
        .relationships
        .iter()
        .map(|edge| RelationshipRow {
            group_id: edge.group_id.clone(),
            group_title: lookup(&groups, &edge.group_id),
            action_id: edge.action_id.clone(),
            action_name: lookup(&actions, &edge.action_id),
            role_id: edge.role_id.clone(),
            role_name: lookup(&roles, &edge.role_id),
            raci: edge.raci.to_string(),
        })
        .collect()
}

/// Project dependency edges into table rows
#[must_use]
pub fn dependency_rows(dataset: &EnrichedDataset) -> Vec<DependencyRow> {
    dataset
        .activity_dependencies
        .iter()
        .map(|edge| DependencyRow {
            source_group_id: edge.source_group_id.clone(),
            source_group_title: edge.source_group_title.clone(),
            source_action_id: edge.source_action_id.clone(),
            source_action_name: edge.source_action_name.clone(),
            target_group_id: edge.target_group_id.clone(),
            target_group_title: edge.target_group_title.clone(),
            target_action_id: edge.target_action_id.clone(),
            target_action_name: edge.target_action_name.clone(),
            relation: edge.relation.clone(),
        })
        .collect()
}

/// Write the relationship table with a header row
///
/// # Errors
/// Returns [`IoError::Csv`] on any write failure.
pub fn write_relationship_csv(path: impl AsRef<Path>, dataset: &EnrichedDataset) -> Result<(), IoError> {
    write_rows(path.as_ref(), &relationship_rows(dataset), RELATIONSHIP_HEADER)
}

/// Write the dependency table with a header row
///
/// # Errors
/// Returns [`IoError::Csv`] on any write failure.
pub fn write_dependency_csv(path: impl AsRef<Path>, dataset: &EnrichedDataset) -> Result<(), IoError> {
    write_rows(path.as_ref(), &dependency_rows(dataset), DEPENDENCY_HEADER)
}

const RELATIONSHIP_HEADER: &[&str] = &[
    "group_id",
    "group_title",
    "action_id",
    "action_name",
    "role_id",
    "role_name",
    "raci",
];

const DEPENDENCY_HEADER: &[&str] = &[
    "source_group_id",
    "source_group_title",
    "source_action_id",
    "source_action_name",
    "target_group_id",
    "target_group_title",
    "target_action_id",
    "target_action_name",
    "type",
];

// The header is written explicitly so an empty table still carries it.
fn write_rows<T: Serialize>(path: &Path, rows: &[T], header: &[&str]) -> Result<(), IoError> {
    let csv_err = |source| IoError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(header).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|e| IoError::write(path, e))?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote CSV table");
    Ok(())
}

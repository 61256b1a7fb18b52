//! Testing utilities for the RACI workspace
//!
//! Builders for input documents plus a few canned fixtures.

#![allow(missing_docs)]

use raci_model::{ActivityInput, AssignmentCell, DependencyRef, GroupInput, InputDocument};

/// Fluent builder for [`ActivityInput`]
#[derive(Debug, Clone, Default)]
pub struct ActivityBuilder {
    inner: ActivityInput,
}

impl ActivityBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            inner: ActivityInput {
                name: Some(name.to_string()),
                ..ActivityInput::default()
            },
        }
    }

    /// Activity without a name, for structural error tests
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn details(mut self, details: &str) -> Self {
        self.inner.details = Some(details.to_string());
        self
    }

    pub fn assign(mut self, role: &str, cell: impl Into<AssignmentCell>) -> Self {
        self.inner.assignments.insert(role.to_string(), cell.into());
        self
    }

    pub fn depends_on(mut self, dependency: DependencyRef) -> Self {
        self.inner
            .depends_on
            .get_or_insert_with(Vec::new)
            .push(dependency);
        self
    }

    pub fn build(self) -> ActivityInput {
        self.inner
    }
}

/// Fluent builder for [`GroupInput`]
#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    inner: GroupInput,
}

impl GroupBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            inner: GroupInput {
                group_title: Some(title.to_string()),
                ..GroupInput::default()
            },
        }
    }

    /// Group without a title, for structural error tests
    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: &str) -> Self {
        self.inner.description = Some(description.to_string());
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.inner.roles.push(role.to_string());
        self
    }

    pub fn activity(mut self, activity: ActivityBuilder) -> Self {
        self.inner.activities.push(activity.build());
        self
    }

    pub fn build(self) -> GroupInput {
        self.inner
    }
}

/// Build a document from group builders
pub fn document(groups: impl IntoIterator<Item = GroupBuilder>) -> InputDocument {
    InputDocument::new(groups.into_iter().map(GroupBuilder::build).collect())
}

/// Same-group dependency reference
pub fn dep(activity: &str) -> DependencyRef {
    DependencyRef::to_activity(activity)
}

/// "Planning" with "Draft Plan" (Alice=R, Bob=A) and "Review Plan"
/// (Bob=C, Carol=I) depending on "Draft Plan"
pub fn planning_document() -> InputDocument {
    document([GroupBuilder::new("Planning")
        .activity(
            ActivityBuilder::new("Draft Plan")
                .assign("Alice", "R")
                .assign("Bob", "A"),
        )
        .activity(
            ActivityBuilder::new("Review Plan")
                .assign("Bob", "C")
                .assign("Carol", "I")
                .depends_on(dep("Draft Plan")),
        )])
}

/// Two groups with cross-group references, aliases and a few data-quality
/// issues
pub fn program_document() -> InputDocument {
    document([
        GroupBuilder::new("Discovery")
            .description("Understand the problem")
            .role("Product owner")
            .role("Stakeholder")
            .activity(
                ActivityBuilder::new("Interview Users")
                    .assign("Product owner", "A")
                    .assign("UX Researcher", vec!["r", " c "]),
            )
            .activity(
                ActivityBuilder::new("Write Brief")
                    .details("One page")
                    .assign("product owner ", "RA")
                    .assign("Tech Lead", "C")
                    .assign("Stakeholder", "I")
                    .depends_on(dep("Interview Users")),
            ),
        GroupBuilder::new("Delivery")
            .role("QA")
            .activity(
                ActivityBuilder::new("Build Feature")
                    .assign("Tech Lead", "R")
                    .assign("Engineer", "R")
                    .assign("Product  Owner", "A")
                    .depends_on(dep("Write Brief").in_group("Discovery"))
                    .depends_on(dep("Write Brief").in_group("Discovery"))
                    .depends_on(dep("Missing Step")),
            )
            .activity(
                ActivityBuilder::new("Test Feature")
                    .assign("QA", "\u{0421}")
                    .assign("Tech Lead", vec!["x"])
                    .depends_on(dep("Build Feature").with_relation("verifies")),
            ),
    ])
}

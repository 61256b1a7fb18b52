//! Error types for the enrichment pipeline
//!
//! Only structural defects are errors. Data-quality issues are recorded as
//! warnings on the dataset and never surface here.

/// Structural input defect; aborts the run
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichError {
    /// Group entry without `group_title`
    #[error("activity group #{index} is missing group_title")]
    MissingGroupTitle {
        /// Zero-based position in `activity_groups`
        index: usize,
    },

    /// Activity entry without `name`
    #[error("activity #{index} in group '{group}' is missing name")]
    MissingActivityName {
        /// Title of the owning group
        group: String,
        /// Zero-based position in the group's `activities`
        index: usize,
    },
}

impl EnrichError {
    /// Create missing group title error
    #[inline]
    #[must_use]
    pub fn missing_group_title(index: usize) -> Self {
        Self::MissingGroupTitle { index }
    }

    /// Create missing activity name error
    #[inline]
    #[must_use]
    pub fn missing_activity_name(group: impl Into<String>, index: usize) -> Self {
        Self::MissingActivityName {
            group: group.into(),
            index,
        }
    }
}

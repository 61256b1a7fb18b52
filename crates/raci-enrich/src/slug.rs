//! Identifier slugs
//!
//! Lower-case `[a-z0-9_]` identifiers derived from display strings. Distinct
//! inputs may share a slug; no collision resolution happens here.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("static slug pattern is valid"));

/// Slugify a display string
///
/// Trims, lower-cases, collapses every run of characters outside
/// `[a-z0-9]` into one `_`, then strips leading and trailing `_`.
///
/// # Example
///
/// ```rust
/// assert_eq!(raci_enrich::slugify("  Draft the Plan! "), "draft_the_plan");
/// assert_eq!(raci_enrich::slugify("Q&A / Review"), "q_a_review");
/// ```
#[must_use]
pub fn slugify(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

/// Slug for a role display name; `&` reads as `and`
#[must_use]
pub fn role_slug(display_name: &str) -> String {
    slugify(&display_name.replace('&', "and"))
}

/// Action identifier: `<group_id>__<slug(name)>`
#[must_use]
pub fn action_id(group_id: &str, action_name: &str) -> String {
    format!("{group_id}__{}", slugify(action_name))
}

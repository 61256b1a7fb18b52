//! Relationship and dependency edges
//!
//! A relationship edge is one (action, role, letter) fact. A dependency edge
//! is one resolved reference between two registered actions.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Responsibility letter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum RaciLetter {
    /// Responsible: does the work
    R,
    /// Accountable: owns the outcome
    A,
    /// Consulted: gives input
    C,
    /// Informed: kept up to date
    I,
}

impl RaciLetter {
    /// All letters in summary order
    pub const ALL: [RaciLetter; 4] = [Self::R, Self::A, Self::C, Self::I];

    /// Parse an upper-case letter
    #[inline]
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(Self::R),
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'I' => Some(Self::I),
            _ => None,
        }
    }

    /// Letter as a char
    #[inline]
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::R => 'R',
            Self::A => 'A',
            Self::C => 'C',
            Self::I => 'I',
        }
    }

    /// Long name used in diagnostics
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::R => "Responsible",
            Self::A => "Accountable",
            Self::C => "Consulted",
            Self::I => "Informed",
        }
    }

    /// Whether the letter must be carried by exactly one role per action
    #[inline]
    #[must_use]
    pub fn is_critical(self) -> bool {
        matches!(self, Self::R | Self::A)
    }
}

impl fmt::Display for RaciLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One (action, role, letter) assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelationshipEdge {
    /// Action id
    pub action_id: String,
    /// Canonical role id
    pub role_id: String,
    /// Assigned letter
    pub raci: RaciLetter,
    /// Group of the action
    pub group_id: String,
}

/// Resolved dependency between two actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyEdge {
    /// Declaring action id
    pub source_action_id: String,
    /// Declaring action name
    pub source_action_name: String,
    /// Declaring group id
    pub source_group_id: String,
    /// Declaring group title
    pub source_group_title: String,
    /// Referenced action id
    pub target_action_id: String,
    /// Referenced activity name as written in the reference
    pub target_action_name: String,
    /// Referenced group id
    pub target_group_id: String,
    /// Referenced group title
    pub target_group_title: String,
    /// Relation type
    #[serde(rename = "type")]
    pub relation: String,
}

impl DependencyEdge {
    /// Uniqueness key
    #[inline]
    #[must_use]
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.source_action_id, &self.target_action_id, &self.relation)
    }

    /// Composite key used for output ordering
    #[inline]
    #[must_use]
    pub fn sort_key(&self) -> (&str, &str, &str, &str, &str) {
        (
            &self.source_group_id,
            &self.source_action_name,
            &self.target_group_id,
            &self.target_action_name,
            &self.relation,
        )
    }
}

/// Per-letter tally; all four letters are always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LetterCounts {
    /// Responsible count
    #[serde(rename = "R")]
    pub responsible: usize,
    /// Accountable count
    #[serde(rename = "A")]
    pub accountable: usize,
    /// Consulted count
    #[serde(rename = "C")]
    pub consulted: usize,
    /// Informed count
    #[serde(rename = "I")]
    pub informed: usize,
}

impl LetterCounts {
    /// Count for one letter
    #[inline]
    #[must_use]
    pub fn get(&self, letter: RaciLetter) -> usize {
        match letter {
            RaciLetter::R => self.responsible,
            RaciLetter::A => self.accountable,
            RaciLetter::C => self.consulted,
            RaciLetter::I => self.informed,
        }
    }

    /// Increment count for one letter
    #[inline]
    pub fn increment(&mut self, letter: RaciLetter) {
        let slot = match letter {
            RaciLetter::R => &mut self.responsible,
            RaciLetter::A => &mut self.accountable,
            RaciLetter::C => &mut self.consulted,
            RaciLetter::I => &mut self.informed,
        };
        *slot += 1;
    }

    /// Sum of all four letters
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.responsible + self.accountable + self.consulted + self.informed
    }

    /// Decision-making load (R + A)
    #[inline]
    #[must_use]
    pub fn decision_load(&self) -> usize {
        self.responsible + self.accountable
    }
}

impl FromIterator<RaciLetter> for LetterCounts {
    fn from_iter<T: IntoIterator<Item = RaciLetter>>(iter: T) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.increment(letter);
        }
        counts
    }
}

/// Per-letter tally holding only the letters that occurred, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct LetterDistribution(IndexMap<RaciLetter, usize>);

impl LetterDistribution {
    /// Create empty distribution
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for one letter, zero if it never occurred
    #[inline]
    #[must_use]
    pub fn get(&self, letter: RaciLetter) -> usize {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Increment count for one letter, appending it on first sight
    #[inline]
    pub fn increment(&mut self, letter: RaciLetter) {
        *self.0.entry(letter).or_insert(0) += 1;
    }

    /// Sum over all recorded letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Recorded letters with their counts
    pub fn iter(&self) -> impl Iterator<Item = (RaciLetter, usize)> + '_ {
        self.0.iter().map(|(letter, count)| (*letter, *count))
    }

    /// Whether no letter was recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RaciLetter> for LetterDistribution {
    fn from_iter<T: IntoIterator<Item = RaciLetter>>(iter: T) -> Self {
        let mut distribution = Self::default();
        for letter in iter {
            distribution.increment(letter);
        }
        distribution
    }
}

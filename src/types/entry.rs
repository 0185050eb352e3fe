//! Journal entry model
//!
//! Entries arrive pre-classified: the emotion label comes from the sentiment
//! model upstream, the engine never classifies text itself.

use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An emotion label as produced by the sentiment classifier.
///
/// The label set is externally defined and open-ended; labels are normalized
/// (trimmed, lowercased) so surface variants compare equal. `Ord` on the
/// normalized name is the fixed tie-break order used everywhere a dominant
/// emotion must be picked from equal counts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EmotionLabel(String);

impl EmotionLabel {
    /// Create a normalized label
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    /// The normalized name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A label with no content marks a malformed entry
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for EmotionLabel {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<EmotionLabel> for String {
    fn from(label: EmotionLabel) -> Self {
        label.0
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which emotion labels count as positive or negative for insight purposes.
///
/// Injected into the engine at construction so tests can substitute their own
/// sets. Labels in neither set are neutral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionPolarity {
    positive: BTreeSet<EmotionLabel>,
    negative: BTreeSet<EmotionLabel>,
}

impl Default for EmotionPolarity {
    fn default() -> Self {
        Self {
            positive: [EmotionLabel::new("joy")].into_iter().collect(),
            negative: [
                EmotionLabel::new("anxiety"),
                EmotionLabel::new("sadness"),
                EmotionLabel::new("anger"),
            ]
            .into_iter()
            .collect(),
        }
    }
}

impl EmotionPolarity {
    /// Create custom polarity sets
    pub fn new(
        positive: impl IntoIterator<Item = EmotionLabel>,
        negative: impl IntoIterator<Item = EmotionLabel>,
    ) -> Self {
        Self {
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    pub fn is_positive(&self, label: &EmotionLabel) -> bool {
        self.positive.contains(label)
    }

    pub fn is_negative(&self, label: &EmotionLabel) -> bool {
        self.negative.contains(label)
    }

    /// Positive labels in their fixed order
    pub fn positive(&self) -> impl Iterator<Item = &EmotionLabel> {
        self.positive.iter()
    }

    /// Negative labels in their fixed order
    pub fn negative(&self) -> impl Iterator<Item = &EmotionLabel> {
        self.negative.iter()
    }
}

/// A single journal entry: free text, classified emotion, creation time.
///
/// Owned by the store; the engine only ever sees a read-only snapshot sorted
/// ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The journaled text
    pub text: String,
    /// Classified emotion label
    pub emotion: EmotionLabel,
    /// When the entry was written
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Create a new entry
    pub fn new(text: impl Into<String>, emotion: EmotionLabel, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            emotion,
            timestamp,
        }
    }

    /// Entries missing text or emotion are skipped during aggregation
    pub fn is_well_formed(&self) -> bool {
        !self.text.trim().is_empty() && !self.emotion.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

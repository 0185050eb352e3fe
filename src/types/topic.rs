//! Topic labels and the per-window topic-emotion count table
//!
//! Iteration order is part of the contract: both maps keep insertion order,
//! so topics and emotions come back in order of first appearance and output
//! built from them is reproducible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{EmotionLabel, EmotionPolarity};

/// A topic label: either a taxonomy category name ("Work & Career") or a
/// capitalized token lifted from the entry text ("Boss").
///
/// Labels from the two passes are only considered the same topic when their
/// strings match exactly; there is no cross-provenance deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicLabel(String);

impl TopicLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TopicLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Topic → emotion → count, built fresh per invocation and purely additive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicEmotionTable {
    counts: IndexMap<TopicLabel, IndexMap<EmotionLabel, u32>>,
}

impl TopicEmotionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for one (topic, emotion) pair
    pub fn record(&mut self, topic: TopicLabel, emotion: EmotionLabel) {
        *self
            .counts
            .entry(topic)
            .or_default()
            .entry(emotion)
            .or_insert(0) += 1;
    }

    /// Topics in first-appearance order
    pub fn topics(&self) -> impl Iterator<Item = &TopicLabel> {
        self.counts.keys()
    }

    /// The emotion counts for one topic, if present
    pub fn emotions(&self, topic: &TopicLabel) -> Option<&IndexMap<EmotionLabel, u32>> {
        self.counts.get(topic)
    }

    pub fn contains(&self, topic: &TopicLabel) -> bool {
        self.counts.contains_key(topic)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The emotion with the highest count for a topic.
    ///
    /// Equal counts break toward the alphabetically lowest label name, so the
    /// pick is stable across runs.
    pub fn dominant_emotion(&self, topic: &TopicLabel) -> Option<EmotionLabel> {
        let row = self.counts.get(topic)?;
        let mut best: Option<(&EmotionLabel, u32)> = None;
        for (emotion, &count) in row {
            match best {
                None => best = Some((emotion, count)),
                Some((best_emotion, best_count)) => {
                    if count > best_count || (count == best_count && emotion < best_emotion) {
                        best = Some((emotion, count));
                    }
                }
            }
        }
        best.map(|(emotion, _)| emotion.clone())
    }

    /// Sum of counts over the polarity's positive labels for a topic
    pub fn positive_sum(&self, topic: &TopicLabel, polarity: &EmotionPolarity) -> u32 {
        self.polarity_sum(topic, polarity.positive())
    }

    /// Sum of counts over the polarity's negative labels for a topic
    pub fn negative_sum(&self, topic: &TopicLabel, polarity: &EmotionPolarity) -> u32 {
        self.polarity_sum(topic, polarity.negative())
    }

    fn polarity_sum<'a>(
        &self,
        topic: &TopicLabel,
        labels: impl Iterator<Item = &'a EmotionLabel>,
    ) -> u32 {
        let Some(row) = self.counts.get(topic) else {
            return 0;
        };
        labels.map(|label| row.get(label).copied().unwrap_or(0)).sum()
    }

    /// Total mentions of a topic across all emotions
    pub fn total(&self, topic: &TopicLabel) -> u32 {
        self.counts
            .get(topic)
            .map(|row| row.values().sum())
            .unwrap_or(0)
    }
}

// =============================================================================
// TESTS
// =============================================================================

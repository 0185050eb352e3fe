//! Insight engine façade
//!
//! Wires extractor → aggregator → comparator → formatter into the one
//! exposed operation. Construction validates the taxonomy and annotator
//! (fatal startup errors); after that every invocation is a pure,
//! synchronous pass over the caller's entry snapshot. The engine holds no
//! per-call state, performs no I/O, and is safe to share across threads.

use std::sync::Arc;

use crate::core::{
    Annotator, EmotionTopicAggregator, InsightFormatter, TemporalComparator, TopicExtractor,
    Taxonomy,
};
use crate::types::{EmotionPolarity, EngineError, Insight, JournalEntry};

/// Temporal topic-emotion insight engine
pub struct InsightEngine {
    extractor: TopicExtractor,
    polarity: EmotionPolarity,
}

impl InsightEngine {
    /// Create an engine from its configuration values.
    ///
    /// An empty taxonomy is rejected here; an unusable annotator should have
    /// failed its own constructor before reaching this point.
    pub fn new(
        taxonomy: Taxonomy,
        polarity: EmotionPolarity,
        annotator: Arc<dyn Annotator>,
    ) -> Result<Self, EngineError> {
        if taxonomy.is_empty() {
            return Err(EngineError::EmptyTaxonomy);
        }
        Ok(Self {
            extractor: TopicExtractor::new(taxonomy, annotator),
            polarity,
        })
    }

    /// Compute at most `MAX_INSIGHTS` insights for a snapshot of entries
    /// sorted ascending by timestamp.
    ///
    /// Deterministic for a fixed snapshot: iteration order is first
    /// appearance and dominant-emotion ties break alphabetically. An
    /// annotator fault surfaces as `Err`, never as an empty list.
    pub fn compute_insights(
        &self,
        entries: &[JournalEntry],
    ) -> Result<Vec<Insight>, EngineError> {
        let aggregator = EmotionTopicAggregator::new(&self.extractor);
        let comparator = TemporalComparator::new(&aggregator, &self.polarity);
        let formatter = InsightFormatter::new(&aggregator);

        let trends = comparator.compare(entries)?;
        formatter.finalize(entries, trends)
    }

    /// Compute insights and render them to plain sentences
    pub fn compute_insight_texts(
        &self,
        entries: &[JournalEntry],
    ) -> Result<Vec<String>, EngineError> {
        Ok(self
            .compute_insights(entries)?
            .into_iter()
            .map(|insight| insight.text)
            .collect())
    }

    /// The topics one entry text mentions, in extraction order
    pub fn topics_in(&self, text: &str) -> Result<Vec<String>, EngineError> {
        Ok(self
            .extractor
            .extract(text)?
            .into_iter()
            .map(|topic| topic.as_str().to_string())
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================

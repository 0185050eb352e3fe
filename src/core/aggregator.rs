//! Emotion-topic aggregator: folds entries into a topic → emotion → count table
//!
//! Each entry contributes one count per extracted topic, nothing more. Counts
//! are order-independent; key iteration order is first appearance. Malformed
//! entries (missing text or emotion) are skipped so one bad row never aborts
//! the whole computation.

use crate::core::TopicExtractor;
use crate::types::{EngineError, JournalEntry, TopicEmotionTable};

/// Emotion-topic aggregator
pub struct EmotionTopicAggregator<'a> {
    extractor: &'a TopicExtractor,
}

impl<'a> EmotionTopicAggregator<'a> {
    pub fn new(extractor: &'a TopicExtractor) -> Self {
        Self { extractor }
    }

    /// Build a fresh table from a window of entries
    pub fn aggregate(&self, entries: &[JournalEntry]) -> Result<TopicEmotionTable, EngineError> {
        let mut table = TopicEmotionTable::new();

        for entry in entries {
            if !entry.is_well_formed() {
                continue;
            }
            for topic in self.extractor.extract(&entry.text)? {
                table.record(topic, entry.emotion.clone());
            }
        }

        Ok(table)
    }
}

// =============================================================================
// TESTS
// =============================================================================

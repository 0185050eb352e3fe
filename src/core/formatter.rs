//! Insight formatter: caps the trend insights or falls back to simple
//! correlations
//!
//! With at least one comparator insight the list is truncated to the first
//! `MAX_INSIGHTS` in topic order. With none, the whole entry sequence is
//! aggregated into one table and every topic mentioned strictly more than
//! `CORRELATION_MIN_MENTIONS` times yields a correlation sentence — first
//! five in table order, never sorted by magnitude.

use crate::core::EmotionTopicAggregator;
use crate::types::{EngineError, Insight, JournalEntry};
use crate::{CORRELATION_MIN_MENTIONS, MAX_INSIGHTS};

/// Insight formatter
pub struct InsightFormatter<'a> {
    aggregator: &'a EmotionTopicAggregator<'a>,
}

impl<'a> InsightFormatter<'a> {
    pub fn new(aggregator: &'a EmotionTopicAggregator<'a>) -> Self {
        Self { aggregator }
    }

    /// Produce the final capped list
    pub fn finalize(
        &self,
        entries: &[JournalEntry],
        mut trend_insights: Vec<Insight>,
    ) -> Result<Vec<Insight>, EngineError> {
        if !trend_insights.is_empty() {
            trend_insights.truncate(MAX_INSIGHTS);
            return Ok(trend_insights);
        }

        // Fallback: correlations over the whole sequence
        let table = self.aggregator.aggregate(entries)?;
        let mut correlations = Vec::new();

        for topic in table.topics() {
            if table.total(topic) > CORRELATION_MIN_MENTIONS {
                if let Some(dominant) = table.dominant_emotion(topic) {
                    correlations.push(Insight::simple_correlation(topic, &dominant));
                }
            }
            if correlations.len() == MAX_INSIGHTS {
                break;
            }
        }

        Ok(correlations)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use crate::core::{LexiconAnnotator, Taxonomy, TopicExtractor};
    use crate::types::{EmotionLabel, InsightKind, TopicLabel};

    fn extractor() -> TopicExtractor {
        TopicExtractor::new(
            Taxonomy::builtin(),
            Arc::new(LexiconAnnotator::new().unwrap()),
        )
    }

    fn entry(text: &str, emotion: &str, minute: u32) -> JournalEntry {
        JournalEntry::new(
            text,
            EmotionLabel::new(emotion),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, minute, 0).unwrap(),
        )
    }

    fn dummy_trend(n: usize) -> Vec<Insight> {
        (0..n)
            .map(|i| Insight::positive_progress(&TopicLabel::new(format!("Topic{i}"))))
            .collect()
    }

    #[test]
    fn test_trend_insights_pass_through() {
        let extractor = extractor();
        let aggregator = EmotionTopicAggregator::new(&extractor);
        let formatter = InsightFormatter::new(&aggregator);

        let result = formatter.finalize(&[], dummy_trend(3)).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|i| i.kind == InsightKind::PositiveProgress));
    }

    #[test]
    fn test_trend_insights_truncated_to_cap() {
        let extractor = extractor();
        let aggregator = EmotionTopicAggregator::new(&extractor);
        let formatter = InsightFormatter::new(&aggregator);

        let result = formatter.finalize(&[], dummy_trend(8)).unwrap();
        assert_eq!(result.len(), MAX_INSIGHTS);
        // First five in order, not a re-ranking
        assert_eq!(result[0].topic, Some(TopicLabel::new("Topic0")));
        assert_eq!(result[4].topic, Some(TopicLabel::new("Topic4")));
    }

    #[test]
    fn test_fallback_needs_more_than_minimum_mentions() {
        let extractor = extractor();
        let aggregator = EmotionTopicAggregator::new(&extractor);
        let formatter = InsightFormatter::new(&aggregator);

        // Two gym mentions: at the minimum, not above it
        let entries = vec![
            entry("Went to the gym", "joy", 0),
            entry("Went to the gym", "joy", 1),
        ];
        let result = formatter.finalize(&entries, Vec::new()).unwrap();
        assert!(result
            .iter()
            .all(|i| i.topic != Some(TopicLabel::new("Health & Body"))));

        // A third mention crosses the bar
        let entries = vec![
            entry("Went to the gym", "joy", 0),
            entry("Went to the gym", "joy", 1),
            entry("Went to the gym", "sadness", 2),
        ];
        let result = formatter.finalize(&entries, Vec::new()).unwrap();
        let correlation = result
            .iter()
            .find(|i| i.topic == Some(TopicLabel::new("Health & Body")))
            .expect("expected a correlation for Health & Body");
        assert_eq!(correlation.kind, InsightKind::SimpleCorrelation);
        assert!(correlation.text.contains("'joy'"));
    }

    #[test]
    fn test_fallback_capped_in_table_order() {
        let extractor = extractor();
        let aggregator = EmotionTopicAggregator::new(&extractor);
        let formatter = InsightFormatter::new(&aggregator);

        // Seven distinct nouns, three mentions each; only the first five
        // topics survive the cap even though later ones tie on magnitude
        let texts = [
            "the harbor", "the violin", "the garden", "the painting", "the stadium",
            "the museum", "the bakery",
        ];
        let mut entries = Vec::new();
        let mut minute = 0;
        for text in texts {
            for _ in 0..3 {
                entries.push(entry(text, "joy", minute));
                minute += 1;
            }
        }
        let result = formatter.finalize(&entries, Vec::new()).unwrap();

        assert_eq!(result.len(), MAX_INSIGHTS);
        assert_eq!(result[0].topic, Some(TopicLabel::new("Harbor")));
        assert_eq!(result[4].topic, Some(TopicLabel::new("Stadium")));
    }

    #[test]
    fn test_no_insights_when_nothing_repeats() {
        let extractor = extractor();
        let aggregator = EmotionTopicAggregator::new(&extractor);
        let formatter = InsightFormatter::new(&aggregator);

        let entries = vec![entry("the harbor", "joy", 0)];
        let result = formatter.finalize(&entries, Vec::new()).unwrap();
        assert!(result.is_empty());
    }
}

//! Temporal comparator: classifies per-topic emotional trends between the
//! earlier and later half of the journal
//!
//! Entries must arrive sorted ascending by timestamp; the comparator never
//! sorts. The split point is `count / 2`, so the later window takes the extra
//! entry on odd counts. Topics missing from either window are skipped — a
//! topic that appears in only one half never generates an insight.
//!
//! Classification is first-match-wins, at most one insight per topic:
//! 1. EmotionalShift  — dominant emotions differ (any direction)
//! 2. PositiveProgress — same positive dominant, positive mentions growing
//! 3. EmergingChallenge — same dominant, negative mentions growing and the
//!    later dominant is negative

use crate::core::EmotionTopicAggregator;
use crate::types::{EmotionPolarity, EngineError, Insight, JournalEntry, TopicLabel};
use crate::MIN_ENTRIES_FOR_TRENDS;

/// Temporal trend comparator
pub struct TemporalComparator<'a> {
    aggregator: &'a EmotionTopicAggregator<'a>,
    polarity: &'a EmotionPolarity,
}

impl<'a> TemporalComparator<'a> {
    pub fn new(aggregator: &'a EmotionTopicAggregator<'a>, polarity: &'a EmotionPolarity) -> Self {
        Self {
            aggregator,
            polarity,
        }
    }

    /// Classify trends across the two halves of the entry sequence.
    ///
    /// Below the entry threshold this returns exactly one placeholder
    /// insight and does no further work.
    pub fn compare(&self, entries: &[JournalEntry]) -> Result<Vec<Insight>, EngineError> {
        if entries.len() < MIN_ENTRIES_FOR_TRENDS {
            return Ok(vec![Insight::more_entries_needed()]);
        }

        let mid = entries.len() / 2;
        let earlier = self.aggregator.aggregate(&entries[..mid])?;
        let later = self.aggregator.aggregate(&entries[mid..])?;

        // Topic universe in first-appearance order: earlier window first,
        // then topics seen only later
        let universe: Vec<&TopicLabel> = earlier
            .topics()
            .chain(later.topics().filter(|t| !earlier.contains(t)))
            .collect();

        let mut insights = Vec::new();

        for topic in universe {
            // No insight for topics absent from either window
            if !earlier.contains(topic) || !later.contains(topic) {
                continue;
            }

            // Both windows are non-empty for this topic, so dominants exist
            let Some(dominant_earlier) = earlier.dominant_emotion(topic) else {
                continue;
            };
            let Some(dominant_later) = later.dominant_emotion(topic) else {
                continue;
            };

            if dominant_earlier != dominant_later {
                insights.push(Insight::emotional_shift(
                    topic,
                    &dominant_earlier,
                    &dominant_later,
                ));
                continue;
            }

            let earlier_positive = earlier.positive_sum(topic, self.polarity);
            let later_positive = later.positive_sum(topic, self.polarity);
            if later_positive > earlier_positive && self.polarity.is_positive(&dominant_earlier) {
                insights.push(Insight::positive_progress(topic));
                continue;
            }

            let earlier_negative = earlier.negative_sum(topic, self.polarity);
            let later_negative = later.negative_sum(topic, self.polarity);
            if later_negative > earlier_negative && self.polarity.is_negative(&dominant_later) {
                insights.push(Insight::emerging_challenge(topic, &dominant_later));
            }
        }

        Ok(insights)
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Insight model and sentence templates
//!
//! Insights are ephemeral: formatted sentences tagged with the rule that
//! produced them, never persisted. The sentences carry markdown emphasis
//! because the dashboard renders them as markdown.

use serde::{Deserialize, Serialize};

use crate::types::{EmotionLabel, TopicLabel};
use crate::MIN_ENTRIES_FOR_TRENDS;

/// Which rule produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Dominant emotion for a topic changed between windows
    EmotionalShift,
    /// Same positive dominant, positive mentions growing
    PositiveProgress,
    /// Same dominant, negative mentions growing and dominant is negative
    EmergingChallenge,
    /// Fallback: topic frequently co-occurs with one emotion
    SimpleCorrelation,
    /// Not enough entries for trend analysis yet
    MoreEntriesNeeded,
}

/// A formatted insight sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    /// The topic the insight is about; None for the placeholder
    pub topic: Option<TopicLabel>,
    /// The rendered sentence
    pub text: String,
}

impl Insight {
    /// Dominant emotion changed between the earlier and later window
    pub fn emotional_shift(
        topic: &TopicLabel,
        earlier: &EmotionLabel,
        later: &EmotionLabel,
    ) -> Self {
        Self {
            kind: InsightKind::EmotionalShift,
            topic: Some(topic.clone()),
            text: format!(
                "**Emotional Shift:** I've noticed that discussions about **'{topic}'** \
                 used to be linked with '{earlier}', but have recently shifted to being \
                 about **'{later}'**."
            ),
        }
    }

    /// Positive mentions of a positively-dominated topic are growing
    pub fn positive_progress(topic: &TopicLabel) -> Self {
        Self {
            kind: InsightKind::PositiveProgress,
            topic: Some(topic.clone()),
            text: format!(
                "**Positive Progress:** It's great to see that topics related to \
                 **'{topic}'** are appearing with **more positive emotions** recently."
            ),
        }
    }

    /// A topic is becoming a more frequent source of a negative emotion
    pub fn emerging_challenge(topic: &TopicLabel, later: &EmotionLabel) -> Self {
        Self {
            kind: InsightKind::EmergingChallenge,
            topic: Some(topic.clone()),
            text: format!(
                "**Emerging Challenge:** It seems that **'{topic}'** has recently \
                 become a more frequent source of **'{later}'**."
            ),
        }
    }

    /// Fallback correlation between a topic and its most common emotion
    pub fn simple_correlation(topic: &TopicLabel, emotion: &EmotionLabel) -> Self {
        Self {
            kind: InsightKind::SimpleCorrelation,
            topic: Some(topic.clone()),
            text: format!(
                "Discussions about **'{topic}'** often correlate with feelings of \
                 **'{emotion}'**."
            ),
        }
    }

    /// Placeholder returned when the journal is still too short
    pub fn more_entries_needed() -> Self {
        Self {
            kind: InsightKind::MoreEntriesNeeded,
            topic: None,
            text: format!(
                "Keep journaling to unlock deeper time-based insights! You need at \
                 least {MIN_ENTRIES_FOR_TRENDS} entries."
            ),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_sentence_names_both_emotions() {
        let insight = Insight::emotional_shift(
            &TopicLabel::new("Work & Career"),
            &EmotionLabel::new("joy"),
            &EmotionLabel::new("sadness"),
        );
        assert_eq!(insight.kind, InsightKind::EmotionalShift);
        assert!(insight.text.contains("'Work & Career'"));
        assert!(insight.text.contains("'joy'"));
        assert!(insight.text.contains("'sadness'"));
    }

    #[test]
    fn test_placeholder_names_the_threshold() {
        let insight = Insight::more_entries_needed();
        assert_eq!(insight.kind, InsightKind::MoreEntriesNeeded);
        assert!(insight.topic.is_none());
        assert!(insight.text.contains("at least 10 entries"));
    }

    #[test]
    fn test_challenge_sentence_names_later_emotion() {
        let insight = Insight::emerging_challenge(
            &TopicLabel::new("Sleep"),
            &EmotionLabel::new("anxiety"),
        );
        assert!(insight.text.contains("'Sleep'"));
        assert!(insight.text.contains("'anxiety'"));
    }
}

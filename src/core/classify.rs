//! Sentiment classifier seam
//!
//! The hosted sentiment model lives behind this narrow trait so the insight
//! engine and its tests never depend on network reachability. Failures use
//! `ServiceError`, a kind of their own, never folded into engine errors.
//!
//! `KeywordClassifier` is the shipped implementation: a lexicon scorer that
//! stands where the remote model would plug in.

use crate::types::{EmotionLabel, ServiceError};

/// Sentiment classification capability
pub trait SentimentClassifier: Send + Sync {
    /// Classify free text into one emotion label
    fn classify(&self, text: &str) -> Result<EmotionLabel, ServiceError>;
}

// =============================================================================
// KEYWORD CLASSIFIER
// =============================================================================

/// Marker words per emotion; most hits wins
static JOY_MARKERS: &[&str] = &[
    "love", "happy", "joy", "great", "grateful", "excited", "wonderful", "proud", "amazing",
    "fun", "peaceful", "hope", "glad", "laugh", "smile", "beautiful", "enjoyed", "celebrate",
];

static SADNESS_MARKERS: &[&str] = &[
    "sad", "cry", "cried", "miss", "lost", "lonely", "down", "hurt", "grief", "empty", "tears",
    "heartbroken", "gone", "goodbye",
];

static ANGER_MARKERS: &[&str] = &[
    "angry", "hate", "furious", "mad", "annoyed", "rage", "unfair", "frustrated", "shouted",
    "yelled", "ruined", "blame",
];

static ANXIETY_MARKERS: &[&str] = &[
    "anxious", "worried", "worry", "nervous", "stress", "stressed", "afraid", "fear", "scared",
    "panic", "overwhelmed", "dread", "tense", "restless",
];

/// Lexicon-based classifier
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn score(text: &str, markers: &[&str]) -> usize {
        markers.iter().filter(|marker| text.contains(*marker)).count()
    }
}

impl SentimentClassifier for KeywordClassifier {
    /// Most marker hits wins; ties break alphabetically on the label name,
    /// no hits at all falls back to neutral
    fn classify(&self, text: &str) -> Result<EmotionLabel, ServiceError> {
        let folded = text.to_lowercase();

        // Alphabetical label order doubles as the tie-break order
        let scores = [
            ("anger", Self::score(&folded, ANGER_MARKERS)),
            ("anxiety", Self::score(&folded, ANXIETY_MARKERS)),
            ("joy", Self::score(&folded, JOY_MARKERS)),
            ("sadness", Self::score(&folded, SADNESS_MARKERS)),
        ];

        // Strictly-greater keeps the first entry on ties, which is the
        // alphabetically lowest label
        let mut best: Option<(&str, usize)> = None;
        for (label, count) in scores {
            let better = match best {
                None => count > 0,
                Some((_, best_count)) => count > best_count,
            };
            if better {
                best = Some((label, count));
            }
        }

        match best {
            Some((label, _)) => Ok(EmotionLabel::new(label)),
            None => Ok(EmotionLabel::new("neutral")),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

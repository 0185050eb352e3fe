//! Wellness-coach suggestion prompt and generator seam
//!
//! The prompt builder frames the most recent entries for the hosted
//! text-generation model. The model itself sits behind `SuggestionGenerator`
//! with its own timeout configuration and `ServiceError` kind, so nothing in
//! the engine or its tests touches the network.

use std::time::Duration;

use sha2::{Digest, Sha256};

use crate::types::{JournalEntry, ServiceError};
use crate::{SUGGESTION_HISTORY_LEN, SUGGESTION_MIN_HISTORY};

/// Fallback shown while the journal is too short for a tailored suggestion
pub const KEEP_JOURNALING: &str = "Keep journaling...";

/// Default deadline for generator implementations that call out
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(20);

/// Build the coach prompt from recent entries, newest first.
///
/// Returns `None` when fewer than `SUGGESTION_MIN_HISTORY` entries exist;
/// callers answer with `KEEP_JOURNALING` in that case. At most
/// `SUGGESTION_HISTORY_LEN` entries feed the prompt.
pub fn build_coach_prompt(recent: &[JournalEntry]) -> Option<String> {
    if recent.len() < SUGGESTION_MIN_HISTORY {
        return None;
    }

    let mut history = String::new();
    for entry in recent.iter().take(SUGGESTION_HISTORY_LEN) {
        history.push_str(&format!(
            "- Emotion: {}, Entry: \"{}\"\n",
            entry.emotion, entry.text
        ));
    }

    Some(format!(
        "### Instruction:\nYou are an empathetic wellness coach. Read the journal \
         history below and offer one short, gentle, actionable suggestion for \
         tomorrow.\n\n### Input:\n{history}\n### Response:\n"
    ))
}

/// Text-generation capability behind the suggestion endpoint
pub trait SuggestionGenerator: Send + Sync {
    /// Generate a suggestion for a finished prompt
    fn generate(&self, prompt: &str) -> Result<String, ServiceError>;

    /// Deadline this generator applies to outbound calls
    fn timeout(&self) -> Duration {
        DEFAULT_GENERATION_TIMEOUT
    }
}

/// Deterministic local generator: picks a canned suggestion by prompt hash.
///
/// Stands where the hosted model would plug in, the same way a mock signer
/// stands in for real key material.
#[derive(Debug, Default)]
pub struct TemplateGenerator;

static SUGGESTIONS: &[&str] = &[
    "Take a ten-minute walk before you start your day, and notice three things around you.",
    "Write down one small thing that went well today, however minor it felt.",
    "Reach out to someone you trust and share how your week has really been.",
    "Set a hard stop for work tonight and spend the last hour on something unhurried.",
    "Before bed, note one worry you can set aside until tomorrow morning.",
];

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SuggestionGenerator for TemplateGenerator {
    fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let digest = Sha256::digest(prompt.as_bytes());
        let index = digest[0] as usize % SUGGESTIONS.len();
        Ok(SUGGESTIONS[index].to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};

    use crate::types::EmotionLabel;

    fn entry(text: &str, emotion: &str, minute: u32) -> JournalEntry {
        JournalEntry::new(
            text,
            EmotionLabel::new(emotion),
            Utc.with_ymd_and_hms(2024, 3, 1, 7, minute, 0).unwrap(),
        )
    }

    #[test]
    fn test_too_little_history_gives_none() {
        let recent = vec![entry("Short day", "joy", 0), entry("Quiet day", "joy", 1)];
        assert!(build_coach_prompt(&recent).is_none());
    }

    #[test]
    fn test_prompt_frames_each_entry() {
        let recent = vec![
            entry("Slept badly", "anxiety", 0),
            entry("Long meeting", "sadness", 1),
            entry("Good dinner", "joy", 2),
        ];
        let prompt = build_coach_prompt(&recent).unwrap();

        assert!(prompt.starts_with("### Instruction:"));
        assert!(prompt.contains("- Emotion: anxiety, Entry: \"Slept badly\""));
        assert!(prompt.contains("- Emotion: joy, Entry: \"Good dinner\""));
        assert!(prompt.ends_with("### Response:\n"));
    }

    #[test]
    fn test_prompt_caps_history_length() {
        let recent: Vec<JournalEntry> = (0..8)
            .map(|i| entry(&format!("Entry number {i}"), "joy", i))
            .collect();
        let prompt = build_coach_prompt(&recent).unwrap();

        assert!(prompt.contains("Entry number 4"));
        assert!(!prompt.contains("Entry number 5"));
    }

    #[test]
    fn test_template_generator_is_deterministic() {
        let generator = TemplateGenerator::new();
        let a = generator.generate("prompt body").unwrap();
        let b = generator.generate("prompt body").unwrap();
        assert_eq!(a, b);
        assert!(SUGGESTIONS.contains(&a.as_str()));
    }
}

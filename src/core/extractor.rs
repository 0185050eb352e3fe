//! Topic extractor: derives the set of topics mentioned in one entry
//!
//! Two passes over the case-folded text:
//! 1. keyword pass — a category fires when any of its keywords occurs as a
//!    plain substring. Matching is deliberately not word-bounded; short
//!    keywords may over-match and that behavior is part of the contract.
//! 2. linguistic pass — common-noun tokens that are not stopwords and are
//!    longer than `MIN_TOPIC_TOKEN_LEN` join as capitalized topics; PERSON
//!    and ORGANIZATION tokens join unconditionally, with no noun or stopword
//!    gate.
//!
//! The result is the insertion-ordered union, keyword pass first.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::core::{Annotator, Taxonomy};
use crate::types::{EngineError, PartOfSpeech, TopicLabel};
use crate::MIN_TOPIC_TOKEN_LEN;

/// Topic extractor
pub struct TopicExtractor {
    taxonomy: Taxonomy,
    annotator: Arc<dyn Annotator>,
}

impl TopicExtractor {
    pub fn new(taxonomy: Taxonomy, annotator: Arc<dyn Annotator>) -> Self {
        Self {
            taxonomy,
            annotator,
        }
    }

    /// Extract every topic mentioned in the text; unbounded size
    pub fn extract(&self, text: &str) -> Result<IndexSet<TopicLabel>, EngineError> {
        let folded = text.to_lowercase();
        let mut topics = IndexSet::new();

        // Keyword pass: substring match, not word-bounded
        for (category, keywords) in self.taxonomy.categories() {
            if keywords.iter().any(|keyword| folded.contains(keyword.as_str())) {
                topics.insert(TopicLabel::new(category));
            }
        }

        // Linguistic pass over the folded text
        for annotation in self.annotator.annotate(&folded)? {
            let is_topic_noun = annotation.pos == PartOfSpeech::Noun
                && !annotation.is_stopword
                && annotation.surface.chars().count() > MIN_TOPIC_TOKEN_LEN;

            // Entity check is independent of the noun/stopword filter
            if is_topic_noun || annotation.entity.is_some() {
                topics.insert(TopicLabel::new(capitalize(&annotation.surface)));
            }
        }

        Ok(topics)
    }
}

/// First letter uppercase, rest lowercase
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Token annotations produced by the text annotator
//!
//! One row per token: surface form, part-of-speech, stopword flag, and an
//! optional named-entity tag. The topic extractor only needs to tell common
//! nouns, stopwords, and PERSON/ORGANIZATION entities apart.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// Common noun (the default for unrecognized content words)
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Other,
}

/// Named-entity categories the extractor cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    Person,
    Organization,
}

/// One annotated token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Surface form as it appears in the case-folded text
    pub surface: String,
    /// Part-of-speech tag
    pub pos: PartOfSpeech,
    /// Whether the token is a stopword
    pub is_stopword: bool,
    /// Named-entity tag, if any
    pub entity: Option<EntityType>,
}

impl Annotation {
    pub fn new(
        surface: impl Into<String>,
        pos: PartOfSpeech,
        is_stopword: bool,
        entity: Option<EntityType>,
    ) -> Self {
        Self {
            surface: surface.into(),
            pos,
            is_stopword,
            entity,
        }
    }
}

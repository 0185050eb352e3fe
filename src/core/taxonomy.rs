//! Topic taxonomy: category name → trigger keywords
//!
//! Static configuration loaded once at startup and injected into the engine,
//! so tests can substitute their own categories. Category order is insertion
//! order and carries through to topic iteration order.

use indexmap::IndexMap;

use crate::types::EngineError;

/// Keyword taxonomy
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: IndexMap<String, Vec<String>>,
}

impl Taxonomy {
    /// Create a taxonomy from category → keyword list.
    ///
    /// An empty taxonomy (or a category with no keywords) is a fatal
    /// configuration error, caught at startup rather than per call.
    pub fn new(categories: IndexMap<String, Vec<String>>) -> Result<Self, EngineError> {
        if categories.is_empty() || categories.values().any(|keywords| keywords.is_empty()) {
            return Err(EngineError::EmptyTaxonomy);
        }
        Ok(Self { categories })
    }

    /// The built-in journaling categories
    pub fn builtin() -> Self {
        let mut categories = IndexMap::new();
        categories.insert(
            "Work & Career".to_string(),
            to_keywords(&[
                "job", "work", "boss", "colleague", "project", "deadline", "career", "office",
                "meeting",
            ]),
        );
        categories.insert(
            "Relationships".to_string(),
            to_keywords(&[
                "friend", "partner", "family", "mom", "dad", "sister", "brother", "relationship",
                "date",
            ]),
        );
        categories.insert(
            "Health & Body".to_string(),
            to_keywords(&[
                "sleep", "tired", "health", "exercise", "gym", "run", "food", "eat", "sick",
            ]),
        );
        categories.insert(
            "Personal Growth".to_string(),
            to_keywords(&["learn", "read", "book", "goal", "habit", "future", "myself", "grow"]),
        );
        Self { categories }
    }

    /// Categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn to_keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// =============================================================================
// TESTS
// =============================================================================

//! Lexicon annotator: tokenizes text and tags part-of-speech, stopwords,
//! and PERSON/ORGANIZATION entities
//!
//! Stands where the full NLP pipeline sits in production. Tagging is
//! lexicon-driven: function words come from fixed lists, unknown content
//! words default to common noun. Annotation runs over the case-folded text,
//! so the entity lexicons are lowercase too.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Annotation, EngineError, EntityType, PartOfSpeech};

/// Text annotator capability.
///
/// An unavailable annotator is a startup-time configuration failure; a fault
/// during `annotate` propagates as `EngineError::Annotation`.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Vec<Annotation>, EngineError>;
}

// =============================================================================
// LEXICONS
// =============================================================================

/// Stopwords, including common contractions (tokenizer keeps them whole)
static STOPWORDS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "whose", "this", "that", "these", "those", "am", "is", "are", "was",
    "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ought", "a",
    "an", "the", "and", "but", "if", "or", "nor", "because", "as", "until", "while", "of", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "not",
    "only", "own", "same", "so", "than", "too", "very", "just", "now", "also", "really", "quite",
    "rather", "else", "ever", "never", "always", "i'm", "i've", "i'll", "i'd", "it's", "that's",
    "there's", "here's", "he's", "she's", "we're", "they're", "you're", "we've", "they've",
    "you've", "we'll", "they'll", "you'll", "let's", "don't", "doesn't", "didn't", "won't",
    "wouldn't", "can't", "couldn't", "shouldn't", "isn't", "wasn't", "aren't", "weren't",
    "haven't", "hasn't", "hadn't", "mustn't",
];

static PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "who", "whom", "whose",
    "what", "which", "anyone", "everyone", "someone", "nobody", "anybody", "everybody",
    "anything", "everything", "something", "nothing",
];

static DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "no", "every", "each",
    "either", "neither", "another", "such", "both", "all", "few", "many", "much", "several",
    "most", "more", "less",
];

static PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "out",
    "off", "over", "under", "near", "across", "around", "behind", "beyond", "without", "within",
    "despite", "toward", "towards", "upon", "onto", "per", "via",
];

static CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "when", "since", "unless", "until", "whereas", "whether", "than", "as",
];

/// Common verbs, auxiliaries included; journals lean on a small set
static VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must", "go", "goes", "went", "gone", "going", "get", "gets", "got", "getting",
    "make", "makes", "made", "making", "know", "knows", "knew", "known", "think", "thinks",
    "thought", "take", "takes", "took", "taken", "see", "sees", "saw", "seen", "come", "comes",
    "came", "coming", "want", "wants", "wanted", "look", "looks", "looked", "looking", "use",
    "used", "find", "finds", "found", "give", "gives", "gave", "given", "tell", "tells", "told",
    "ask", "asks", "asked", "feel", "feels", "felt", "seem", "seems", "seemed", "leave", "left",
    "keep", "kept", "let", "begin", "began", "begun", "start", "started", "starting", "stop",
    "stopped", "help", "helped", "talk", "talked", "turn", "turned", "show", "showed", "hear",
    "heard", "play", "played", "move", "moved", "like", "liked", "love", "loves", "loved",
    "hate", "hates", "hated", "believe", "believed", "bring", "brought", "happen", "happened",
    "write", "wrote", "written", "sit", "sat", "stand", "stood", "pay", "paid", "meet", "met",
    "say", "says", "said", "try", "tried", "trying", "call", "called", "cried", "ate", "eaten",
    "slept", "woke", "wake", "ran", "spend", "spent", "stay", "stayed", "miss", "missed",
    "wish", "wished", "hope", "hoped", "need", "needs", "needed",
];

static ADJECTIVES: &[&str] = &[
    "happy", "sad", "angry", "anxious", "tired", "sick", "good", "bad", "great", "terrible",
    "awful", "nice", "beautiful", "hard", "easy", "busy", "stressful", "stressed", "proud",
    "grateful", "lonely", "exhausted", "nervous", "calm", "peaceful", "wonderful", "amazing",
    "difficult", "important", "better", "worse", "best", "worst", "new", "old", "big", "small",
    "long", "short", "early", "late", "scared", "afraid", "overwhelmed", "frustrated",
    "excited", "upset", "mad", "furious", "annoyed", "hopeful", "hopeless", "glad", "fine",
    "okay", "alone", "quiet", "heavy", "light", "warm", "cold",
];

static ADVERBS: &[&str] = &[
    "very", "too", "really", "quite", "always", "never", "often", "sometimes", "soon", "today",
    "yesterday", "tomorrow", "again", "still", "already", "maybe", "perhaps", "almost",
    "together", "away", "back", "now", "then", "here", "there", "well", "enough",
];

/// Lowercase given names for PERSON tagging
static GIVEN_NAMES: &[&str] = &[
    "anna", "sarah", "john", "mike", "michael", "emma", "james", "david", "laura", "lisa",
    "tom", "peter", "mary", "kate", "alex", "sam", "ben", "jane", "mark", "paul", "amy",
    "rachel", "jake", "chris", "maria", "daniel", "sophie", "ryan", "olivia", "jack", "emily",
    "luke", "hannah", "noah", "grace", "maya", "leo", "nina", "oscar", "ruby", "julia", "adam",
    "eva", "simon", "clara", "victor", "diana", "felix", "iris", "oliver", "ella",
];

/// Lowercase organization names and corporate suffix tokens
static ORGANIZATIONS: &[&str] = &[
    "google", "microsoft", "amazon", "facebook", "netflix", "spotify", "twitter", "apple",
    "ibm", "intel", "tesla", "uber", "airbnb", "slack", "zoom", "youtube", "instagram",
    "linkedin", "starbucks", "walmart", "nike", "adidas", "samsung", "sony", "oracle",
    "salesforce", "reddit", "github", "inc", "corp", "ltd", "llc", "gmbh",
];

lazy_static! {
    /// Word tokens, apostrophes kept inside ("don't" stays one token)
    static ref RE_TOKEN: Regex = Regex::new(r"[a-z]+(?:'[a-z]+)*").unwrap();

    static ref STOPWORD_SET: HashSet<&'static str> = STOPWORDS.iter().copied().collect();
    static ref PRONOUN_SET: HashSet<&'static str> = PRONOUNS.iter().copied().collect();
    static ref DETERMINER_SET: HashSet<&'static str> = DETERMINERS.iter().copied().collect();
    static ref PREPOSITION_SET: HashSet<&'static str> = PREPOSITIONS.iter().copied().collect();
    static ref CONJUNCTION_SET: HashSet<&'static str> = CONJUNCTIONS.iter().copied().collect();
    static ref VERB_SET: HashSet<&'static str> = VERBS.iter().copied().collect();
    static ref ADJECTIVE_SET: HashSet<&'static str> = ADJECTIVES.iter().copied().collect();
    static ref ADVERB_SET: HashSet<&'static str> = ADVERBS.iter().copied().collect();
    static ref GIVEN_NAME_SET: HashSet<&'static str> = GIVEN_NAMES.iter().copied().collect();
    static ref ORGANIZATION_SET: HashSet<&'static str> = ORGANIZATIONS.iter().copied().collect();
}

// =============================================================================
// ANNOTATOR
// =============================================================================

/// Lexicon-driven annotator
#[derive(Debug, Default)]
pub struct LexiconAnnotator;

impl LexiconAnnotator {
    /// Create the annotator, validating its lexicons.
    ///
    /// An empty lexicon means the annotator cannot run; the engine treats
    /// this as fatal at startup, not per call.
    pub fn new() -> Result<Self, EngineError> {
        let lexicons: &[(&'static str, &[&str])] = &[
            ("stopwords", STOPWORDS),
            ("pronouns", PRONOUNS),
            ("determiners", DETERMINERS),
            ("prepositions", PREPOSITIONS),
            ("conjunctions", CONJUNCTIONS),
            ("verbs", VERBS),
            ("adjectives", ADJECTIVES),
            ("adverbs", ADVERBS),
            ("given names", GIVEN_NAMES),
            ("organizations", ORGANIZATIONS),
        ];
        for (name, words) in lexicons {
            if words.is_empty() {
                return Err(EngineError::EmptyLexicon(name));
            }
        }
        Ok(Self)
    }

    fn tag_pos(token: &str) -> PartOfSpeech {
        if PRONOUN_SET.contains(token) {
            PartOfSpeech::Pronoun
        } else if DETERMINER_SET.contains(token) {
            PartOfSpeech::Determiner
        } else if PREPOSITION_SET.contains(token) {
            PartOfSpeech::Preposition
        } else if CONJUNCTION_SET.contains(token) {
            PartOfSpeech::Conjunction
        } else if VERB_SET.contains(token) {
            PartOfSpeech::Verb
        } else if ADJECTIVE_SET.contains(token) {
            PartOfSpeech::Adjective
        } else if ADVERB_SET.contains(token) || (token.len() > 4 && token.ends_with("ly")) {
            PartOfSpeech::Adverb
        } else if token.chars().count() == 1 {
            PartOfSpeech::Other
        } else {
            // Unknown content word: treat as common noun
            PartOfSpeech::Noun
        }
    }

    fn tag_entity(token: &str) -> Option<EntityType> {
        if GIVEN_NAME_SET.contains(token) {
            Some(EntityType::Person)
        } else if ORGANIZATION_SET.contains(token) {
            Some(EntityType::Organization)
        } else {
            None
        }
    }
}

impl Annotator for LexiconAnnotator {
    /// Annotate the case-folded text, one row per word token
    fn annotate(&self, text: &str) -> Result<Vec<Annotation>, EngineError> {
        let folded = text.to_lowercase();

        let annotations = RE_TOKEN
            .find_iter(&folded)
            .map(|m| {
                let token = m.as_str();
                Annotation::new(
                    token,
                    Self::tag_pos(token),
                    STOPWORD_SET.contains(token),
                    Self::tag_entity(token),
                )
            })
            .collect();

        Ok(annotations)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn annotator() -> LexiconAnnotator {
        LexiconAnnotator::new().unwrap()
    }

    fn find<'a>(annotations: &'a [Annotation], surface: &str) -> &'a Annotation {
        annotations
            .iter()
            .find(|a| a.surface == surface)
            .unwrap_or_else(|| panic!("token '{}' not found", surface))
    }

    #[test]
    fn test_empty_text() {
        let annotations = annotator().annotate("").unwrap();
        assert!(annotations.is_empty());
    }

    #[test]
    fn test_unknown_content_word_is_noun() {
        let annotations = annotator().annotate("The deadline looms").unwrap();
        assert_eq!(find(&annotations, "deadline").pos, PartOfSpeech::Noun);
        assert!(!find(&annotations, "deadline").is_stopword);
    }

    #[test]
    fn test_stopwords_flagged() {
        let annotations = annotator().annotate("I was with them").unwrap();
        assert!(find(&annotations, "i").is_stopword);
        assert!(find(&annotations, "was").is_stopword);
        assert!(find(&annotations, "with").is_stopword);
        assert!(find(&annotations, "them").is_stopword);
    }

    #[test]
    fn test_case_folding() {
        let annotations = annotator().annotate("MY BOSS Shouted").unwrap();
        assert_eq!(find(&annotations, "boss").pos, PartOfSpeech::Noun);
        assert!(find(&annotations, "my").is_stopword);
    }

    #[test]
    fn test_contractions_stay_whole_and_stop() {
        let annotations = annotator().annotate("I don't know").unwrap();
        assert!(find(&annotations, "don't").is_stopword);
    }

    #[test]
    fn test_verb_and_adjective_tagging() {
        let annotations = annotator().annotate("I love peaceful mornings").unwrap();
        assert_eq!(find(&annotations, "love").pos, PartOfSpeech::Verb);
        assert_eq!(find(&annotations, "peaceful").pos, PartOfSpeech::Adjective);
        assert_eq!(find(&annotations, "mornings").pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_ly_suffix_is_adverb() {
        let annotations = annotator().annotate("slowly walking home").unwrap();
        assert_eq!(find(&annotations, "slowly").pos, PartOfSpeech::Adverb);
    }

    #[test]
    fn test_person_entity() {
        let annotations = annotator().annotate("Lunch with Sarah today").unwrap();
        assert_eq!(find(&annotations, "sarah").entity, Some(EntityType::Person));
    }

    #[test]
    fn test_organization_entity() {
        let annotations = annotator().annotate("Interview at Google next week").unwrap();
        assert_eq!(
            find(&annotations, "google").entity,
            Some(EntityType::Organization)
        );
    }

    #[test]
    fn test_entity_tagging_survives_case_folding() {
        let annotations = annotator().annotate("SARAH called").unwrap();
        assert_eq!(find(&annotations, "sarah").entity, Some(EntityType::Person));
    }

    #[test]
    fn test_determinism() {
        let a = annotator();
        let text = "Sarah and I worked late at Google on the project deadline";
        assert_eq!(a.annotate(text).unwrap(), a.annotate(text).unwrap());
    }
}

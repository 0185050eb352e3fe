//! Error kinds
//!
//! `EngineError` covers the insight engine itself: the construction-time
//! variants are fatal startup failures, `Annotation` is the one mid-call
//! fault and is never conflated with an empty insight list. `ServiceError`
//! belongs to the external model seams (classifier, suggestion generator) so
//! their failures stay distinguishable from engine faults.

/// Insight engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The taxonomy has no categories; the engine cannot start
    EmptyTaxonomy,
    /// An annotator lexicon is missing or empty; the engine cannot start
    EmptyLexicon(&'static str),
    /// The annotator failed while processing an entry
    Annotation(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaxonomy => write!(f, "taxonomy has no categories"),
            Self::EmptyLexicon(name) => write!(f, "annotator lexicon '{}' is empty", name),
            Self::Annotation(detail) => write!(f, "annotation failed: {}", detail),
        }
    }
}

impl std::error::Error for EngineError {}

/// External model seam errors (sentiment classifier, suggestion generator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The call exceeded its configured deadline
    Timeout,
    /// The service could not be reached
    Unavailable,
    /// The service answered with something unusable
    Malformed(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout => write!(f, "service call timed out"),
            Self::Unavailable => write!(f, "service unavailable"),
            Self::Malformed(detail) => write!(f, "malformed service response: {}", detail),
        }
    }
}

impl std::error::Error for ServiceError {}

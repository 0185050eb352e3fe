//! Core modules for Tidemark

pub mod aggregator;
pub mod annotator;
pub mod api;
pub mod classify;
pub mod comparator;
pub mod engine;
pub mod extractor;
pub mod formatter;
pub mod streak;
pub mod suggestion;
pub mod taxonomy;

pub use aggregator::EmotionTopicAggregator;
pub use annotator::{Annotator, LexiconAnnotator};
pub use api::{create_router, create_router_with, run_server};
pub use classify::{KeywordClassifier, SentimentClassifier};
pub use comparator::TemporalComparator;
pub use engine::InsightEngine;
pub use extractor::TopicExtractor;
pub use formatter::InsightFormatter;
pub use streak::{update_streak, UserStats};
pub use suggestion::{build_coach_prompt, SuggestionGenerator, TemplateGenerator};
pub use taxonomy::Taxonomy;

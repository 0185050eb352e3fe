//! Core types for Tidemark

mod annotation;
mod entry;
mod error;
mod insight;
mod topic;

pub use annotation::{Annotation, EntityType, PartOfSpeech};
pub use entry::{EmotionLabel, EmotionPolarity, JournalEntry};
pub use error::{EngineError, ServiceError};
pub use insight::{Insight, InsightKind};
pub use topic::{TopicEmotionTable, TopicLabel};

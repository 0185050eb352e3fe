//! Tidemark: journaling backend with a temporal topic-emotion insight engine
//!
//! The engine takes chronologically ordered journal entries (text + emotion
//! label), infers discussion topics, and reports how the dominant emotion per
//! topic shifts between the earlier and later half of the journal.

pub mod core;
pub mod types;

// =============================================================================
// INSIGHT THRESHOLDS
// =============================================================================

/// Minimum entry count before trend analysis runs
/// Below this the engine returns a single "keep journaling" placeholder
pub const MIN_ENTRIES_FOR_TRENDS: usize = 10;

/// Maximum insights returned per invocation
pub const MAX_INSIGHTS: usize = 5;

/// A topic needs strictly more total mentions than this to appear in the
/// correlation fallback
pub const CORRELATION_MIN_MENTIONS: u32 = 2;

/// Extracted noun tokens must be strictly longer than this to become topics
pub const MIN_TOPIC_TOKEN_LEN: usize = 3;

// =============================================================================
// SUGGESTION THRESHOLDS
// =============================================================================

/// How many recent entries feed the coach prompt
pub const SUGGESTION_HISTORY_LEN: usize = 5;

/// Minimum recent entries before a personalized suggestion is attempted
pub const SUGGESTION_MIN_HISTORY: usize = 3;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

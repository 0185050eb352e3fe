//! Daily journaling streak
//!
//! One entry per UTC day keeps the streak alive: a second entry the same day
//! changes nothing, an entry the day after extends it, any gap resets to 1.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-user journaling stats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Consecutive days with at least one entry
    pub streak: u32,
    /// UTC day of the most recent entry
    pub last_entry_date: Option<NaiveDate>,
}

/// Fold one new entry at `now` into the stats
pub fn update_streak(stats: &UserStats, now: DateTime<Utc>) -> UserStats {
    let today = now.date_naive();

    let streak = match stats.last_entry_date {
        Some(last) if last == today => return stats.clone(),
        Some(last) if last.checked_add_days(Days::new(1)) == Some(today) => stats.streak + 1,
        _ => 1,
    };

    UserStats {
        streak,
        last_entry_date: Some(today),
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! moodlog: a journal whose entries are tagged with a mood on save.
//!
//! This is the facade crate that wires together the lower-level components:
//! - [`mood_core`]: mood labels, classification results, entries
//! - [`mood_lexicon`]: keyword and negation tables
//! - [`mood_classifier`]: text to mood
//! - [`mood_analytics`]: counts, scores and weekly trends
//!
//! # Quick Start
//!
//! ```
//! use chrono::Utc;
//! use moodlog::{Journal, MoodLabel};
//!
//! let mut journal = Journal::new();
//! let entry = journal.add("bohot khush aaj", Utc::now()).unwrap();
//! assert_eq!(entry.mood, MoodLabel::Happy);
//! ```

mod error;
mod journal;

pub use error::{Error, Result};
pub use journal::Journal;

// Re-export types that consumers (like the CLI) need.
pub use mood_analytics::{
    CONSISTENCY_GOAL_DAYS, DEFAULT_WINDOW_DAYS, DaySummary, MAX_WINDOW_DAYS, MoodCounts, Summary,
    WeeklyReport, average_score, consistency_score, mood_score,
};
pub use mood_classifier::{KeywordMatch, classify, matched_keyword};
pub use mood_core::{Mood, MoodEntry, MoodLabel, ParseMoodError};
pub use mood_lexicon::{KEYWORD_TABLE, NEGATIONS};

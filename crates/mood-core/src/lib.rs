//! Core mood types shared by the classifier, the analytics and the journal.
//!
//! This crate defines the closed set of mood labels ([`MoodLabel`]), the
//! classification result handed to callers ([`Mood`]), and the persisted
//! journal record ([`MoodEntry`]). It contains no matching logic.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mood label. Closed set; `Neutral` doubles as the fallback.
///
/// Declaration order is significant: it is the order the keyword table is
/// scanned in and the tie-break order for aggregate statistics.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Angry,
    Stressed,
    #[default]
    Neutral,
}

impl MoodLabel {
    /// Every label, in declaration order.
    pub const ALL: [MoodLabel; 5] = [
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Angry,
        MoodLabel::Stressed,
        MoodLabel::Neutral,
    ];

    /// Lowercase name, as stored in journal files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Stressed => "stressed",
            Self::Neutral => "neutral",
        }
    }

    /// Display glyph. Fixed 1:1 with the label.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Stressed => "😫",
            Self::Neutral => "😐",
        }
    }

    /// The label emitted when a keyword of this mood is negated.
    ///
    /// Happy and sad swap; angry and stressed collapse to neutral. Neutral is
    /// never the mood of a keyword, so it maps to itself.
    pub fn negated(self) -> MoodLabel {
        match self {
            Self::Happy => Self::Sad,
            Self::Sad => Self::Happy,
            Self::Angry | Self::Stressed | Self::Neutral => Self::Neutral,
        }
    }

    /// Position in [`MoodLabel::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown mood name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown mood `{0}` (expected one of happy, sad, angry, stressed, neutral)")]
pub struct ParseMoodError(pub String);

impl FromStr for MoodLabel {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MoodLabel::ALL
            .into_iter()
            .find(|label| label.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseMoodError(s.to_string()))
    }
}

/// Result of classifying a piece of text: a label and its glyph.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Serialize)]
pub struct Mood {
    pub mood: MoodLabel,
    pub emoji: &'static str,
}

impl Mood {
    /// The fallback result for empty or unmatched text.
    pub const NEUTRAL: Mood = Mood {
        mood: MoodLabel::Neutral,
        emoji: "😐",
    };
}

impl From<MoodLabel> for Mood {
    fn from(mood: MoodLabel) -> Self {
        Mood {
            mood,
            emoji: mood.emoji(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mood, self.emoji)
    }
}

/// A persisted journal entry.
///
/// `mood` and `emoji` are produced by the classifier when the entry is saved
/// and stored verbatim; readers never re-classify `text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub mood: MoodLabel,
    #[serde(default)]
    pub emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MoodEntry {
    /// Create an entry from already-classified text.
    pub fn new(id: u64, text: impl Into<String>, mood: Mood, created_at: DateTime<Utc>) -> Self {
        MoodEntry {
            id,
            text: text.into(),
            mood: mood.mood,
            emoji: mood.emoji.to_string(),
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    /// Replace text and classification, stamping `updated_at`.
    pub fn revise(&mut self, text: impl Into<String>, mood: Mood, at: DateTime<Utc>) {
        self.text = text.into();
        self.mood = mood.mood;
        self.emoji = mood.emoji.to_string();
        self.updated_at = Some(at);
    }
}

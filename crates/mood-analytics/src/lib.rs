//! Mood analytics over stored journal entries.
//!
//! Everything here reads the persisted `mood` field of each entry; text is
//! never re-classified. The numeric score is a fixed mapping used only for
//! averages and trends:
//!
//! | mood     | score |
//! |----------|-------|
//! | happy    | 4     |
//! | neutral  | 3     |
//! | sad      | 2     |
//! | angry    | 1     |
//! | stressed | 0     |

use chrono::{Days, NaiveDate};
use mood_core::{MoodEntry, MoodLabel};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Default trend window, in calendar days ending today.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest trend window, in days. Longer requests are cut to this.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Entries per month that count as a fully consistent journaling habit.
pub const CONSISTENCY_GOAL_DAYS: u32 = 30;

/// Numeric score of a mood, for averages and trend lines.
pub fn mood_score(label: MoodLabel) -> u8 {
    match label {
        MoodLabel::Happy => 4,
        MoodLabel::Neutral => 3,
        MoodLabel::Sad => 2,
        MoodLabel::Angry => 1,
        MoodLabel::Stressed => 0,
    }
}

/// Mean score of a set of moods. `None` when the set is empty.
pub fn average_score(moods: impl IntoIterator<Item = MoodLabel>) -> Option<f64> {
    let (sum, n) = moods
        .into_iter()
        .fold((0u64, 0u64), |(sum, n), m| (sum + u64::from(mood_score(m)), n + 1));
    (n > 0).then(|| sum as f64 / n as f64)
}

/// Journaling consistency as a percentage of [`CONSISTENCY_GOAL_DAYS`].
///
/// Not capped: more than one entry a day yields more than 100.
pub fn consistency_score(total_entries: usize) -> u32 {
    (total_entries as f64 / f64::from(CONSISTENCY_GOAL_DAYS) * 100.0).round() as u32
}

/// Number of entries per mood.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoodCounts([usize; 5]);

impl MoodCounts {
    pub fn from_moods(moods: impl IntoIterator<Item = MoodLabel>) -> Self {
        let mut counts = MoodCounts::default();
        for mood in moods {
            counts.add(mood);
        }
        counts
    }

    pub fn add(&mut self, mood: MoodLabel) {
        self.0[mood.index()] += 1;
    }

    pub fn get(&self, mood: MoodLabel) -> usize {
        self.0[mood.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(mood, count)` pairs in declaration order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (MoodLabel, usize)> + '_ {
        MoodLabel::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    /// The most frequent mood.
    ///
    /// Ties go to the label declared first; no entries at all gives neutral.
    /// The original dashboard broke ties toward the mood seen later in entry
    /// order instead.
    pub fn dominant(&self) -> MoodLabel {
        let mut best = MoodLabel::Neutral;
        let mut best_count = 0;
        for (mood, count) in self.iter() {
            if count > best_count {
                best = mood;
                best_count = count;
            }
        }
        best
    }
}

impl Serialize for MoodCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MoodLabel::ALL.len()))?;
        for (mood, count) in self.iter() {
            map.serialize_entry(mood.name(), &count)?;
        }
        map.end()
    }
}

/// One calendar day of the trend window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Short weekday name ("Mon", "Tue", ...).
    pub weekday: String,
    pub counts: MoodCounts,
    pub average_score: Option<f64>,
}

/// Mood trend over the last N calendar days.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeeklyReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Oldest day first, one element per day of the window.
    pub days: Vec<DaySummary>,
    pub entries: usize,
    pub counts: MoodCounts,
    pub dominant: MoodLabel,
    pub average_score: Option<f64>,
}

impl WeeklyReport {
    /// Bucket `entries` into the `window_days` days ending at `today`.
    ///
    /// Entries are dated by the UTC day of `created_at`. Entries without a
    /// timestamp, or outside the window, are ignored. The window is clamped
    /// to `1..=MAX_WINDOW_DAYS`.
    pub fn build(entries: &[MoodEntry], today: NaiveDate, window_days: u32) -> Self {
        let window = window_days.clamp(1, MAX_WINDOW_DAYS);
        let start = today
            .checked_sub_days(Days::new(u64::from(window - 1)))
            .unwrap_or(NaiveDate::MIN);

        let mut days: Vec<(NaiveDate, Vec<MoodLabel>)> = start
            .iter_days()
            .take_while(|d| *d <= today)
            .map(|d| (d, Vec::new()))
            .collect();

        for entry in entries {
            let Some(created) = entry.created_at else {
                continue;
            };
            let date = created.date_naive();
            if date < start || date > today {
                continue;
            }
            let offset = (date - start).num_days() as usize;
            days[offset].1.push(entry.mood);
        }

        let in_window: Vec<MoodLabel> = days.iter().flat_map(|(_, m)| m.iter().copied()).collect();
        let counts = MoodCounts::from_moods(in_window.iter().copied());

        WeeklyReport {
            start,
            end: today,
            days: days
                .into_iter()
                .map(|(date, moods)| DaySummary {
                    date,
                    weekday: date.format("%a").to_string(),
                    counts: MoodCounts::from_moods(moods.iter().copied()),
                    average_score: average_score(moods),
                })
                .collect(),
            entries: in_window.len(),
            counts,
            dominant: counts.dominant(),
            average_score: average_score(in_window),
        }
    }
}

/// All-time totals plus the trend window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub total_entries: usize,
    pub counts: MoodCounts,
    pub dominant: MoodLabel,
    pub average_score: Option<f64>,
    pub consistency_score: u32,
    pub week: WeeklyReport,
}

impl Summary {
    pub fn build(entries: &[MoodEntry], today: NaiveDate, window_days: u32) -> Self {
        let counts = MoodCounts::from_moods(entries.iter().map(|e| e.mood));
        Summary {
            total_entries: entries.len(),
            counts,
            dominant: counts.dominant(),
            average_score: average_score(entries.iter().map(|e| e.mood)),
            consistency_score: consistency_score(entries.len()),
            week: WeeklyReport::build(entries, today, window_days),
        }
    }
}

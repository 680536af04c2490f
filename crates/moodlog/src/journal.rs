use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use mood_analytics::Summary;
use mood_classifier::classify;
use mood_core::MoodEntry;

use crate::error::{Error, Result};

/// An in-memory journal. Every entry is classified when it is added or
/// edited; the stored mood is never recomputed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    entries: Vec<MoodEntry>,
}

impl Journal {
    /// An empty journal.
    pub fn new() -> Self {
        Journal::default()
    }

    /// Wrap already-persisted entries.
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        Journal { entries }
    }

    /// Load a JSON Lines journal. A missing file is an empty journal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "journal file missing, starting empty");
                return Ok(Journal::new());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut entries = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let mut entry: MoodEntry =
                serde_json::from_str(trimmed).map_err(|source| Error::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                })?;
            if entry.emoji.is_empty() {
                entry.emoji = entry.mood.emoji().to_string();
            }
            entries.push(entry);
        }

        tracing::debug!(path = %path.display(), entries = entries.len(), "journal loaded");
        Ok(Journal { entries })
    }

    /// Write the journal as JSON Lines, replacing the file.
    ///
    /// The lines go to a sibling `.tmp` file first, which is then renamed
    /// over `path`, so an interrupted save leaves the old journal intact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        for entry in &self.entries {
            let line = serde_json::to_string(entry).map_err(|source| Error::Serialize {
                id: entry.id,
                source,
            })?;
            out.push_str(&line);
            out.push('\n');
        }

        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = tmp_path(path);
        fs::write(&tmp, out).map_err(|source| Error::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(io_err)?;

        tracing::debug!(path = %path.display(), entries = self.entries.len(), "journal saved");
        Ok(())
    }

    /// Classify `text` and store it as a new entry.
    pub fn add(&mut self, text: &str, at: DateTime<Utc>) -> Result<&MoodEntry> {
        if text.trim().is_empty() {
            return Err(Error::EmptyEntry);
        }

        let id = self.next_id();
        let mood = classify(text);
        tracing::info!(id, mood = %mood.mood, "entry added");
        self.entries.push(MoodEntry::new(id, text, mood, at));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace the text of an entry and classify it again.
    pub fn edit(&mut self, id: u64, text: &str, at: DateTime<Utc>) -> Result<&MoodEntry> {
        if text.trim().is_empty() {
            return Err(Error::EmptyEntry);
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::EntryNotFound(id))?;
        let mood = classify(text);
        tracing::info!(id, from = %entry.mood, to = %mood.mood, "entry edited");
        entry.revise(text, mood, at);
        Ok(&*entry)
    }

    /// Delete an entry and return it.
    pub fn remove(&mut self, id: u64) -> Result<MoodEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::EntryNotFound(id))?;
        tracing::info!(id, "entry removed");
        Ok(self.entries.remove(idx))
    }

    /// Look up an entry by id.
    pub fn get(&self, id: u64) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries newest first. Undated entries sort last; ties go to the
    /// higher id.
    pub fn entries(&self) -> Vec<&MoodEntry> {
        let mut sorted: Vec<&MoodEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        sorted
    }

    /// Entries in storage (insertion) order.
    pub fn as_slice(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate statistics over every entry.
    pub fn summary(&self, today: NaiveDate, window_days: u32) -> Summary {
        Summary::build(&self.entries, today, window_days)
    }

    fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

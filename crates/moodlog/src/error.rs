use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from journal operations and journal file I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// The journal file could not be read or written.
    #[error("cannot access journal {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the journal file is not a valid entry.
    #[error("malformed journal entry at {}:{line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An entry could not be encoded as JSON.
    #[error("cannot encode journal entry {id}: {source}")]
    Serialize {
        id: u64,
        #[source]
        source: serde_json::Error,
    },

    /// Entry text was empty or whitespace only.
    #[error("journal entry text is empty")]
    EmptyEntry,

    /// No entry has the given id.
    #[error("no journal entry with id {0}")]
    EntryNotFound(u64),
}

/// Result alias for journal operations.
pub type Result<T> = std::result::Result<T, Error>;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Opaque identity of an entry inside a registry.
///
/// Doubles as the tag a display layer stores on its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntryId(pub(crate) u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of applying an entry's proposed rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Nothing to do: not requested, no proposal, or already in place
    Unchanged,
    /// Proposal contained invalid characters and the policy says skip
    Skipped { reason: String },
    Renamed { from: PathBuf, to: PathBuf },
}

/// Errors that can occur while renaming a single entry
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Source file no longer exists: {0}")]
    SourceMissing(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("New filename '{name}' must keep the extension '{expected}'")]
    ExtensionMismatch { name: String, expected: String },

    #[error("Failed to move '{from}' to '{to}': {source}")]
    Filesystem {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

use crate::matcher::MatcherError;
use crate::settings::SettingsError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Matcher(#[from] MatcherError),
}

/// Which step of a batch failed for a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStep {
    Delete,
    Rename,
}

impl FailedStep {
    pub fn description(&self) -> &'static str {
        match self {
            FailedStep::Delete => "delete",
            FailedStep::Rename => "rename",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub step: FailedStep,
    pub message: String,
}

/// What a `Registry::rename` pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub deleted: Vec<PathBuf>,
    pub renamed: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<(PathBuf, String)>,
    pub failures: Vec<BatchFailure>,
    pub removed_folders: Vec<PathBuf>,
}

impl RenameSummary {
    pub fn record_failure(&mut self, path: &Path, step: FailedStep, message: String) {
        self.failures.push(BatchFailure {
            path: path.to_path_buf(),
            step,
            message,
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
            && self.renamed.is_empty()
            && self.skipped.is_empty()
            && self.failures.is_empty()
            && self.removed_folders.is_empty()
    }
}

/// Result of `Registry::set_path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChange {
    /// Empty or missing path, nothing happened
    Ignored,
    /// Same as the stored last directory
    Unchanged(PathBuf),
    /// Stored and made the working directory
    Changed(PathBuf),
}

impl PathChange {
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathChange::Ignored => None,
            PathChange::Unchanged(p) | PathChange::Changed(p) => Some(p),
        }
    }
}

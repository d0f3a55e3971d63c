mod naming;
mod types;

pub use naming::{format_pattern, has_invalid_chars, sanitize_filename};
pub use types::{EntryError, EntryId, RenameOutcome};

use crate::classifier::{normalize_extension, ExtensionClassifier, FileKind};
use crate::settings::InvalidFilenameAction;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One discovered media file and its rename state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,

    /// Filename including extension
    pub filename: String,
    /// Directory containing the file
    pub directory: PathBuf,
    /// Lower-cased extension without the dot
    pub extension: String,

    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub show_name: String,
    /// Movies are named after the bare show name, ignoring the pattern
    pub movie: bool,

    new_filename: Option<String>,
    /// Target directory; `None` keeps the file where it is
    pub destination: Option<PathBuf>,

    pub processing_requested: bool,
    pub marked_for_deletion: bool,
}

impl Entry {
    pub fn new(directory: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let extension = Path::new(&filename)
            .extension()
            .map(|e| normalize_extension(&e.to_string_lossy()))
            .unwrap_or_default();

        Self {
            id: EntryId::default(),
            filename,
            directory: directory.into(),
            extension,
            season: None,
            episode: None,
            show_name: String::new(),
            movie: false,
            new_filename: None,
            destination: None,
            processing_requested: false,
            marked_for_deletion: false,
        }
    }

    /// Build an entry from a full file path
    pub fn from_path(path: &Path) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::new(directory, filename)
    }

    pub fn with_episode(mut self, season: u32, episode: u32) -> Self {
        self.season = Some(season);
        self.episode = Some(episode);
        self
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: EntryId) {
        self.id = id;
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// Filename without its extension
    pub fn stem(&self) -> String {
        file_stem(&self.filename)
    }

    pub fn kind(&self, classifier: &ExtensionClassifier) -> FileKind {
        classifier.classify(&self.extension)
    }

    pub fn is_video(&self, classifier: &ExtensionClassifier) -> bool {
        classifier.is_video(&self.extension)
    }

    pub fn is_subtitle(&self, classifier: &ExtensionClassifier) -> bool {
        classifier.is_subtitle(&self.extension)
    }

    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    pub fn new_filename(&self) -> Option<&str> {
        self.new_filename.as_deref()
    }

    pub fn has_proposal(&self) -> bool {
        self.new_filename.is_some()
    }

    /// Set the proposed filename; it must keep this entry's extension
    pub fn set_new_filename(&mut self, name: &str) -> Result<(), EntryError> {
        let ext = Path::new(name)
            .extension()
            .map(|e| normalize_extension(&e.to_string_lossy()))
            .unwrap_or_default();
        if ext != self.extension {
            return Err(EntryError::ExtensionMismatch {
                name: name.to_string(),
                expected: self.extension.clone(),
            });
        }
        self.store_proposal(name.to_string());
        Ok(())
    }

    /// Propose `stem` plus this entry's own extension
    pub fn propose_stem(&mut self, stem: &str) {
        let name = if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{}.{}", stem, self.extension)
        };
        self.store_proposal(name);
    }

    // A proposal equal to the current name means "nothing to do"
    fn store_proposal(&mut self, name: String) {
        if name == self.filename {
            self.new_filename = None;
        } else {
            self.new_filename = Some(name);
        }
    }

    /// Compute the proposed filename from a naming pattern.
    ///
    /// Movies use the bare show name. Entries without a show name, and
    /// episodes without season or episode numbers, keep whatever proposal
    /// they already have (a subtitle paired to its video, say).
    pub fn create_new_name(&mut self, pattern: &str) {
        let show = self.show_name.trim();
        if show.is_empty() {
            return;
        }

        let stem = if self.movie {
            show.to_string()
        } else {
            match (self.season, self.episode) {
                (Some(season), Some(episode)) => format_pattern(pattern, show, season, episode),
                _ => return,
            }
        };

        self.propose_stem(&stem);
        debug!(entry = %self.id, proposal = ?self.new_filename, "Created new name");
    }

    /// Directory the file ends up in after renaming
    pub fn target_directory(&self) -> &Path {
        self.destination.as_deref().unwrap_or(&self.directory)
    }

    /// Filename the file ends up with after renaming
    pub fn target_filename(&self) -> &str {
        self.new_filename.as_deref().unwrap_or(&self.filename)
    }

    pub fn target_path(&self) -> PathBuf {
        self.target_directory().join(self.target_filename())
    }

    /// Move the file to its proposed name and destination.
    ///
    /// Only entries flagged for processing with a proposed name or destination
    /// are touched. On success the entry points at the new location.
    pub fn apply_rename(
        &mut self,
        action: InvalidFilenameAction,
        replacement: &str,
    ) -> Result<RenameOutcome, EntryError> {
        if !self.processing_requested
            || (self.new_filename.is_none() && self.destination.is_none())
        {
            return Ok(RenameOutcome::Unchanged);
        }

        let mut name = self.target_filename().to_string();
        if has_invalid_chars(&name) {
            match action {
                InvalidFilenameAction::Skip => {
                    let reason = format!("'{}' contains invalid characters", name);
                    warn!(entry = %self.id, "Skipping rename: {}", reason);
                    return Ok(RenameOutcome::Skipped { reason });
                }
                InvalidFilenameAction::Replace => {
                    name = sanitize_filename(&name, replacement);
                }
            }
        }

        let target_dir = self.target_directory().to_path_buf();
        let source = self.path();
        let target = target_dir.join(&name);

        if target == source {
            self.new_filename = None;
            self.destination = None;
            return Ok(RenameOutcome::Unchanged);
        }

        if !source.is_file() {
            return Err(EntryError::SourceMissing(source));
        }
        if target.exists() {
            return Err(EntryError::DestinationExists(target));
        }

        let fs_error = |e: std::io::Error| EntryError::Filesystem {
            from: source.clone(),
            to: target.clone(),
            source: e,
        };
        fs::create_dir_all(&target_dir).map_err(fs_error)?;
        fs::rename(&source, &target).map_err(fs_error)?;

        info!("Renamed: {:?} -> {:?}", source, target);

        self.filename = name;
        self.directory = target_dir;
        self.new_filename = None;
        self.destination = None;

        Ok(RenameOutcome::Renamed {
            from: source,
            to: target,
        })
    }
}

/// Filename without its last extension; dotfiles keep their full name
pub fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

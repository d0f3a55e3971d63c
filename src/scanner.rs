use crate::classifier::ExtensionClassifier;
use crate::entry::Entry;
use crate::parser::parse_episode;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect every video and subtitle file below `target`.
///
/// Hidden files and folders are skipped. Season and episode numbers are
/// filled in from the filename when it carries a marker.
pub fn scan_media_files(
    target: &Path,
    classifier: &ExtensionClassifier,
) -> Result<Vec<Entry>, ScannerError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let mut entries = Vec::new();

    for item in WalkDir::new(target).into_iter().filter_entry(|e| !is_hidden(e)) {
        let item = item.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| target.to_path_buf());
            match e.into_io_error() {
                Some(io) if io.kind() == std::io::ErrorKind::PermissionDenied => {
                    ScannerError::PermissionDenied(path)
                }
                Some(io) => ScannerError::IoError(io),
                None => ScannerError::IoError(std::io::Error::other("filesystem loop detected")),
            }
        })?;

        if !item.file_type().is_file() {
            continue;
        }

        let mut entry = Entry::from_path(item.path());
        if !classifier.is_media(&entry.extension) {
            trace!(path = ?item.path(), "Skipping non-media file");
            continue;
        }

        if let Ok(number) = parse_episode(&entry.filename) {
            entry.season = Some(number.season);
            entry.episode = Some(number.episode);
        }

        debug!(file = %entry.filename, season = ?entry.season, episode = ?entry.episode, "Found media file");
        entries.push(entry);
    }

    entries.sort_by_key(Entry::path);

    debug!(count = entries.len(), "Scan complete");

    Ok(entries)
}

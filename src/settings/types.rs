use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SETTINGS_VERSION: &str = "1.0";

/// What to do with a proposed filename that contains characters the filesystem rejects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvalidFilenameAction {
    /// Leave the file untouched
    Skip,
    /// Substitute every invalid character with the configured replacement
    #[default]
    Replace,
}

/// User settings consumed by the registry operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub video_extensions: Vec<String>,
    pub subtitle_extensions: Vec<String>,

    /// Regex whose matches are replaced by a space before fuzzy name comparison
    pub cleanup_regex: String,

    pub invalid_filename_action: InvalidFilenameAction,
    pub invalid_char_replacement: String,

    pub delete_empty_folders: bool,

    /// Filenames that do not keep a folder alive during empty-folder cleanup
    pub ignore_files: Vec<String>,

    pub last_directory: Option<PathBuf>,

    pub title_history_size: usize,
    pub last_titles: Vec<String>,

    /// Naming pattern for episodes, see `Entry::create_new_name`
    pub target_pattern: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            video_extensions: to_strings(&[
                "avi", "mkv", "mp4", "m4v", "mpg", "mpeg", "ogm", "wmv", "divx", "mov", "ts",
            ]),
            subtitle_extensions: to_strings(&["srt", "sub", "idx", "ssa", "ass", "smi", "vtt"]),
            cleanup_regex: r"[\W_]+".to_string(),
            invalid_filename_action: InvalidFilenameAction::Replace,
            invalid_char_replacement: "-".to_string(),
            delete_empty_folders: false,
            ignore_files: to_strings(&["thumbs.db", "desktop.ini", ".ds_store"]),
            last_directory: None,
            title_history_size: 25,
            last_titles: Vec::new(),
            target_pattern: "%T - S%SE%E".to_string(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The settings file structure (serialized to JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFile {
    pub version: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub settings: Settings,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            updated_at: None,
            settings: Settings::default(),
        }
    }
}

/// Location of the settings file
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    pub settings_path: PathBuf,
}

impl SettingsConfig {
    pub const ENV_VAR: &'static str = "SHOW_RENAMER_CONFIG";

    pub fn at(path: &Path) -> Self {
        Self {
            settings_path: path.to_path_buf(),
        }
    }

    /// Resolve the settings location: explicit path, then `SHOW_RENAMER_CONFIG`,
    /// then the user config directory
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::at(path);
        }

        if let Ok(path) = std::env::var(Self::ENV_VAR) {
            if !path.is_empty() {
                return Self::at(Path::new(&path));
            }
        }

        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(&base.join("show-renamer").join("settings.json"))
    }
}

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file corrupted")]
    Corrupted,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("Settings version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
}

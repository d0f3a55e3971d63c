mod codes;

pub use codes::ExitCode;

use crate::matcher::MatcherError;
use crate::registry::{BatchFailure, RegistryError};
use crate::scanner::ScannerError;
use crate::settings::SettingsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArguments { message: String },

    #[error("Settings error: {source}")]
    Settings {
        path: Option<PathBuf>,
        #[source]
        source: SettingsError,
    },

    #[error("Invalid cleanup pattern '{pattern}'")]
    InvalidPattern { pattern: String, message: String },

    #[error("{} file operation(s) failed", failures.len())]
    BatchFailed { failures: Vec<BatchFailure> },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::InvalidArguments { .. } => ExitCode::InvalidArguments,
            AppError::InvalidPattern { .. } => ExitCode::InvalidArguments,
            AppError::Settings { .. } => ExitCode::SettingsError,
            AppError::BatchFailed { .. } => ExitCode::RenameError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::InvalidArguments { message } => {
                format!("{}\n\nRun with --help for usage.", message)
            }

            AppError::Settings { path, source } => {
                let path_info = path
                    .as_ref()
                    .map(|p| format!("File: {}\n", p.display()))
                    .unwrap_or_default();

                format!(
                    "Could not save settings:\n  {}\n{}\n\
                     Check that the settings directory is writable, \
                     or point SHOW_RENAMER_CONFIG at another file.",
                    source, path_info
                )
            }

            AppError::InvalidPattern { pattern, message } => {
                format!(
                    "The cleanup pattern is not a valid regular expression:\n  {}\n  {}\n\n\
                     Fix 'cleanup_regex' in the settings file.",
                    pattern, message
                )
            }

            AppError::BatchFailed { failures } => {
                let mut msg = format!("{} file operation(s) failed:\n", failures.len());
                for failure in failures.iter().take(10) {
                    msg.push_str(&format!(
                        "  - {} {}: {}\n",
                        failure.step.description(),
                        failure.path.display(),
                        failure.message
                    ));
                }
                if failures.len() > 10 {
                    msg.push_str(&format!("  ... and {} more\n", failures.len() - 10));
                }
                msg.push_str("\nCheck file permissions and ensure no files are open.");
                msg
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<SettingsError> for AppError {
    fn from(source: SettingsError) -> Self {
        AppError::Settings { path: None, source }
    }
}

impl From<MatcherError> for AppError {
    fn from(err: MatcherError) -> Self {
        match err {
            MatcherError::InvalidCleanupRegex { pattern, source } => AppError::InvalidPattern {
                pattern,
                message: source.to_string(),
            },
        }
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Io(e) => AppError::Other(format!("I/O error: {}", e)),
            RegistryError::Settings(e) => e.into(),
            RegistryError::Matcher(e) => e.into(),
        }
    }
}

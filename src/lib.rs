pub mod classifier;
pub mod cleanup;
pub mod cli;
pub mod entry;
pub mod error;
pub mod history;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod path_case;
pub mod registry;
pub mod scanner;
pub mod settings;
pub mod ui;

pub use classifier::{ExtensionClassifier, FileKind};
pub use entry::{Entry, EntryError, EntryId, RenameOutcome};
pub use error::{AppError, ExitCode};
pub use history::TitleHistory;
pub use matcher::{Matcher, MatcherError, NameMatchStrategy, ShowNameMatcher, VideoMatch};
pub use parser::{parse_episode, EpisodeMarker, EpisodeNumber, ParseError};
pub use registry::{BatchFailure, FailedStep, PathChange, Registry, RegistryError, RenameSummary};
pub use scanner::{scan_media_files, ScannerError};
pub use settings::{InvalidFilenameAction, Settings, SettingsConfig, SettingsError, SettingsStore};

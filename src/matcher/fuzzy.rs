use crate::entry::Entry;
use regex::Regex;
use std::path::Component;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Invalid cleanup regex '{pattern}': {source}")]
    InvalidCleanupRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One way of deciding that an entry probably belongs to a show.
///
/// `show_name` is already lower-cased.
pub trait NameMatchStrategy {
    fn name(&self) -> &'static str;
    fn matches(&self, entry: &Entry, show_name: &str) -> bool;
}

/// Leading word of the filename read as an abbreviation, e.g. "sga" for
/// Stargate Atlantis.
///
/// Matches when every letter of the show name occurs in the abbreviation.
/// Order and repetition are not checked.
pub struct AbbreviationStrategy;

impl NameMatchStrategy for AbbreviationStrategy {
    fn name(&self) -> &'static str {
        "abbreviation"
    }

    fn matches(&self, entry: &Entry, show_name: &str) -> bool {
        let processed = entry.filename.to_lowercase();
        let Some(end) = processed.find(|c: char| !(c.is_alphanumeric() || c == '_')) else {
            return false;
        };
        let abbreviation = &processed[..end];
        if abbreviation.is_empty() {
            return false;
        }

        let mut letters = show_name.chars().filter(|c| c.is_alphanumeric()).peekable();
        if letters.peek().is_none() {
            return false;
        }
        letters.all(|c| abbreviation.contains(c))
    }
}

/// Cleaned show name is contained in the cleaned filename
pub struct FilenameStrategy {
    cleanup: Regex,
}

impl FilenameStrategy {
    pub fn new(cleanup: Regex) -> Self {
        Self { cleanup }
    }
}

impl NameMatchStrategy for FilenameStrategy {
    fn name(&self) -> &'static str {
        "filename"
    }

    fn matches(&self, entry: &Entry, show_name: &str) -> bool {
        let filename = clean(&self.cleanup, &entry.filename);
        filename.contains(clean(&self.cleanup, show_name).trim())
    }
}

/// Cleaned show name is contained in one of the entry's ancestor folders
pub struct FolderStrategy {
    cleanup: Regex,
}

impl FolderStrategy {
    pub fn new(cleanup: Regex) -> Self {
        Self { cleanup }
    }
}

impl NameMatchStrategy for FolderStrategy {
    fn name(&self) -> &'static str {
        "folder"
    }

    fn matches(&self, entry: &Entry, show_name: &str) -> bool {
        entry.directory.components().any(|component| match component {
            Component::Normal(folder) => {
                folder_contains(&self.cleanup, &folder.to_string_lossy(), show_name)
            }
            _ => false,
        })
    }
}

/// Lower-case and replace every cleanup match with a space
fn clean(cleanup: &Regex, value: &str) -> String {
    cleanup.replace_all(&value.to_lowercase(), " ").into_owned()
}

/// Cleaned containment, falling back to a comparison with all whitespace
/// removed so "xfiles" is found in the folder "X-Files".
fn folder_contains(cleanup: &Regex, folder: &str, show_name: &str) -> bool {
    let folder = clean(cleanup, folder);
    let needle = clean(cleanup, show_name);
    let needle = needle.trim();

    folder.contains(needle) || compact(&folder).contains(&compact(needle))
}

fn compact(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Ordered, short-circuiting list of name match strategies
pub struct ShowNameMatcher {
    strategies: Vec<Box<dyn NameMatchStrategy>>,
}

impl ShowNameMatcher {
    /// Abbreviation, then filename, then folder
    pub fn new(cleanup_regex: &str) -> Result<Self, MatcherError> {
        let cleanup =
            Regex::new(cleanup_regex).map_err(|source| MatcherError::InvalidCleanupRegex {
                pattern: cleanup_regex.to_string(),
                source,
            })?;

        Ok(Self::with_strategies(vec![
            Box::new(AbbreviationStrategy),
            Box::new(FilenameStrategy::new(cleanup.clone())),
            Box::new(FolderStrategy::new(cleanup)),
        ]))
    }

    pub fn with_strategies(strategies: Vec<Box<dyn NameMatchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Name of the first strategy that accepts the entry
    pub fn first_match(&self, entry: &Entry, show_name: &str) -> Option<&'static str> {
        let show_name = show_name.to_lowercase();
        let hit = self
            .strategies
            .iter()
            .find(|s| s.matches(entry, &show_name))
            .map(|s| s.name());
        trace!(file = %entry.filename, strategy = ?hit, "Show name check");
        hit
    }

    pub fn matches(&self, entry: &Entry, show_name: &str) -> bool {
        self.first_match(entry, show_name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> ShowNameMatcher {
        ShowNameMatcher::new(r"[\W_]+").unwrap()
    }

    #[test]
    fn test_abbreviation_match() {
        let entry = Entry::new("/downloads", "sga.s02e05.avi");
        assert!(AbbreviationStrategy.matches(&entry, "sga"));
        assert!(AbbreviationStrategy.matches(&entry, "gas"));
    }

    #[test]
    fn test_abbreviation_ignores_order_and_duplicates() {
        let entry = Entry::new("/downloads", "e.s01e01.avi");
        assert!(AbbreviationStrategy.matches(&entry, "ee"));
    }

    #[test]
    fn test_abbreviation_needs_every_letter() {
        let entry = Entry::new("/downloads", "xf_s01e02.mkv");
        assert!(!AbbreviationStrategy.matches(&entry, "xfiles"));
    }

    #[test]
    fn test_abbreviation_requires_separator() {
        let entry = Entry::new("/downloads", "noextension");
        assert!(!AbbreviationStrategy.matches(&entry, "n"));

        let entry = Entry::new("/downloads", ".hidden.mkv");
        assert!(!AbbreviationStrategy.matches(&entry, "h"));
    }

    #[test]
    fn test_filename_containment() {
        let entry = Entry::new("/downloads", "The.Wire.S01E01.mkv");
        let strategy = FilenameStrategy::new(Regex::new(r"[\W_]+").unwrap());
        assert!(strategy.matches(&entry, "the wire"));
        assert!(!strategy.matches(&entry, "lost"));
    }

    #[test]
    fn test_filename_containment_respects_word_breaks() {
        let entry = Entry::new("/downloads", "Los.Tiempos.s01e01.mkv");
        let strategy = FilenameStrategy::new(Regex::new(r"[\W_]+").unwrap());
        assert!(!strategy.matches(&entry, "lost"));
        assert!(!strategy.matches(&entry, "lostiempos"));
        assert_eq!(matcher().first_match(&entry, "lost"), None);
    }

    #[test]
    fn test_folder_containment() {
        let entry = Entry::new("/tv/X-Files/Season 1", "xf_s01e02.mkv");
        let strategy = FolderStrategy::new(Regex::new(r"[\W_]+").unwrap());
        assert!(strategy.matches(&entry, "x-files"));
        assert!(strategy.matches(&entry, "xfiles"));
        assert!(!strategy.matches(&entry, "lost"));
    }

    #[test]
    fn test_xfiles_falls_through_to_folder() {
        let entry = Entry::new("/tv/X-Files", "xf_s01e02.mkv");
        assert_eq!(matcher().first_match(&entry, "xfiles"), Some("folder"));
    }

    #[test]
    fn test_order_short_circuits() {
        let entry = Entry::new("/tv/Lost", "lost.s01e01.mkv");
        assert_eq!(matcher().first_match(&entry, "Lost"), Some("abbreviation"));
    }

    #[test]
    fn test_no_strategy_matches() {
        let entry = Entry::new("/tv/Heroes", "heroes.s01e01.mkv");
        assert_eq!(matcher().first_match(&entry, "Lost"), None);
    }

    #[test]
    fn test_invalid_cleanup_regex() {
        let result = ShowNameMatcher::new("[unclosed");
        assert!(matches!(
            result,
            Err(MatcherError::InvalidCleanupRegex { .. })
        ));
    }

    struct Never;

    impl NameMatchStrategy for Never {
        fn name(&self) -> &'static str {
            "never"
        }

        fn matches(&self, _entry: &Entry, _show_name: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_custom_strategies() {
        let matcher = ShowNameMatcher::with_strategies(vec![Box::new(Never)]);
        let entry = Entry::new("/tv/Lost", "lost.s01e01.mkv");
        assert!(!matcher.matches(&entry, "lost"));
    }
}

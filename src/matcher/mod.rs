mod fuzzy;

pub use fuzzy::{
    AbbreviationStrategy, FilenameStrategy, FolderStrategy, MatcherError, NameMatchStrategy,
    ShowNameMatcher,
};

use crate::classifier::ExtensionClassifier;
use crate::entry::{Entry, EntryId};

/// Outcome of looking for the one video of an episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoMatch {
    NotFound,
    Ambiguous(Vec<EntryId>),
    Found(EntryId),
}

impl VideoMatch {
    /// The unambiguous match; none and many both give `None`
    pub fn found(&self) -> Option<EntryId> {
        match self {
            VideoMatch::Found(id) => Some(*id),
            _ => None,
        }
    }
}

/// Read-only queries over a slice of entries.
///
/// Every query returns fresh ids, so callers can mutate the registry while
/// walking the result.
pub struct Matcher<'a> {
    entries: &'a [Entry],
    classifier: &'a ExtensionClassifier,
}

impl<'a> Matcher<'a> {
    pub fn new(entries: &'a [Entry], classifier: &'a ExtensionClassifier) -> Self {
        Self {
            entries,
            classifier,
        }
    }

    fn same_episode(entry: &Entry, season: u32, episode: u32) -> bool {
        entry.season == Some(season) && entry.episode == Some(episode)
    }

    pub fn matching_videos(&self, season: u32, episode: u32) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|e| Self::same_episode(e, season, episode) && e.is_video(self.classifier))
            .map(Entry::id)
            .collect()
    }

    pub fn matching_subtitles(&self, season: u32, episode: u32) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|e| Self::same_episode(e, season, episode) && e.is_subtitle(self.classifier))
            .map(Entry::id)
            .collect()
    }

    pub fn single_matching_video(&self, season: u32, episode: u32) -> VideoMatch {
        let mut videos = self.matching_videos(season, episode);
        match videos.len() {
            0 => VideoMatch::NotFound,
            1 => VideoMatch::Found(videos.remove(0)),
            _ => VideoMatch::Ambiguous(videos),
        }
    }

    /// First video with the same filename stem, in registry order
    pub fn video_for_subtitle(&self, subtitle: &Entry) -> Option<EntryId> {
        let stem = subtitle.stem();
        self.entries
            .iter()
            .find(|e| e.is_video(self.classifier) && e.stem() == stem)
            .map(Entry::id)
    }

    /// First subtitle with the same filename stem, in registry order
    pub fn subtitle_for_video(&self, video: &Entry) -> Option<EntryId> {
        let stem = video.stem();
        self.entries
            .iter()
            .find(|e| e.is_subtitle(self.classifier) && e.stem() == stem)
            .map(Entry::id)
    }

    pub fn entries_with_show_name(&self, show_name: &str) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|e| e.show_name == show_name)
            .map(Entry::id)
            .collect()
    }

    /// Entries that probably belong to `show_name`, see [`ShowNameMatcher`]
    pub fn find_similar_by_name(
        &self,
        show_name: &str,
        name_matcher: &ShowNameMatcher,
    ) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|e| name_matcher.matches(e, show_name))
            .map(Entry::id)
            .collect()
    }
}

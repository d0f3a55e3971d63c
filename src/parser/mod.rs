mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

// Examples: "Show.S01E02.mkv", "show s1 e2", "Show_s01_e102"
static SEASON_EPISODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)s(\d{1,2})[\s._-]*e(\d{1,3})").unwrap());

// Examples: "Show - 1x02.avi", "Show.12x101"
static CROSS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:^|\D)(\d{1,2})x(\d{1,3})(?:\D|$)").unwrap());

// Examples: "Show.102.avi", "Show [305]"
// Only after a separator so codec tags like "x264" are not read as 2x64
static COMPACT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[\s._\-\[(])(\d)(\d{2})(?:[\s._\-\])]|$)").unwrap());

/// Extract season and episode numbers from a filename.
///
/// Markers are tried from most to least specific; the first match wins.
pub fn parse_episode(name: &str) -> Result<EpisodeNumber, ParseError> {
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };

    try_capture(&SEASON_EPISODE_REGEX, stem, EpisodeMarker::SeasonEpisode)
        .or_else(|| try_capture(&CROSS_REGEX, stem, EpisodeMarker::Cross))
        .or_else(|| try_capture(&COMPACT_REGEX, stem, EpisodeMarker::Compact))
        .ok_or_else(|| ParseError::NoEpisodeMarker(name.to_string()))
}

fn try_capture(regex: &Regex, stem: &str, marker: EpisodeMarker) -> Option<EpisodeNumber> {
    let captures = regex.captures(stem)?;

    let season: u32 = captures.get(1)?.as_str().parse().ok()?;
    let episode: u32 = captures.get(2)?.as_str().parse().ok()?;

    Some(EpisodeNumber {
        season,
        episode,
        marker,
    })
}

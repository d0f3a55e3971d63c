use thiserror::Error;

/// Which filename convention carried the episode numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeMarker {
    /// `S01E02`
    SeasonEpisode,
    /// `1x02`
    Cross,
    /// `102`
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeNumber {
    pub season: u32,
    pub episode: u32,
    pub marker: EpisodeMarker,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("No season/episode marker found in: {0}")]
    NoEpisodeMarker(String),
}

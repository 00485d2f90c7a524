use serde::{Deserialize, Serialize};

use crate::grouping::Grouped;

/// One song's listening statistics as supplied by the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub streams: u64,
    pub rating: f64,   // Expected within 0.0..=5.0
    pub duration: u32, // Seconds
}

/// Artist tier derived from aggregate stream count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistTierEntry {
    pub artist: String,
    pub total_streams: u64,
    pub tier: Tier,
}

/// Per-genre averages and engagement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreMetric {
    pub avg_streams: u64,
    pub avg_rating: f64,
    pub song_count: usize,
    pub engagement_score: f64,
}

/// Genre metrics keyed by genre, in first-encountered order
pub type GenreMetrics = Grouped<String, GenreMetric>;

/// Best contiguous run of records in timeline order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakWindow {
    pub start_index: usize,
    pub end_index: usize, // Inclusive
    pub songs: Vec<String>,
    pub total_score: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDiversityEntry {
    pub artist: String,
    pub genres: Vec<String>,
    pub genre_count: usize,
    pub best_genre: String,
    pub best_genre_avg_streams: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry {
    pub title: String,
    pub artist: String,
    pub quality_score: f64,
}

/// All five reports computed over one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningReport {
    pub artist_tiers: Vec<ArtistTierEntry>,
    pub genre_metrics: GenreMetrics,
    pub peak_window: Option<PeakWindow>,
    pub diverse_artists: Vec<ArtistDiversityEntry>,
    pub premium_playlist: Vec<PlaylistEntry>,
}

#[cfg(test)]
impl SongRecord {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        streams: u64,
        rating: f64,
        duration: u32,
    ) -> Self {
        SongRecord {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            streams,
            rating,
            duration,
        }
    }
}

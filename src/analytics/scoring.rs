use crate::models::{SongRecord, Tier};

/// Total streams at which an artist becomes Platinum
pub const PLATINUM_THRESHOLD: u64 = 10_000_000;
/// Total streams at which an artist becomes Gold
pub const GOLD_THRESHOLD: u64 = 5_000_000;

/// Records per peak-performance window
pub const WINDOW_SIZE: usize = 4;

/// Scoring and rounding helpers shared by the reports
pub struct ListeningScoring;

impl ListeningScoring {
    /// Round to a fixed number of decimal places, halves away from zero
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10_f64.powi(decimals);
        (value * factor).round() / factor
    }

    /// Round a non-negative average to the nearest whole number
    pub fn round_whole(value: f64) -> u64 {
        value.round().max(0.0) as u64
    }

    /// Classify an artist by their total streams
    pub fn classify_tier(total_streams: u64) -> Tier {
        if total_streams >= PLATINUM_THRESHOLD {
            Tier::Platinum
        } else if total_streams >= GOLD_THRESHOLD {
            Tier::Gold
        } else {
            Tier::Silver
        }
    }

    /// Engagement from full-precision averages, rounded once to 2 decimals
    pub fn engagement_score(avg_streams: f64, avg_rating: f64) -> f64 {
        Self::round_to((avg_streams / 1_000_000.0) * avg_rating, 2)
    }

    /// Contribution of one record to a window: thousands of streams plus weighted rating
    pub fn window_contribution(song: &SongRecord) -> f64 {
        song.streams as f64 / 1000.0 + song.rating * 500.0
    }

    /// Unrounded score of a run of records
    pub fn window_score(window: &[SongRecord]) -> f64 {
        window.iter().map(Self::window_contribution).sum()
    }

    /// Playlist quality: rating weighted twice plus streams per half-million, 2 decimals
    pub fn quality_score(song: &SongRecord) -> f64 {
        Self::round_to(song.rating * 2.0 + song.streams as f64 / 500_000.0, 2)
    }
}

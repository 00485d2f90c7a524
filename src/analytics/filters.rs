use crate::models::SongRecord;

/// Lowest rating a premium candidate may have
pub const PREMIUM_MIN_RATING: f64 = 4.3;
/// Lowest stream count a premium candidate may have
pub const PREMIUM_MIN_STREAMS: u64 = 2_000_000;
/// Accepted premium track length in seconds, inclusive
pub const PREMIUM_DURATION_RANGE: (u32, u32) = (180, 240);

/// Record filtering functionality using static helper functions
pub struct SongFilters;

impl SongFilters {
    /// Check if a record is rated highly enough for the premium playlist
    pub fn meets_rating(song: &SongRecord) -> bool {
        song.rating >= PREMIUM_MIN_RATING
    }

    /// Check if a record has been streamed enough for the premium playlist
    pub fn meets_streams(song: &SongRecord) -> bool {
        song.streams >= PREMIUM_MIN_STREAMS
    }

    /// Check if a record's length sits inside the premium duration range
    pub fn within_duration(song: &SongRecord) -> bool {
        let (min, max) = PREMIUM_DURATION_RANGE;
        song.duration >= min && song.duration <= max
    }

    /// Apply all filters to determine if a record is a premium candidate
    pub fn is_premium_candidate(song: &SongRecord) -> bool {
        Self::meets_rating(song) && Self::meets_streams(song) && Self::within_duration(song)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_song(streams: u64, rating: f64, duration: u32) -> SongRecord {
        SongRecord::new("Test Song", "Test Artist", "pop", streams, rating, duration)
    }

    #[test]
    fn test_premium_boundaries_included() {
        assert!(SongFilters::is_premium_candidate(&create_test_song(2_000_000, 4.3, 180)));
        assert!(SongFilters::is_premium_candidate(&create_test_song(2_000_000, 4.3, 240)));
    }

    #[test]
    fn test_premium_boundaries_excluded() {
        assert!(!SongFilters::is_premium_candidate(&create_test_song(2_000_000, 4.29, 180)));
        assert!(!SongFilters::is_premium_candidate(&create_test_song(1_999_999, 4.8, 200)));
        assert!(!SongFilters::is_premium_candidate(&create_test_song(3_000_000, 4.8, 179)));
        assert!(!SongFilters::is_premium_candidate(&create_test_song(3_000_000, 4.8, 241)));
    }
}

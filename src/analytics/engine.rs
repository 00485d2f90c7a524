use super::{
    categorize_artists, cross_genre_artists, genre_metrics, peak_performance_window,
    premium_playlist,
};
use crate::models::{ListeningReport, SongRecord};

/// Runs every report over one borrowed dataset
pub struct AnalyticsEngine<'a> {
    records: &'a [SongRecord],
}

impl<'a> AnalyticsEngine<'a> {
    pub fn new(records: &'a [SongRecord]) -> Self {
        Self { records }
    }

    /// Compute all five reports, each exactly once
    pub fn run(&self) -> ListeningReport {
        log::info!("Computing listening reports over {} records", self.records.len());

        let artist_tiers = categorize_artists(self.records);
        log::debug!("Artist tiers: {} artists", artist_tiers.len());

        let genre_metrics = genre_metrics(self.records);
        if genre_metrics.is_empty() {
            log::warn!("No genres found, every report will be empty");
        } else {
            log::debug!("Genre metrics: {} genres", genre_metrics.len());
        }

        let peak_window = peak_performance_window(self.records);
        match &peak_window {
            Some(window) => log::debug!(
                "Peak window: [{}-{}] score {}",
                window.start_index,
                window.end_index,
                window.total_score
            ),
            None => log::warn!(
                "Only {} records, no peak performance window available",
                self.records.len()
            ),
        }

        let diverse_artists = cross_genre_artists(self.records);
        log::debug!("Cross-genre artists: {}", diverse_artists.len());

        let premium_playlist = premium_playlist(self.records);
        log::debug!("Premium playlist: {} tracks", premium_playlist.len());

        ListeningReport {
            artist_tiers,
            genre_metrics,
            peak_window,
            diverse_artists,
            premium_playlist,
        }
    }
}

use super::filters::SongFilters;
use super::scoring::ListeningScoring;
use crate::models::{PlaylistEntry, SongRecord};

/// Longest premium playlist produced
pub const PLAYLIST_LIMIT: usize = 10;

/// Curate the top premium tracks by quality score.
///
/// Equal scores keep dataset order. Fewer than `PLAYLIST_LIMIT` candidates
/// simply yields a shorter playlist.
pub fn premium_playlist(records: &[SongRecord]) -> Vec<PlaylistEntry> {
    let mut playlist: Vec<PlaylistEntry> = records
        .iter()
        .filter(|song| SongFilters::is_premium_candidate(song))
        .map(|song| PlaylistEntry {
            title: song.title.clone(),
            artist: song.artist.clone(),
            quality_score: ListeningScoring::quality_score(song),
        })
        .collect();

    playlist.sort_by(|a, b| b.quality_score.total_cmp(&a.quality_score));
    playlist.truncate(PLAYLIST_LIMIT);
    playlist
}

use crate::grouping::group_by;
use super::scoring::ListeningScoring;
use crate::models::{ArtistTierEntry, SongRecord};

/// Sum streams per artist and label each artist with a tier.
///
/// Sorted by total streams, highest first. Artists with equal totals keep the
/// order in which they first appear in `records`.
pub fn categorize_artists(records: &[SongRecord]) -> Vec<ArtistTierEntry> {
    let totals = group_by(
        records,
        |song| song.artist.clone(),
        |total: &mut u64, song| *total += song.streams,
    );

    let mut entries: Vec<ArtistTierEntry> = totals
        .into_iter()
        .map(|(artist, total_streams)| ArtistTierEntry {
            artist,
            total_streams,
            tier: ListeningScoring::classify_tier(total_streams),
        })
        .collect();

    // Stable, so ties stay in first-encountered order
    entries.sort_by(|a, b| b.total_streams.cmp(&a.total_streams));
    entries
}

use crate::grouping::{StreamTotals, group_by, project};
use super::scoring::ListeningScoring;
use crate::models::{GenreMetric, GenreMetrics, SongRecord};

/// Average streams, average rating and engagement per genre.
///
/// The engagement score is computed from the unrounded averages and rounded
/// once, so it can differ in the last place from one computed out of the
/// displayed `avg_streams`/`avg_rating`.
pub fn genre_metrics(records: &[SongRecord]) -> GenreMetrics {
    let totals = group_by(
        records,
        |song| song.genre.clone(),
        |totals: &mut StreamTotals, song| totals.add(song.streams, song.rating),
    );

    project(totals, |_, totals| {
        let avg_streams = totals.average_streams();
        let avg_rating = totals.average_rating();
        GenreMetric {
            avg_streams: ListeningScoring::round_whole(avg_streams),
            avg_rating: ListeningScoring::round_to(avg_rating, 2),
            song_count: totals.count,
            engagement_score: ListeningScoring::engagement_score(avg_streams, avg_rating),
        }
    })
}

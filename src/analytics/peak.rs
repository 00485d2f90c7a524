use super::scoring::{ListeningScoring, WINDOW_SIZE};
use crate::models::{PeakWindow, SongRecord};

/// Find the highest-scoring run of `WINDOW_SIZE` consecutive records.
///
/// Records are scanned in their given order. Only a strictly better score
/// replaces the current best, so the earliest window wins ties. Returns `None`
/// when there are fewer records than one window.
pub fn peak_performance_window(records: &[SongRecord]) -> Option<PeakWindow> {
    let mut best: Option<(usize, f64)> = None;

    for (start, window) in records.windows(WINDOW_SIZE).enumerate() {
        let score = ListeningScoring::window_score(window);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((start, score));
        }
    }

    best.map(|(start, score)| {
        let window = &records[start..start + WINDOW_SIZE];
        PeakWindow {
            start_index: start,
            end_index: start + WINDOW_SIZE - 1,
            songs: window.iter().map(|song| song.title.clone()).collect(),
            total_score: ListeningScoring::round_whole(score),
        }
    })
}

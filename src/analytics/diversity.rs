use crate::grouping::{Grouped, group_by, mean};
use super::scoring::ListeningScoring;
use crate::models::{ArtistDiversityEntry, SongRecord};

/// Fewest distinct genres an artist needs to count as cross-genre
pub const MIN_GENRES: usize = 3;

type GenreGroups<'a> = Grouped<String, Vec<&'a SongRecord>>;

/// Artists who appear in at least `MIN_GENRES` genres, with their strongest genre.
///
/// Genres are listed in the order first encountered for that artist. The best
/// genre is the first one reaching the highest average streams. Output is
/// sorted by genre count, highest first, ties keeping artist encounter order.
pub fn cross_genre_artists(records: &[SongRecord]) -> Vec<ArtistDiversityEntry> {
    let mut entries: Vec<ArtistDiversityEntry> = group_by_artist_and_genre(records)
        .into_iter()
        .filter(|(_, genres)| genres.len() >= MIN_GENRES)
        .filter_map(|(artist, genres)| summarize_artist(artist, &genres))
        .collect();

    entries.sort_by(|a, b| b.genre_count.cmp(&a.genre_count));
    entries
}

/// Records per (artist, genre) pair, both levels in first-encountered order
fn group_by_artist_and_genre<'a>(records: &'a [SongRecord]) -> Grouped<String, GenreGroups<'a>> {
    group_by(
        records,
        |song| song.artist.clone(),
        |genres: &mut GenreGroups<'a>, song| {
            genres.entry_or_default(song.genre.clone()).push(song);
        },
    )
}

fn summarize_artist(
    artist: String,
    genres: &GenreGroups<'_>,
) -> Option<ArtistDiversityEntry> {
    let (best_genre, best_avg) = genres
        .iter()
        .map(|(genre, songs)| {
            let total: u64 = songs.iter().map(|song| song.streams).sum();
            (genre, mean(total as f64, songs.len()))
        })
        .reduce(|best, current| if current.1 > best.1 { current } else { best })?;

    Some(ArtistDiversityEntry {
        artist,
        genres: genres.keys().cloned().collect(),
        genre_count: genres.len(),
        best_genre: best_genre.clone(),
        best_genre_avg_streams: ListeningScoring::round_whole(best_avg),
    })
}

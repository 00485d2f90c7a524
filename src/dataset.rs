use crate::models::SongRecord;
use std::path::Path;
use thiserror::Error;

/// The fixed listening dataset shipped with the application
const BUILTIN_DATA: &str = include_str!("../data/listening_data.json");

/// Top of the expected rating scale
pub const MAX_RATING: f64 = 5.0;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid record #{index} ({title:?}): field `{field}` {reason}")]
    InvalidRecord {
        index: usize,
        title: String,
        field: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DatasetError>;

/// Load the built-in dataset
pub fn builtin() -> Result<Vec<SongRecord>> {
    log::debug!("Loading built-in listening dataset");
    parse(BUILTIN_DATA)
}

/// Load a dataset from a JSON array file
pub fn load_from_file(path: &Path) -> Result<Vec<SongRecord>> {
    log::debug!("Loading listening dataset from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Parse and validate a JSON array of records, keeping its order
pub fn parse(json: &str) -> Result<Vec<SongRecord>> {
    let records: Vec<SongRecord> = serde_json::from_str(json)?;
    validate(&records)?;
    log::info!("Loaded {} listening records", records.len());
    Ok(records)
}

/// Fail on the first record that cannot be reported on
pub fn validate(records: &[SongRecord]) -> Result<()> {
    for (index, song) in records.iter().enumerate() {
        let invalid = |field: &'static str, reason: String| DatasetError::InvalidRecord {
            index,
            title: song.title.clone(),
            field,
            reason,
        };

        if song.title.trim().is_empty() {
            return Err(invalid("title", "must not be empty".to_string()));
        }

        if !song.rating.is_finite() {
            return Err(invalid("rating", format!("must be a finite number, got {}", song.rating)));
        }

        if !(0.0..=MAX_RATING).contains(&song.rating) {
            log::warn!(
                "Record #{index} ({:?}) has rating {} outside 0-{MAX_RATING}",
                song.title,
                song.rating
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_loads() {
        let records = builtin().unwrap();
        assert_eq!(records.len(), 30);
        assert_eq!(records[0].title, "Midnight Drive");
        assert_eq!(records[0].streams, 4_200_000);
    }

    #[test]
    fn test_parse_keeps_order() {
        let json = r#"[
            {"title": "B", "artist": "X", "genre": "pop", "streams": 2, "rating": 4.0, "duration": 200},
            {"title": "A", "artist": "Y", "genre": "rock", "streams": 1, "rating": 3.5, "duration": 190}
        ]"#;
        let records = parse(json).unwrap();
        let titles: Vec<&str> = records.iter().map(|song| song.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_field_names_field() {
        let json = r#"[{"title": "A", "artist": "X", "genre": "pop", "rating": 4.0, "duration": 200}]"#;
        let err = parse(json).unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
        assert!(err.to_string().contains("streams"), "unexpected message: {err}");
    }

    #[test]
    fn test_negative_streams_rejected() {
        let json = r#"[{"title": "A", "artist": "X", "genre": "pop", "streams": -5, "rating": 4.0, "duration": 200}]"#;
        assert!(matches!(parse(json), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn test_empty_title_rejected() {
        let records = vec![
            SongRecord::new("Fine", "X", "pop", 1, 4.0, 200),
            SongRecord::new(" ", "X", "pop", 1, 4.0, 200),
        ];
        match validate(&records) {
            Err(DatasetError::InvalidRecord { index, field, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "title");
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_artist_and_genre_are_valid_keys() {
        let records = vec![SongRecord::new("Anonymous", "", "", 1, 4.0, 200)];
        assert!(validate(&records).is_ok());
    }

    #[test]
    fn test_rating_above_scale_accepted() {
        let json = r#"[{"title": "A", "artist": "X", "genre": "pop", "streams": 2000000, "rating": 5.2, "duration": 200}]"#;
        let records = parse(json).unwrap();
        assert_eq!(records[0].rating, 5.2);

        let records = vec![SongRecord::new("Loud", "X", "pop", 1, 5.5, 200)];
        assert!(validate(&records).is_ok());
    }

    #[test]
    fn test_non_finite_rating_rejected() {
        let records = vec![SongRecord::new("Broken", "X", "pop", 1, f64::NAN, 200)];
        let err = validate(&records).unwrap_err();
        assert!(err.to_string().contains("`rating`"), "unexpected message: {err}");

        let records = vec![SongRecord::new("Endless", "X", "pop", 1, f64::INFINITY, 200)];
        assert!(validate(&records).is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = load_from_file(Path::new("/nonexistent/listening.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}

use std::collections::HashMap;

use thiserror::Error;

const GENRE_DATA: &str = include_str!("data/genre.json");
const MOOD_DATA: &str = include_str!("data/mood.json");

pub const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Expert"];

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Invalid genre list: {0}")]
    Genres(#[source] serde_json::Error),

    #[error("Invalid mood table: {0}")]
    Moods(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct OptionStore {
    genres: Vec<String>,
    moods: HashMap<String, Vec<String>>,
    levels: Vec<String>,
}

impl Default for OptionStore {
    fn default() -> Self {
        Self::new(Vec::new(), HashMap::new())
    }
}

impl OptionStore {
    pub fn new(genres: Vec<String>, moods: HashMap<String, Vec<String>>) -> Self {
        Self {
            genres,
            moods,
            levels: LEVELS.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn builtin() -> Result<Self, OptionsError> {
        Self::from_json(GENRE_DATA, MOOD_DATA)
    }

    pub fn from_json(genres: &str, moods: &str) -> Result<Self, OptionsError> {
        let genres = serde_json::from_str(genres).map_err(OptionsError::Genres)?;
        let moods = serde_json::from_str(moods).map_err(OptionsError::Moods)?;
        Ok(Self::new(genres, moods))
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Moods configured for `genre`; empty when the genre is unset or unknown.
    pub fn moods_for(&self, genre: &str) -> &[String] {
        self.moods.get(genre).map(Vec::as_slice).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_parses() {
        let store = OptionStore::builtin().unwrap();
        assert!(store.genres().iter().any(|g| g == "Fantasy"));
        assert!(store.genres().iter().any(|g| g == "Sci-Fi"));
        assert!(store.moods_for("Sci-Fi").iter().any(|m| m == "Curious"));
    }

    #[test]
    fn every_builtin_genre_has_moods() {
        let store = OptionStore::builtin().unwrap();
        for genre in store.genres() {
            assert!(!store.moods_for(genre).is_empty(), "{genre} has no moods");
        }
    }

    #[test]
    fn moods_follow_the_configured_table() {
        let store = OptionStore::from_json(
            r#"["Fantasy", "Poetry"]"#,
            r#"{"Fantasy": ["Epic", "Dark"]}"#,
        )
        .unwrap();

        assert_eq!(store.moods_for("Fantasy"), ["Epic", "Dark"]);
        assert!(store.moods_for("Poetry").is_empty());
        assert!(store.moods_for("").is_empty());
        assert!(store.moods_for("fantasy").is_empty());
    }

    #[test]
    fn levels_are_fixed() {
        let store = OptionStore::default();
        assert_eq!(store.levels(), ["Beginner", "Intermediate", "Expert"]);
    }

    #[test]
    fn malformed_data_is_reported() {
        assert!(matches!(
            OptionStore::from_json("{}", "{}"),
            Err(OptionsError::Genres(_))
        ));
        assert!(matches!(
            OptionStore::from_json("[]", "[1, 2]"),
            Err(OptionsError::Moods(_))
        ));
    }
}

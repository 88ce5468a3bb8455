use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameEngineError;

/// Deserialize year from string or int (backend rows store it either way)
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearValue {
        Int(i32),
        String(String),
        Null,
    }

    match Option::<YearValue>::deserialize(deserializer)? {
        Some(YearValue::Int(i)) => Ok(Some(i)),
        Some(YearValue::String(s)) if s.trim().is_empty() => Ok(None),
        Some(YearValue::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| Error::custom(format!("Invalid year string: {}", s))),
        Some(YearValue::Null) | None => Ok(None),
    }
}

/// Film industry a movie belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Hollywood,
    Bollywood,
    #[default]
    #[serde(other)]
    Other,
}

/// Which movies a game draws its frames from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Hollywood,
    Bollywood,
    #[default]
    Mixed,
}

impl GameMode {
    /// Whether a movie of `genre` can appear in this mode
    pub fn admits(&self, genre: Genre) -> bool {
        match self {
            GameMode::Hollywood => genre == Genre::Hollywood,
            GameMode::Bollywood => genre == Genre::Bollywood,
            GameMode::Mixed => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Hollywood => "hollywood",
            GameMode::Bollywood => "bollywood",
            GameMode::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = GameEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hollywood" => Ok(GameMode::Hollywood),
            "bollywood" => Ok(GameMode::Bollywood),
            "mixed" => Ok(GameMode::Mixed),
            other => Err(GameEngineError::Other(format!(
                "Unknown game mode '{}' (expected hollywood, bollywood or mixed)",
                other
            ))),
        }
    }
}

/// Movie metadata attached to a frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Backend row ID
    #[serde(default)]
    pub id: String,

    /// TMDB ID
    #[serde(default)]
    pub tmdb_id: Option<u64>,

    /// Canonical (usually English) title
    #[serde(default)]
    pub title: String,

    /// Native-language title
    #[serde(default)]
    pub original_title: Option<String>,

    /// Release year
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_year")]
    pub year: Option<i32>,

    #[serde(default)]
    pub genre: Genre,
}

impl Movie {
    /// Create a new Movie with required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tmdb_id: None,
            title: title.into(),
            original_title: None,
            year: None,
            genre: Genre::Other,
        }
    }

    pub fn with_original_title(mut self, original_title: impl Into<String>) -> Self {
        self.original_title = Some(original_title.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    /// Spellings a player may give for this movie.
    ///
    /// Canonical title, original title and `"Title (Year)"`, in that order,
    /// with blank entries and duplicates removed.
    pub fn acceptable_titles(&self) -> Vec<String> {
        let composite = self.year.map(|year| format!("{} ({})", self.title, year));

        let mut titles: Vec<String> = Vec::with_capacity(3);
        for candidate in [Some(self.title.clone()), self.original_title.clone(), composite]
            .into_iter()
            .flatten()
        {
            if !candidate.trim().is_empty() && !titles.contains(&candidate) {
                titles.push(candidate);
            }
        }
        titles
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if let Some(year) = self.year {
            format!("{} ({})", self.title, year)
        } else {
            self.title.clone()
        }
    }
}

/// A playable screenshot and the movie it comes from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    #[serde(default)]
    pub id: String,

    /// Screenshot location
    #[serde(default)]
    pub image_url: String,

    #[serde(alias = "movies")]
    pub movie: Movie,
}

impl Frame {
    pub fn new(id: impl Into<String>, image_url: impl Into<String>, movie: Movie) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            movie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptable_titles() {
        let movie = Movie::new("1", "Spirited Away")
            .with_original_title("Sen to Chihiro no Kamikakushi")
            .with_year(2001);

        assert_eq!(
            movie.acceptable_titles(),
            vec![
                "Spirited Away".to_string(),
                "Sen to Chihiro no Kamikakushi".to_string(),
                "Spirited Away (2001)".to_string(),
            ]
        );
    }

    #[test]
    fn test_acceptable_titles_dedup_and_blank() {
        let movie = Movie::new("2", "Inception")
            .with_original_title("Inception")
            .with_year(2010);
        assert_eq!(
            movie.acceptable_titles(),
            vec!["Inception".to_string(), "Inception (2010)".to_string()]
        );

        let movie = Movie::new("3", "Inception").with_original_title("  ");
        assert_eq!(movie.acceptable_titles(), vec!["Inception".to_string()]);

        let movie = Movie::new("4", "");
        assert!(movie.acceptable_titles().is_empty());
    }

    #[test]
    fn test_game_mode_admits() {
        assert!(GameMode::Mixed.admits(Genre::Other));
        assert!(GameMode::Hollywood.admits(Genre::Hollywood));
        assert!(!GameMode::Hollywood.admits(Genre::Bollywood));
        assert!(GameMode::Bollywood.admits(Genre::Bollywood));
    }

    #[test]
    fn test_game_mode_parse() {
        assert_eq!("Bollywood".parse::<GameMode>().unwrap(), GameMode::Bollywood);
        assert_eq!(" mixed ".parse::<GameMode>().unwrap(), GameMode::Mixed);
        assert!("tollywood".parse::<GameMode>().is_err());
        assert_eq!(GameMode::Hollywood.to_string(), "hollywood");
    }

    #[test]
    fn test_frame_from_backend_row() {
        let json = r#"{
            "id": "f-1",
            "image_url": "https://cdn.example/frames/f-1.jpg",
            "movies": {
                "id": "m-1",
                "tmdb_id": 27205,
                "title": "Inception",
                "original_title": null,
                "year": "2010",
                "genre": "hollywood"
            }
        }"#;

        let frame: Frame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.movie.title, "Inception");
        assert_eq!(frame.movie.year, Some(2010));
        assert_eq!(frame.movie.genre, Genre::Hollywood);
        assert_eq!(frame.movie.original_title, None);
    }

    #[test]
    fn test_unknown_genre() {
        let json = r#"{"title": "Parasite", "year": 2019, "genre": "korean"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.genre, Genre::Other);
        assert_eq!(movie.display_name(), "Parasite (2019)");
    }
}

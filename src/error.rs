use thiserror::Error;

use crate::core::GameMode;

/// Main error type for the game engine
///
/// Answer matching and scoring never fail; errors only come from loading
/// decks and configuration, or from driving a session out of order.
#[derive(Error, Debug)]
pub enum GameEngineError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Deck has nothing to play for the requested mode
    #[error("No frames available for game mode '{0}'")]
    NoFrames(GameMode),

    /// Blank answer submitted
    #[error("Answer is empty")]
    EmptyAnswer,

    /// Session action not allowed in the current frame phase
    #[error("Cannot {action} while frame is {phase}")]
    InvalidState {
        action: &'static str,
        phase: &'static str,
    },

    /// Session already finished
    #[error("Game session is already complete")]
    SessionComplete,

    /// Invalid configuration values
    #[error("Config error: {0}")]
    Config(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for GameEngineError {
    fn from(s: String) -> Self {
        GameEngineError::Other(s)
    }
}

impl From<&str> for GameEngineError {
    fn from(s: &str) -> Self {
        GameEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GameEngineError>;

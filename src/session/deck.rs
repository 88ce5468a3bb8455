use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Frame, GameMode};
use crate::error::Result;

/// Pool of frames a game draws from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    frames: Vec<Frame>,
}

impl Deck {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Parse a JSON array of frames
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON deck file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let deck = Self::from_json(&content)?;
        tracing::debug!("Loaded {} frames from {}", deck.len(), path.as_ref().display());
        Ok(deck)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames playable in `mode`
    pub fn for_mode(&self, mode: GameMode) -> Vec<Frame> {
        self.frames
            .iter()
            .filter(|frame| mode.admits(frame.movie.genre))
            .cloned()
            .collect()
    }
}

impl From<Vec<Frame>> for Deck {
    fn from(frames: Vec<Frame>) -> Self {
        Self::new(frames)
    }
}

use serde::{Deserialize, Serialize};

use crate::core::GameMode;

/// Letter grade for a finished game, based on accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_accuracy(accuracy: u32) -> Self {
        match accuracy {
            a if a >= 90 => Grade::S,
            a if a >= 80 => Grade::APlus,
            a if a >= 70 => Grade::A,
            a if a >= 60 => Grade::B,
            a if a >= 50 => Grade::C,
            _ => Grade::D,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// End-of-game results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub score: u32,
    pub correct: u32,
    pub total: u32,
    /// Correct answers as a rounded percentage of frames played
    pub accuracy: u32,
    pub max_possible: u32,
    /// Score as a rounded percentage of `max_possible`
    pub score_percentage: u32,
    pub grade: Grade,
}

impl SessionSummary {
    pub fn new(
        mode: GameMode,
        score: u32,
        correct: u32,
        total: u32,
        max_points_per_frame: u32,
    ) -> Self {
        let accuracy = percent(correct, total);
        let max_possible = total.saturating_mul(max_points_per_frame);
        Self {
            mode,
            score,
            correct,
            total,
            accuracy,
            max_possible,
            score_percentage: percent(score, max_possible),
            grade: Grade::from_accuracy(accuracy),
        }
    }

    /// Shareable one-liner
    pub fn share_text(&self) -> String {
        format!(
            "I scored {} points with {}% accuracy in Guess the Frame! 🎬\n\nCan you beat my score?",
            self.score, self.accuracy
        )
    }
}

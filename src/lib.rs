//! # Guess the Frame Engine
//!
//! Answer matching and scoring for a movie trivia game where players name
//! the film behind a blurred screenshot:
//! - Title normalization (case, leading article, punctuation, whitespace)
//! - Three-tier answer matching: exact → fuzzy (Levenshtein) → partial
//! - Time-bonus scoring and end-of-game grading
//! - An explicit-state game session over a shuffled frame deck
//! - Multiple interfaces: Rust library, Python bindings, CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use guess_frame_engine::{match_answer, score_for_attempt, MatchType};
//!
//! let verdict = match_answer("incepton", &["Inception"]);
//! assert_eq!(verdict.match_type(), MatchType::Fuzzy);
//! assert_eq!(verdict.confidence(), 89);
//!
//! let points = score_for_attempt(4.2, verdict.is_correct());
//! assert_eq!(points, 15);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod matching;
pub mod scoring;
pub mod session;

// Re-export primary types
pub use config::GameConfig;
pub use crate::core::{Frame, GameMode, Genre, MatchReport, MatchType, MatchVerdict, Movie};
pub use error::{GameEngineError, Result};
pub use matching::{levenshtein, match_answer, normalize, AnswerMatcher, MatchOptions};
pub use scoring::{score_for_attempt, time_bonus, Grade, Praise, ScoringRules, SessionSummary};
pub use session::{Countdown, Deck, FrameOutcome, FrameRecord, GameSession, Progress};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

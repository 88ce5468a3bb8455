//! Single-player game session.
//!
//! The session owns all per-game state (frame order, phase, score) and the
//! caller drives it one action at a time. Time is measured by the caller and
//! passed in, so the session itself never reads a clock except to stamp
//! records.

pub mod deck;
pub mod timer;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::core::{Frame, GameMode, MatchVerdict};
use crate::error::{GameEngineError, Result};
use crate::matching::AnswerMatcher;
use crate::scoring::{Praise, ScoringRules, SessionSummary};

pub use deck::Deck;
pub use timer::{format_clock, Countdown, Urgency};

/// How a frame was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameOutcome {
    /// Player submitted an answer in time
    Answered,
    /// Countdown ran out
    TimedOut,
    /// Player asked for the answer before guessing
    Forfeited,
}

/// What happened on one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame_id: String,
    /// 1-based position in the game
    pub frame_number: usize,
    pub user_answer: Option<String>,
    pub verdict: MatchVerdict,
    /// Seconds from reveal to resolution
    pub time_taken: f64,
    pub points: u32,
    pub outcome: FrameOutcome,
    pub revealed_at: DateTime<Utc>,
    pub answered_at: DateTime<Utc>,
}

impl FrameRecord {
    pub fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }

    pub fn praise(&self) -> Option<Praise> {
        Praise::for_points(self.points)
    }
}

/// Result of moving past a resolved frame
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    Next { frame_number: usize },
    Complete(SessionSummary),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Revealed { revealed_at: DateTime<Utc> },
    Resolved,
    Complete,
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Hidden => "hidden",
            Phase::Revealed { .. } => "revealed",
            Phase::Resolved => "resolved",
            Phase::Complete => "complete",
        }
    }
}

/// One game: a shuffled run of frames, each revealed, answered and scored
#[derive(Debug)]
pub struct GameSession {
    mode: GameMode,
    frames: Vec<Frame>,
    current: usize,
    phase: Phase,
    score: u32,
    correct: u32,
    records: Vec<FrameRecord>,
    matcher: AnswerMatcher,
    rules: ScoringRules,
    countdown: Countdown,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Draw up to `frames_per_game` random frames for `mode` from the deck
    pub fn start<R: Rng + ?Sized>(
        deck: &Deck,
        mode: GameMode,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;

        let mut frames = deck.for_mode(mode);
        frames.shuffle(rng);
        frames.truncate(config.frames_per_game);
        if frames.is_empty() {
            return Err(GameEngineError::NoFrames(mode));
        }

        tracing::info!("🎬 Starting {} game with {} frames", mode, frames.len());

        Ok(Self {
            mode,
            frames,
            current: 0,
            phase: Phase::Hidden,
            score: 0,
            correct: 0,
            records: Vec::new(),
            matcher: AnswerMatcher::new(config.matching),
            rules: config.scoring.clone(),
            countdown: Countdown::new(config.timer_seconds),
            started_at: Utc::now(),
            completed_at: None,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Frame in play, `None` once the game is complete
    pub fn current_frame(&self) -> Option<&Frame> {
        if self.phase == Phase::Complete {
            return None;
        }
        self.frames.get(self.current)
    }

    /// 1-based number of the frame in play
    pub fn frame_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.phase, Phase::Revealed { .. })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Unblur the current frame and start its countdown
    pub fn reveal(&mut self) -> Result<()> {
        match self.phase {
            Phase::Hidden => {
                self.phase = Phase::Revealed {
                    revealed_at: Utc::now(),
                };
                tracing::debug!("Revealed frame {}/{}", self.frame_number(), self.total_frames());
                Ok(())
            }
            Phase::Complete => Err(GameEngineError::SessionComplete),
            other => Err(GameEngineError::InvalidState {
                action: "reveal the frame",
                phase: other.name(),
            }),
        }
    }

    /// Check a guess made `elapsed_secs` after the reveal.
    ///
    /// Blank answers are rejected and leave the frame open. A guess at or
    /// past the countdown is recorded as a time-out.
    pub fn submit(&mut self, answer: &str, elapsed_secs: f64) -> Result<FrameRecord> {
        let revealed_at = self.revealed_at("submit an answer")?;

        if answer.trim().is_empty() {
            return Err(GameEngineError::EmptyAnswer);
        }

        if self.countdown.is_expired(elapsed_secs) {
            tracing::debug!("Answer arrived after {:.1}s, counting as time-out", elapsed_secs);
            return self.time_up();
        }

        let frame = &self.frames[self.current];
        let verdict = self.matcher.check(answer, &frame.movie.acceptable_titles());
        let points = self.rules.score(elapsed_secs, verdict.is_correct());

        tracing::debug!(
            "Frame {}: '{}' → {} (+{} pts)",
            self.frame_number(),
            answer,
            verdict.report().display(),
            points
        );

        if verdict.is_correct() {
            self.score = self.score.saturating_add(points);
            self.correct += 1;
        }

        Ok(self.resolve(
            Some(answer.to_string()),
            verdict,
            elapsed_secs,
            points,
            FrameOutcome::Answered,
            revealed_at,
        ))
    }

    /// The countdown ran out without an answer
    pub fn time_up(&mut self) -> Result<FrameRecord> {
        let revealed_at = self.revealed_at("time out")?;
        let time_taken = self.countdown.duration_secs() as f64;

        Ok(self.resolve(
            None,
            MatchVerdict::NoMatch,
            time_taken,
            0,
            FrameOutcome::TimedOut,
            revealed_at,
        ))
    }

    /// Canonical title of the current frame.
    ///
    /// Asking while the countdown is running gives the frame up for 0 points.
    pub fn show_answer(&mut self) -> Result<String> {
        match self.phase {
            Phase::Revealed { revealed_at } => {
                let time_taken = (Utc::now() - revealed_at)
                    .to_std()
                    .map(|elapsed| elapsed.as_secs_f64())
                    .unwrap_or(0.0);
                self.resolve(
                    None,
                    MatchVerdict::NoMatch,
                    time_taken,
                    0,
                    FrameOutcome::Forfeited,
                    revealed_at,
                );
            }
            Phase::Resolved => {}
            Phase::Complete => return Err(GameEngineError::SessionComplete),
            Phase::Hidden => {
                return Err(GameEngineError::InvalidState {
                    action: "show the answer",
                    phase: Phase::Hidden.name(),
                })
            }
        }

        Ok(self.frames[self.current].movie.title.clone())
    }

    /// Move to the next frame, or finish the game after the last one.
    ///
    /// A hidden frame may be skipped; a revealed one must be resolved first.
    pub fn next_frame(&mut self) -> Result<Progress> {
        match self.phase {
            Phase::Hidden | Phase::Resolved => {}
            Phase::Complete => return Err(GameEngineError::SessionComplete),
            other => {
                return Err(GameEngineError::InvalidState {
                    action: "move to the next frame",
                    phase: other.name(),
                })
            }
        }

        if self.current + 1 >= self.frames.len() {
            self.phase = Phase::Complete;
            self.completed_at = Some(Utc::now());

            let summary = self.summary();
            tracing::info!(
                "🏁 Game complete: {} pts, {}/{} correct, grade {}",
                summary.score,
                summary.correct,
                summary.total,
                summary.grade
            );
            return Ok(Progress::Complete(summary));
        }

        self.current += 1;
        self.phase = Phase::Hidden;
        Ok(Progress::Next {
            frame_number: self.frame_number(),
        })
    }

    /// Results so far, measured against every frame in the game
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(
            self.mode,
            self.score,
            self.correct,
            self.frames.len() as u32,
            self.rules.max_points(),
        )
    }

    fn revealed_at(&self, action: &'static str) -> Result<DateTime<Utc>> {
        match self.phase {
            Phase::Revealed { revealed_at } => Ok(revealed_at),
            Phase::Complete => Err(GameEngineError::SessionComplete),
            other => Err(GameEngineError::InvalidState {
                action,
                phase: other.name(),
            }),
        }
    }

    fn resolve(
        &mut self,
        user_answer: Option<String>,
        verdict: MatchVerdict,
        time_taken: f64,
        points: u32,
        outcome: FrameOutcome,
        revealed_at: DateTime<Utc>,
    ) -> FrameRecord {
        let record = FrameRecord {
            frame_id: self.frames[self.current].id.clone(),
            frame_number: self.frame_number(),
            user_answer,
            verdict,
            time_taken,
            points,
            outcome,
            revealed_at,
            answered_at: Utc::now(),
        };

        self.records.push(record.clone());
        self.phase = Phase::Resolved;
        record
    }
}

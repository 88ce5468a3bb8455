pub mod grade;

use serde::{Deserialize, Serialize};

pub use grade::{Grade, SessionSummary};

/// Points for any correct answer
pub const BASE_POINTS: u32 = 10;

/// A time bonus awarded when the answer comes in within `within_secs`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusTier {
    pub within_secs: f64,
    pub bonus: u32,
}

/// Point rules for a correct answer: base award plus a time bonus.
///
/// Bonus tiers are checked in ascending `within_secs` order and the first
/// tier whose bound is not exceeded applies (bounds are inclusive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub base_points: u32,
    pub bonus_tiers: Vec<BonusTier>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_points: BASE_POINTS,
            bonus_tiers: vec![
                BonusTier {
                    within_secs: 5.0,
                    bonus: 5,
                },
                BonusTier {
                    within_secs: 10.0,
                    bonus: 2,
                },
            ],
        }
    }
}

impl ScoringRules {
    /// Bonus for answering after `elapsed_secs`; 0 past the last tier
    pub fn time_bonus(&self, elapsed_secs: f64) -> u32 {
        self.bonus_tiers
            .iter()
            .find(|tier| elapsed_secs <= tier.within_secs)
            .map(|tier| tier.bonus)
            .unwrap_or(0)
    }

    /// Points awarded for one attempt. Wrong answers score 0 regardless of time.
    pub fn score(&self, elapsed_secs: f64, is_correct: bool) -> u32 {
        if !is_correct {
            return 0;
        }
        self.base_points.saturating_add(self.time_bonus(elapsed_secs))
    }

    /// Best possible award for a single frame
    pub fn max_points(&self) -> u32 {
        let best_bonus = self.bonus_tiers.iter().map(|tier| tier.bonus).max().unwrap_or(0);
        self.base_points.saturating_add(best_bonus)
    }
}

/// Points for one attempt under the default rules
pub fn score_for_attempt(elapsed_secs: f64, is_correct: bool) -> u32 {
    ScoringRules::default().score(elapsed_secs, is_correct)
}

/// Time bonus under the default rules (for display next to the score)
pub fn time_bonus(elapsed_secs: f64) -> u32 {
    ScoringRules::default().time_bonus(elapsed_secs)
}

/// Feedback shown when points are earned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Praise {
    Amazing,
    Great,
    Nice,
}

impl Praise {
    /// `None` when nothing was earned
    pub fn for_points(points: u32) -> Option<Self> {
        match points {
            0 => None,
            p if p >= 15 => Some(Praise::Amazing),
            p if p >= 12 => Some(Praise::Great),
            _ => Some(Praise::Nice),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Praise::Amazing => "🔥 AMAZING!",
            Praise::Great => "⚡ GREAT!",
            Praise::Nice => "👍 NICE!",
        }
    }
}

pub mod levenshtein;
pub mod normalize;
pub mod tiers;

use serde::{Deserialize, Serialize};

use crate::core::MatchVerdict;

pub use levenshtein::levenshtein;
pub use normalize::{normalize, Normalizer};
pub use tiers::{ExactTier, FuzzyTier, PartialTier};

/// Minimum edit-distance similarity for a fuzzy match
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Minimum length ratio for a containment match
pub const PARTIAL_THRESHOLD: f64 = 0.7;

/// One matching strategy, tried in a fixed order by [`AnswerMatcher`]
pub trait MatchTier: Send + Sync + std::fmt::Debug {
    /// Compare a normalized answer against normalized, non-empty titles.
    /// `None` hands over to the next tier.
    fn check(&self, answer: &str, candidates: &[String]) -> Option<MatchVerdict>;

    /// Get tier name for logging
    fn name(&self) -> &str;
}

/// Matching options/configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub fuzzy_threshold: f64,
    pub partial_threshold: f64,
    pub fold_diacritics: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: FUZZY_THRESHOLD,
            partial_threshold: PARTIAL_THRESHOLD,
            fold_diacritics: false,
        }
    }
}

/// Decides whether a free-text guess names one of a movie's titles.
///
/// Tiers run in order (exact, fuzzy, partial) and the first tier that
/// accepts the answer decides the verdict. Holds no mutable state, so one
/// matcher can be shared freely across threads.
#[derive(Debug)]
pub struct AnswerMatcher {
    normalizer: Normalizer,
    tiers: Vec<Box<dyn MatchTier>>,
}

impl AnswerMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            normalizer: Normalizer {
                fold_diacritics: options.fold_diacritics,
            },
            tiers: vec![
                Box::new(ExactTier),
                Box::new(FuzzyTier::new(options.fuzzy_threshold)),
                Box::new(PartialTier::new(options.partial_threshold)),
            ],
        }
    }

    /// Match `user_answer` against every acceptable spelling of the title
    pub fn check<S: AsRef<str>>(&self, user_answer: &str, acceptable_titles: &[S]) -> MatchVerdict {
        if user_answer.is_empty() || acceptable_titles.is_empty() {
            return MatchVerdict::NoMatch;
        }

        let answer = self.normalizer.normalize(user_answer);
        let candidates: Vec<String> = acceptable_titles
            .iter()
            .map(|title| self.normalizer.normalize(title.as_ref()))
            .filter(|title| !title.is_empty())
            .collect();

        for tier in &self.tiers {
            if let Some(verdict) = tier.check(&answer, &candidates) {
                tracing::debug!(
                    "Tier {} matched '{}' ({}%)",
                    tier.name(),
                    answer,
                    verdict.confidence()
                );
                return verdict;
            }
        }

        tracing::debug!("No tier matched '{}' against {} titles", answer, candidates.len());
        MatchVerdict::NoMatch
    }

    /// Tier names in evaluation order
    pub fn tier_names(&self) -> Vec<&str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

impl Default for AnswerMatcher {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}

/// Match an answer with the default thresholds
pub fn match_answer<S: AsRef<str>>(user_answer: &str, acceptable_titles: &[S]) -> MatchVerdict {
    AnswerMatcher::default().check(user_answer, acceptable_titles)
}

use crate::core::MatchVerdict;
use crate::matching::{levenshtein, MatchTier};

fn to_confidence(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Normalized answer equals one of the normalized titles
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTier;

impl MatchTier for ExactTier {
    fn check(&self, answer: &str, candidates: &[String]) -> Option<MatchVerdict> {
        candidates
            .iter()
            .any(|candidate| candidate == answer)
            .then_some(MatchVerdict::Exact)
    }

    fn name(&self) -> &str {
        "exact"
    }
}

/// Edit-distance similarity `1 - d / max_len` at or above `threshold`.
///
/// The first title in input order that qualifies wins, even if a later one
/// would score higher.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyTier {
    pub threshold: f64,
}

impl FuzzyTier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl MatchTier for FuzzyTier {
    fn check(&self, answer: &str, candidates: &[String]) -> Option<MatchVerdict> {
        let answer_len = answer.chars().count();

        for candidate in candidates {
            let max_len = answer_len.max(candidate.chars().count());
            if max_len == 0 {
                continue;
            }

            let distance = levenshtein(answer, candidate);
            let similarity = 1.0 - distance as f64 / max_len as f64;

            if similarity >= self.threshold {
                return Some(MatchVerdict::Fuzzy {
                    confidence: to_confidence(similarity),
                });
            }
        }
        None
    }

    fn name(&self) -> &str {
        "fuzzy"
    }
}

/// One string contains the other and `shorter / longer` is at or above
/// `threshold`. First qualifying title in input order wins.
#[derive(Debug, Clone, Copy)]
pub struct PartialTier {
    pub threshold: f64,
}

impl PartialTier {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl MatchTier for PartialTier {
    fn check(&self, answer: &str, candidates: &[String]) -> Option<MatchVerdict> {
        let answer_len = answer.chars().count();

        for candidate in candidates {
            if !(candidate.contains(answer) || answer.contains(candidate.as_str())) {
                continue;
            }

            let candidate_len = candidate.chars().count();
            let longer = answer_len.max(candidate_len);
            let shorter = answer_len.min(candidate_len);
            if shorter == 0 {
                continue;
            }

            let similarity = shorter as f64 / longer as f64;
            if similarity >= self.threshold {
                return Some(MatchVerdict::Partial {
                    confidence: to_confidence(similarity),
                });
            }
        }
        None
    }

    fn name(&self) -> &str {
        "partial"
    }
}

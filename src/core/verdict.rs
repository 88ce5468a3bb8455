use serde::{Deserialize, Serialize};

/// How an answer was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Equal after normalization
    Exact,
    /// Within the edit-distance threshold
    Fuzzy,
    /// One title contains the other
    Partial,
    /// No tier accepted the answer
    None,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Fuzzy => "fuzzy",
            MatchType::Partial => "partial",
            MatchType::None => "none",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of matching one answer against a movie's acceptable titles.
///
/// Each correct variant carries its own confidence (0-100). An exact match
/// is always 100 and a miss is always 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match_type", rename_all = "lowercase")]
pub enum MatchVerdict {
    Exact,
    Fuzzy { confidence: u8 },
    Partial { confidence: u8 },
    #[default]
    #[serde(rename = "none")]
    NoMatch,
}

impl MatchVerdict {
    pub fn is_correct(&self) -> bool {
        !matches!(self, MatchVerdict::NoMatch)
    }

    pub fn confidence(&self) -> u8 {
        match self {
            MatchVerdict::Exact => 100,
            MatchVerdict::Fuzzy { confidence } | MatchVerdict::Partial { confidence } => {
                *confidence
            }
            MatchVerdict::NoMatch => 0,
        }
    }

    pub fn match_type(&self) -> MatchType {
        match self {
            MatchVerdict::Exact => MatchType::Exact,
            MatchVerdict::Fuzzy { .. } => MatchType::Fuzzy,
            MatchVerdict::Partial { .. } => MatchType::Partial,
            MatchVerdict::NoMatch => MatchType::None,
        }
    }

    /// Flattened view for display and JSON output
    pub fn report(&self) -> MatchReport {
        MatchReport {
            is_correct: self.is_correct(),
            confidence: self.confidence(),
            match_type: self.match_type(),
        }
    }
}

/// Flat `{is_correct, confidence, match_type}` shape of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub is_correct: bool,
    pub confidence: u8,
    pub match_type: MatchType,
}

impl MatchReport {
    /// Get display string for logging
    pub fn display(&self) -> String {
        if self.is_correct {
            format!("correct ({}, {}%)", self.match_type, self.confidence)
        } else {
            "incorrect".to_string()
        }
    }
}

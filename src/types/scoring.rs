use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

pub const SCORE_MIN: Score = 0.0;
pub const SCORE_MAX: Score = 100.0;

/// Named weighting presets. Both are kept on purpose: card badges use
/// `Display`, ranking and stored-score maintenance use `Matching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Display,
    Matching,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Display, Preset::Matching];

    pub fn weights(self) -> Weights {
        match self {
            Self::Display => DISPLAY_WEIGHTS,
            Self::Matching => MATCHING_WEIGHTS,
        }
    }

    /// Whether callers of this preset expect an integer result.
    pub fn rounds_for_display(self) -> bool {
        matches!(self, Self::Display)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Matching => "matching",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub job_performance: f64,
    pub skills_experience: f64,
    pub responsiveness: f64,
    pub fairness_score: f64,
}

pub const DISPLAY_WEIGHTS: Weights = Weights {
    job_performance: 0.40,
    skills_experience: 0.30,
    responsiveness: 0.20,
    fairness_score: 0.10,
};

pub const MATCHING_WEIGHTS: Weights = Weights {
    job_performance: 0.50,
    skills_experience: 0.20,
    responsiveness: 0.15,
    fairness_score: 0.15,
};

impl Weights {
    pub fn sum(&self) -> f64 {
        self.job_performance + self.skills_experience + self.responsiveness + self.fairness_score
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.job_performance,
            self.skills_experience,
            self.responsiveness,
            self.fairness_score,
        ]
    }
}

/// A composite score already clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct MatchScore(Score);

impl MatchScore {
    pub(crate) fn from_clamped(value: Score) -> Self {
        Self(value)
    }

    /// Unrounded value, for sorting and further computation.
    pub fn value(self) -> Score {
        self.0
    }

    /// Nearest integer, halves rounding up, for badges.
    pub fn rounded(self) -> u8 {
        // value is within [0, 100], so the cast cannot truncate
        self.0.round() as u8
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Match-score computation.
//!
//! Every function here is total and pure: out-of-range metrics are clamped,
//! NaN is treated as 0, and the composite is clamped to `[0, 100]`.

pub mod skills;

use crate::types::metrics::FreelancerMetrics;
use crate::types::scoring::{MatchScore, Preset, Score, Weights, SCORE_MAX, SCORE_MIN};

pub use crate::types::metrics::clamp_metric;
pub use skills::{compute_skills_overlap_score, matched_skills};

pub fn compute_match_score(metrics: &FreelancerMetrics, preset: Preset) -> MatchScore {
    weighted_score(metrics, &preset.weights())
}

/// Score in the form the preset's consumers expect: display rounds to an
/// integer, matching keeps full precision.
pub fn compute_display_score(metrics: &FreelancerMetrics, preset: Preset) -> Score {
    let score = compute_match_score(metrics, preset);
    if preset.rounds_for_display() {
        f64::from(score.rounded())
    } else {
        score.value()
    }
}

pub fn weighted_score(metrics: &FreelancerMetrics, weights: &Weights) -> MatchScore {
    let clamped = metrics.clamped();
    let total = clamped
        .as_array()
        .iter()
        .zip(weights.as_array())
        .map(|(value, weight)| value * weight)
        .sum::<f64>();
    MatchScore::from_clamped(clamp_score(total))
}

fn clamp_score(value: Score) -> Score {
    if value.is_nan() {
        return SCORE_MIN;
    }
    value.clamp(SCORE_MIN, SCORE_MAX)
}

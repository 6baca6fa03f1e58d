//! Freelancer match scoring.
//!
//! The core is [`scoring::compute_match_score`], a total, pure weighted sum of
//! four clamped metrics under a named [`types::scoring::Preset`]. Ranking,
//! stored-score auditing and report rendering are built on top of it.

pub mod audit;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod types;

pub use scoring::{compute_display_score, compute_match_score, compute_skills_overlap_score};
pub use types::metrics::FreelancerMetrics;
pub use types::scoring::{MatchScore, Preset};

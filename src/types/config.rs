use crate::error::MatchError;
use crate::types::scoring::{Preset, Score, SCORE_MAX, SCORE_MIN};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchConfig {
    pub project: ProjectConfig,
    pub ranking: Option<RankingConfig>,
    pub audit: Option<AuditConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    pub top_n: Option<usize>,
    pub min_score: Option<Score>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    pub tolerance: Option<Score>,
    pub flag_clamped_metrics: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub preset: Option<Preset>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingOptions {
    /// 0 disables truncation.
    pub top_n: usize,
    pub min_score: Score,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_n: 5,
            min_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditOptions {
    pub tolerance: Score,
    pub flag_clamped_metrics: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.5,
            flag_clamped_metrics: true,
        }
    }
}

impl MatchConfig {
    pub fn ranking_options(&self) -> RankingOptions {
        let defaults = RankingOptions::default();
        match &self.ranking {
            Some(ranking) => RankingOptions {
                top_n: ranking.top_n.unwrap_or(defaults.top_n),
                min_score: ranking.min_score.unwrap_or(defaults.min_score),
            },
            None => defaults,
        }
    }

    pub fn audit_options(&self) -> AuditOptions {
        let defaults = AuditOptions::default();
        match &self.audit {
            Some(audit) => AuditOptions {
                tolerance: audit.tolerance.unwrap_or(defaults.tolerance),
                flag_clamped_metrics: audit
                    .flag_clamped_metrics
                    .unwrap_or(defaults.flag_clamped_metrics),
            },
            None => defaults,
        }
    }

    pub fn display_preset(&self) -> Preset {
        self.display
            .as_ref()
            .and_then(|display| display.preset)
            .unwrap_or(Preset::Display)
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.project.name.trim().is_empty() {
            return Err(MatchError::ConfigParse(
                "project.name must not be empty".to_string(),
            ));
        }

        if let Some(min_score) = self.ranking.as_ref().and_then(|ranking| ranking.min_score) {
            if !(SCORE_MIN..=SCORE_MAX).contains(&min_score) {
                return Err(MatchError::ConfigParse(
                    "ranking.min_score must be between 0.0 and 100.0".to_string(),
                ));
            }
        }

        if let Some(tolerance) = self.audit.as_ref().and_then(|audit| audit.tolerance) {
            if !(SCORE_MIN..=SCORE_MAX).contains(&tolerance) {
                return Err(MatchError::ConfigParse(
                    "audit.tolerance must be between 0.0 and 100.0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

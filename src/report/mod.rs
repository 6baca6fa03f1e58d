pub mod json;
pub mod md;
pub mod sarif;

use crate::error::{MatchError, Result};
use crate::types::report::{AuditReport, RankingReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render_ranking(report: &RankingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::ranking_to_markdown(report)),
        OutputFormat::Sarif => Err(MatchError::InvalidOption(
            "sarif output is only available for audit reports".to_string(),
        )),
    }
}

pub fn render_audit(report: &AuditReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::audit_to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(MatchError::Json),
    }
}

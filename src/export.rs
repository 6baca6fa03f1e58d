use crate::audit::snapshot::sha256_hex;
use crate::error::{MatchError, Result};
use crate::types::candidate::RankedCandidate;
use crate::types::report::RankingReport;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const RANKINGS_DIR: &str = ".freelance-match/rankings";

#[derive(Debug, Clone, Serialize)]
pub struct RankingSnapshot {
    pub version: String,
    pub generated_at: String,
    pub input_sha256: String,
    pub job_title: String,
    pub ranked: Vec<RankedCandidate>,
}

impl RankingSnapshot {
    pub fn new(report: &RankingReport, input: &[u8]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            input_sha256: sha256_hex(input),
            job_title: report.job_title.clone(),
            ranked: report.ranked.clone(),
        }
    }
}

pub fn write_ranking_snapshot(root: &Path, snapshot: &RankingSnapshot) -> Result<PathBuf> {
    let dir = root.join(RANKINGS_DIR);
    fs::create_dir_all(&dir).map_err(MatchError::Io)?;
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
    let out_path = dir.join(format!("ranking-{stamp}.json"));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&out_path, json).map_err(MatchError::Io)?;
    tracing::info!(path = %out_path.display(), "wrote ranking snapshot");
    Ok(out_path)
}

use crate::error::{MatchError, Result};
use crate::types::candidate::{Candidate, JobRequest};
use serde::Deserialize;
use std::path::Path;

/// Input for `rank`: the job analysis plus the candidate list returned for it.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingInput {
    pub job: JobRequest,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Parses a ranking input file, returning it with the raw bytes so callers can
/// fingerprint exactly what was ranked.
pub fn load_ranking_input(path: &Path) -> Result<(RankingInput, Vec<u8>)> {
    if !path.exists() {
        return Err(MatchError::PathNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let input = serde_json::from_slice(&bytes).map_err(|e| MatchError::InvalidInput {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok((input, bytes))
}

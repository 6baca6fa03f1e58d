use super::candidate::RankedCandidate;
use super::scoring::Score;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub file: Option<String>,
    pub candidate: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub job_title: String,
    pub requested_skills: Vec<String>,
    pub considered: usize,
    pub ranked: Vec<RankedCandidate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSummary {
    pub path: String,
    pub sha256: String,
    pub candidates: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditTotals {
    pub checked: usize,
    pub agreeing: usize,
    pub mismatched: usize,
    pub missing_stored: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub tolerance: Score,
    pub snapshots: Vec<SnapshotSummary>,
    pub totals: AuditTotals,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|finding| finding.blocking)
    }

    /// Blocking findings first, then by id, file and candidate.
    pub fn sort_findings(&mut self) {
        self.findings.sort_by(|a, b| {
            b.blocking
                .cmp(&a.blocking)
                .then_with(|| a.id.cmp(&b.id))
                .then_with(|| a.file.cmp(&b.file))
                .then_with(|| a.candidate.cmp(&b.candidate))
        });
    }
}

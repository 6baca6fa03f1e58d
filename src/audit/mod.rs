//! Stored-score audit: recomputes the matching score for every freelancer in
//! a directory of snapshot files and reports where stored and live values
//! disagree.

pub mod snapshot;

use crate::error::{MatchError, Result};
use crate::scoring::compute_match_score;
use crate::types::candidate::Candidate;
use crate::types::config::AuditOptions;
use crate::types::report::{AuditReport, AuditTotals, Finding, SnapshotSummary};
use crate::types::scoring::{Preset, SCORE_MAX, SCORE_MIN};
use std::path::Path;

pub fn audit_snapshots(root: &Path, options: &AuditOptions) -> Result<AuditReport> {
    if !root.exists() {
        return Err(MatchError::PathNotFound(root.display().to_string()));
    }

    let mut report = AuditReport {
        tolerance: options.tolerance,
        snapshots: Vec::new(),
        totals: AuditTotals::default(),
        findings: Vec::new(),
    };

    for path in snapshot::list_snapshot_files(root) {
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path.as_path())
            .to_string_lossy()
            .to_string();

        let loaded = match snapshot::read_snapshot(&path) {
            Ok(loaded) => loaded,
            Err(reason) => {
                tracing::warn!(file = %relative, %reason, "unreadable snapshot");
                report.findings.push(Finding {
                    id: "audit.unreadable_snapshot".to_string(),
                    title: "Snapshot could not be read".to_string(),
                    body: format!("{relative}: {reason}"),
                    blocking: true,
                    file: Some(relative),
                    candidate: None,
                });
                continue;
            }
        };

        tracing::debug!(
            file = %relative,
            candidates = loaded.candidates.len(),
            "auditing snapshot"
        );
        for candidate in &loaded.candidates {
            audit_candidate(candidate, &relative, options, &mut report);
        }
        report.snapshots.push(SnapshotSummary {
            path: relative,
            sha256: loaded.sha256,
            candidates: loaded.candidates.len(),
        });
    }

    report.sort_findings();
    tracing::info!(
        checked = report.totals.checked,
        mismatched = report.totals.mismatched,
        "audit complete"
    );
    Ok(report)
}

fn audit_candidate(
    candidate: &Candidate,
    file: &str,
    options: &AuditOptions,
    report: &mut AuditReport,
) {
    report.totals.checked += 1;
    let live = compute_match_score(&candidate.metrics, Preset::Matching).value();
    let finding = |id: &str, title: &str, body: String, blocking: bool| Finding {
        id: id.to_string(),
        title: title.to_string(),
        body,
        blocking,
        file: Some(file.to_string()),
        candidate: Some(candidate.id.clone()),
    };

    if options.flag_clamped_metrics {
        let coerced = candidate.metrics.out_of_domain();
        if !coerced.is_empty() {
            report.findings.push(finding(
                "audit.metric_clamped",
                "Metric outside 0-100",
                format!(
                    "{}: {} coerced into range before scoring.",
                    candidate.id,
                    coerced.join(", ")
                ),
                false,
            ));
        }
    }

    let Some(stored) = candidate.stored_match_score else {
        report.totals.missing_stored += 1;
        report.findings.push(finding(
            "audit.missing_stored_score",
            "Stored match score missing",
            format!("{}: no stored score; live score is {live:.2}.", candidate.id),
            false,
        ));
        return;
    };

    if !(SCORE_MIN..=SCORE_MAX).contains(&stored) {
        report.totals.mismatched += 1;
        report.findings.push(finding(
            "audit.stored_out_of_range",
            "Stored match score out of range",
            format!(
                "{}: stored score {stored} is not a number in 0-100; live score is {live:.2}.",
                candidate.id
            ),
            true,
        ));
        return;
    }

    if (stored - live).abs() > options.tolerance {
        report.totals.mismatched += 1;
        report.findings.push(finding(
            "audit.score_mismatch",
            "Stored match score disagrees with live computation",
            format!(
                "{}: stored {stored:.2}, live {live:.2} (tolerance {:.2}).",
                candidate.id, options.tolerance
            ),
            true,
        ));
    } else {
        report.totals.agreeing += 1;
    }
}

use crate::types::report::{AuditReport, RankingReport};

pub fn ranking_to_markdown(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str("# Match Ranking\n\n");
    output.push_str(&format!("Job: {}\n\n", report.job_title));
    if report.requested_skills.is_empty() {
        output.push_str("Requested skills: none\n\n");
    } else {
        output.push_str(&format!(
            "Requested skills: {}\n\n",
            report.requested_skills.join(", ")
        ));
    }
    output.push_str(&format!(
        "Showing {} of {} candidate(s)\n\n",
        report.ranked.len(),
        report.considered
    ));

    output.push_str("## Candidates\n\n");
    if report.ranked.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for candidate in &report.ranked {
        output.push_str(&format!(
            "{}. {} (match {:.2}, badge {}, skills {:.1}/30)\n",
            candidate.rank,
            candidate.label(),
            candidate.score,
            candidate.display_score,
            candidate.skills_overlap
        ));
        for reason in &candidate.reasons {
            output.push_str(&format!("   - {reason}\n"));
        }
    }
    output
}

pub fn audit_to_markdown(report: &AuditReport) -> String {
    let mut output = String::new();
    output.push_str("# Match Score Audit\n\n");
    output.push_str(&format!(
        "Checked: {} | agreeing: {} | mismatched: {} | missing stored: {} | tolerance: {:.2}\n\n",
        report.totals.checked,
        report.totals.agreeing,
        report.totals.mismatched,
        report.totals.missing_stored,
        report.tolerance
    ));

    output.push_str("## Snapshots\n\n");
    if report.snapshots.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for snapshot in &report.snapshots {
            output.push_str(&format!(
                "- {} ({} candidate(s), sha256 {})\n",
                snapshot.path,
                snapshot.candidates,
                &snapshot.sha256[..snapshot.sha256.len().min(12)]
            ));
        }
        output.push('\n');
    }

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking {
                    "blocking"
                } else {
                    "warning"
                },
                finding.title,
                finding.body
            ));
        }
    }

    output
}

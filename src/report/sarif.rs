use crate::types::report::AuditReport;
use serde_json::json;

pub fn to_sarif(report: &AuditReport) -> Result<String, serde_json::Error> {
    let results: Vec<_> = report
        .findings
        .iter()
        .map(|finding| {
            let mut result = json!({
                "ruleId": finding.id,
                "level": if finding.blocking { "error" } else { "warning" },
                "message": { "text": finding.body },
            });
            if let Some(file) = &finding.file {
                result["locations"] = json!([{
                    "physicalLocation": { "artifactLocation": { "uri": file } }
                }]);
            }
            result
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "freelance-match",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{AuditTotals, Finding};

    #[test]
    fn sarif_maps_blocking_findings_to_errors() {
        let report = AuditReport {
            tolerance: 0.5,
            snapshots: vec![],
            totals: AuditTotals::default(),
            findings: vec![Finding {
                id: "audit.score_mismatch".to_string(),
                title: "mismatch".to_string(),
                body: "f1: stored 80.00, live 82.75".to_string(),
                blocking: true,
                file: Some("freelancers.json".to_string()),
                candidate: Some("f1".to_string()),
            }],
        };

        let rendered = to_sarif(&report).expect("sarif should serialize");
        assert!(rendered.contains("\"level\": \"error\""));
        assert!(rendered.contains("\"uri\": \"freelancers.json\""));
    }
}

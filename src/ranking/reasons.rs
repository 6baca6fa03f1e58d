use crate::types::metrics::FreelancerMetrics;
use crate::types::scoring::Score;

const STRONG_METRIC: f64 = 80.0;
const FAIRNESS_BOOST: f64 = 70.0;

pub fn build_reasons(
    metrics: &FreelancerMetrics,
    score: Score,
    matched_skills: &[String],
    requested_count: usize,
) -> Vec<String> {
    let clamped = metrics.clamped();
    let mut reasons = Vec::new();

    if !matched_skills.is_empty() {
        reasons.push(format!(
            "Matches {} of {} requested skills ({})",
            matched_skills.len().min(requested_count.max(1)),
            requested_count,
            matched_skills.join(", ")
        ));
    }
    if clamped.job_performance >= STRONG_METRIC {
        reasons.push(format!(
            "Strong job performance ({:.0}/100)",
            clamped.job_performance
        ));
    }
    if clamped.skills_experience >= STRONG_METRIC {
        reasons.push(format!(
            "Deep relevant experience ({:.0}/100)",
            clamped.skills_experience
        ));
    }
    if clamped.responsiveness >= STRONG_METRIC {
        reasons.push(format!(
            "Highly responsive ({:.0}/100)",
            clamped.responsiveness
        ));
    }
    if clamped.fairness_score >= FAIRNESS_BOOST {
        reasons.push("Boosted as a rising freelancer".to_string());
    }

    if reasons.is_empty() {
        reasons.push(format!("Overall match score {score:.0}"));
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_candidate_gets_every_reason() {
        let metrics = FreelancerMetrics::new(95.0, 90.0, 88.0, 92.0);
        let matched = vec!["React".to_string()];
        let reasons = build_reasons(&metrics, 91.8, &matched, 2);

        assert_eq!(
            reasons,
            vec![
                "Matches 1 of 2 requested skills (React)".to_string(),
                "Strong job performance (95/100)".to_string(),
                "Deep relevant experience (90/100)".to_string(),
                "Highly responsive (88/100)".to_string(),
                "Boosted as a rising freelancer".to_string(),
            ]
        );
    }

    #[test]
    fn weak_candidate_falls_back_to_overall_score() {
        let metrics = FreelancerMetrics::new(40.0, 30.0, 20.0, 10.0);
        let reasons = build_reasons(&metrics, 31.6, &[], 3);
        assert_eq!(reasons, vec!["Overall match score 32".to_string()]);
    }

    #[test]
    fn reasons_use_clamped_values() {
        let metrics = FreelancerMetrics::new(250.0, f64::NAN, 0.0, 0.0);
        let reasons = build_reasons(&metrics, 50.0, &[], 0);
        assert_eq!(reasons, vec!["Strong job performance (100/100)".to_string()]);
    }

    #[test]
    fn matched_count_never_exceeds_requested() {
        let metrics = FreelancerMetrics::uniform(0.0);
        let matched = vec!["js".to_string(), "javascript".to_string()];
        let reasons = build_reasons(&metrics, 0.0, &matched, 1);
        assert_eq!(reasons[0], "Matches 1 of 1 requested skills (js, javascript)");
    }
}

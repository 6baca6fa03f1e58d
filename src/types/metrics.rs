use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const METRIC_MIN: f64 = 0.0;
pub const METRIC_MAX: f64 = 100.0;

/// Four performance metrics for one freelancer, each intended to lie in
/// `[0, 100]`. Values are kept as supplied; clamping happens at scoring time.
///
/// Deserialization never fails on a metric: numbers and numeric strings are
/// parsed, anything else (including a missing field) becomes NaN and is later
/// coerced to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreelancerMetrics {
    #[serde(
        default = "missing_metric",
        alias = "jobPerformance",
        deserialize_with = "lenient_number"
    )]
    pub job_performance: f64,
    #[serde(
        default = "missing_metric",
        alias = "skillsExperience",
        deserialize_with = "lenient_number"
    )]
    pub skills_experience: f64,
    #[serde(default = "missing_metric", deserialize_with = "lenient_number")]
    pub responsiveness: f64,
    #[serde(
        default = "missing_metric",
        alias = "fairnessScore",
        deserialize_with = "lenient_number"
    )]
    pub fairness_score: f64,
}

impl FreelancerMetrics {
    pub fn new(
        job_performance: f64,
        skills_experience: f64,
        responsiveness: f64,
        fairness_score: f64,
    ) -> Self {
        Self {
            job_performance,
            skills_experience,
            responsiveness,
            fairness_score,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Elementwise clamp to `[0, 100]`, NaN becoming 0.
    pub fn clamped(&self) -> Self {
        Self {
            job_performance: clamp_metric(self.job_performance),
            skills_experience: clamp_metric(self.skills_experience),
            responsiveness: clamp_metric(self.responsiveness),
            fairness_score: clamp_metric(self.fairness_score),
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        [
            self.job_performance,
            self.skills_experience,
            self.responsiveness,
            self.fairness_score,
        ]
    }

    /// Names of metrics whose raw value would be changed by clamping.
    pub fn out_of_domain(&self) -> Vec<&'static str> {
        MetricKind::ALL
            .iter()
            .zip(self.as_array())
            .filter(|(_, value)| !(METRIC_MIN..=METRIC_MAX).contains(value))
            .map(|(kind, _)| kind.name())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    JobPerformance,
    SkillsExperience,
    Responsiveness,
    FairnessScore,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::JobPerformance,
        MetricKind::SkillsExperience,
        MetricKind::Responsiveness,
        MetricKind::FairnessScore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::JobPerformance => "jobPerformance",
            Self::SkillsExperience => "skillsExperience",
            Self::Responsiveness => "responsiveness",
            Self::FairnessScore => "fairnessScore",
        }
    }
}

/// Clamp a raw metric into `[0, 100]`. NaN maps to 0, infinities to the
/// nearest bound.
pub fn clamp_metric(value: f64) -> f64 {
    if value.is_nan() {
        return METRIC_MIN;
    }
    value.clamp(METRIC_MIN, METRIC_MAX)
}

fn missing_metric() -> f64 {
    f64::NAN
}

pub(crate) fn coerce_number(value: &Value) -> f64 {
    match value {
        // literals beyond f64 range (1e400) parse to an infinity and clamp
        Value::Number(number) => number
            .as_f64()
            .unwrap_or_else(|| number.to_string().parse().unwrap_or(f64::NAN)),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// `null` and missing become `None`; any other value is coerced like a metric.
pub(crate) fn lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(other) => Some(coerce_number(&other)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_metric_handles_non_finite_values() {
        assert_eq!(clamp_metric(f64::NAN), 0.0);
        assert_eq!(clamp_metric(f64::INFINITY), 100.0);
        assert_eq!(clamp_metric(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_metric(-10.0), 0.0);
        assert_eq!(clamp_metric(150.0), 100.0);
        assert_eq!(clamp_metric(42.5), 42.5);
    }

    #[test]
    fn deserialize_accepts_camel_case_and_loose_values() {
        let metrics: FreelancerMetrics = serde_json::from_str(
            r#"{"jobPerformance": "87.5", "skillsExperience": 90, "responsiveness": null}"#,
        )
        .expect("metrics should deserialize");

        assert_eq!(metrics.job_performance, 87.5);
        assert_eq!(metrics.skills_experience, 90.0);
        assert!(metrics.responsiveness.is_nan());
        assert!(metrics.fairness_score.is_nan());

        let clamped = metrics.clamped();
        assert_eq!(clamped.responsiveness, 0.0);
        assert_eq!(clamped.fairness_score, 0.0);
    }

    #[test]
    fn deserialize_treats_non_numeric_values_as_nan() {
        let metrics: FreelancerMetrics = serde_json::from_str(
            r#"{"job_performance": "excellent", "skills_experience": true,
                "responsiveness": [1], "fairness_score": {"v": 1}}"#,
        )
        .expect("metrics should deserialize");
        assert!(metrics.as_array().iter().all(|value| value.is_nan()));
    }

    #[test]
    fn deserialize_accepts_numbers_beyond_f64_range() {
        let metrics: FreelancerMetrics = serde_json::from_str(
            r#"{"jobPerformance": 1e400, "skillsExperience": -1e400,
                "responsiveness": 70, "fairnessScore": 75}"#,
        )
        .expect("metrics should deserialize");
        assert_eq!(metrics.job_performance, f64::INFINITY);
        assert_eq!(metrics.skills_experience, f64::NEG_INFINITY);

        let clamped = metrics.clamped();
        assert_eq!(clamped.job_performance, 100.0);
        assert_eq!(clamped.skills_experience, 0.0);
    }

    #[test]
    fn out_of_domain_lists_offending_metrics() {
        let metrics = FreelancerMetrics::new(150.0, 50.0, f64::NAN, -1.0);
        assert_eq!(
            metrics.out_of_domain(),
            vec!["jobPerformance", "responsiveness", "fairnessScore"]
        );
        assert!(FreelancerMetrics::uniform(100.0).out_of_domain().is_empty());
    }
}

use super::metrics::{lenient_optional_number, FreelancerMetrics};
use super::scoring::Score;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A freelancer as delivered by the data store or the AI matching service.
///
/// Metrics may be nested under `metrics` or given inline at the top level;
/// the nested object wins when both are present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawCandidate")]
pub struct Candidate {
    pub id: String,
    pub name: Option<String>,
    pub skills: Vec<String>,
    pub metrics: FreelancerMetrics,
    pub stored_match_score: Option<Score>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, skills: Vec<String>, metrics: FreelancerMetrics) -> Self {
        Self {
            id: id.into(),
            name: None,
            skills,
            metrics,
            stored_match_score: None,
        }
    }
}

#[derive(Deserialize)]
struct RawCandidate {
    #[serde(deserialize_with = "lenient_id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_skills")]
    skills: Vec<String>,
    #[serde(default)]
    metrics: Option<FreelancerMetrics>,
    #[serde(
        default,
        alias = "storedMatchScore",
        alias = "matchScore",
        deserialize_with = "lenient_optional_number"
    )]
    stored_match_score: Option<Score>,
    #[serde(flatten)]
    inline_metrics: FreelancerMetrics,
}

impl From<RawCandidate> for Candidate {
    fn from(raw: RawCandidate) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            skills: raw.skills,
            metrics: raw.metrics.unwrap_or(raw.inline_metrics),
            stored_match_score: raw.stored_match_score,
        }
    }
}

/// Job analysis handed over by the external AI service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        default,
        alias = "requestedSkills",
        alias = "skills",
        deserialize_with = "lenient_skills"
    )]
    pub requested_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub id: String,
    pub name: Option<String>,
    pub score: Score,
    pub display_score: u8,
    pub skills_overlap: Score,
    pub matched_skills: Vec<String>,
    pub reasons: Vec<String>,
}

impl RankedCandidate {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "candidate id must be a string or number, found {other}"
        ))),
    }
}

/// Accepts a list of strings or a single comma-separated string.
fn lenient_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let skills = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(text) => text.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };
    Ok(skills
        .into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_accepts_nested_metrics() {
        let candidate: Candidate = serde_json::from_str(
            r#"{
                "id": "f-1",
                "name": "Ada",
                "skills": ["Rust", "Go"],
                "metrics": {"jobPerformance": 90, "skillsExperience": 80,
                            "responsiveness": 70, "fairnessScore": 75},
                "storedMatchScore": 82.75
            }"#,
        )
        .expect("candidate should parse");

        assert_eq!(candidate.id, "f-1");
        assert_eq!(candidate.name.as_deref(), Some("Ada"));
        assert_eq!(candidate.metrics, FreelancerMetrics::new(90.0, 80.0, 70.0, 75.0));
        assert_eq!(candidate.stored_match_score, Some(82.75));
    }

    #[test]
    fn candidate_accepts_inline_metrics_and_numeric_id() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"id": 42, "skills": "React, Node ,", "jobPerformance": "95",
                "skillsExperience": 90, "responsiveness": 88, "fairnessScore": 92}"#,
        )
        .expect("candidate should parse");

        assert_eq!(candidate.id, "42");
        assert_eq!(candidate.name, None);
        assert_eq!(candidate.skills, vec!["React".to_string(), "Node".to_string()]);
        assert_eq!(candidate.metrics.job_performance, 95.0);
        assert_eq!(candidate.stored_match_score, None);
    }

    #[test]
    fn candidate_without_metrics_gets_nan_metrics() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"id": "x"}"#).expect("candidate should parse");
        assert!(candidate.metrics.as_array().iter().all(|value| value.is_nan()));
        assert!(candidate.skills.is_empty());
    }

    #[test]
    fn candidate_rejects_missing_id() {
        let parsed = serde_json::from_str::<Candidate>(r#"{"skills": []}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn job_request_accepts_camel_case_skills() {
        let job: JobRequest = serde_json::from_str(
            r#"{"title": "Landing page", "requestedSkills": ["React", "CSS"]}"#,
        )
        .expect("job should parse");
        assert_eq!(job.requested_skills, vec!["React".to_string(), "CSS".to_string()]);
        assert!(job.description.is_none());
    }
}

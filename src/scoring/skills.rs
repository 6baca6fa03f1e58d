use crate::types::scoring::Score;

pub const SKILLS_OVERLAP_MAX: Score = 30.0;

/// Skill overlap sub-score in `[0, 30]`.
///
/// Counts the freelancer skills that match any requested skill, where a match
/// means either lowercased string contains the other. The count is divided by
/// the length of the requested list (at least 1) and scaled to 30 points.
/// Every requested entry counts toward the divisor, blank ones included; a
/// blank requested entry is contained in every skill and so matches anything.
pub fn compute_skills_overlap_score<S, R>(freelancer_skills: &[S], requested_skills: &[R]) -> Score
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    let requested = normalized(requested_skills);
    let matches = freelancer_skills
        .iter()
        .filter(|skill| skill_matches(skill.as_ref(), &requested))
        .count();
    let denominator = requested.len().max(1);
    let score = matches as f64 / denominator as f64 * SKILLS_OVERLAP_MAX;
    score.clamp(0.0, SKILLS_OVERLAP_MAX)
}

/// The freelancer skills counted by [`compute_skills_overlap_score`], in input
/// order and with their original spelling.
pub fn matched_skills<S, R>(freelancer_skills: &[S], requested_skills: &[R]) -> Vec<String>
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    let requested = normalized(requested_skills);
    freelancer_skills
        .iter()
        .filter(|skill| skill_matches(skill.as_ref(), &requested))
        .map(|skill| skill.as_ref().trim().to_string())
        .collect()
}

fn normalized<R: AsRef<str>>(skills: &[R]) -> Vec<String> {
    skills
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect()
}

// substring containment in either direction, e.g. "js" matches "javascript"
fn skill_matches(skill: &str, requested: &[String]) -> bool {
    let skill = skill.to_lowercase();
    requested
        .iter()
        .any(|wanted| skill.contains(wanted.as_str()) || wanted.contains(skill.as_str()))
}

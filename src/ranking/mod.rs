pub mod input;
pub mod reasons;

use crate::scoring::{compute_match_score, compute_skills_overlap_score, matched_skills};
use crate::types::candidate::{Candidate, JobRequest, RankedCandidate};
use crate::types::config::RankingOptions;
use crate::types::report::RankingReport;
use crate::types::scoring::Preset;
use std::cmp::Ordering;

/// Scores every candidate with the matching preset and returns them best
/// first, truncated to `options.top_n` (0 keeps all).
///
/// Ties on score are broken by skills overlap (higher first) and then by id,
/// so the order is fully determined by the input set.
pub fn rank_candidates(
    job: &JobRequest,
    candidates: &[Candidate],
    options: &RankingOptions,
) -> Vec<RankedCandidate> {
    let requested_count = job.requested_skills.len();
    let mut ranked = candidates
        .iter()
        .map(|candidate| score_candidate(candidate, job, requested_count))
        .filter(|ranked| ranked.score >= options.min_score)
        .collect::<Vec<_>>();

    ranked.sort_by(compare_ranked);
    if options.top_n > 0 {
        ranked.truncate(options.top_n);
    }
    for (index, candidate) in ranked.iter_mut().enumerate() {
        candidate.rank = index + 1;
    }

    tracing::debug!(
        job = %job.title,
        considered = candidates.len(),
        returned = ranked.len(),
        "ranked candidates"
    );
    ranked
}

pub fn rank_report(
    job: &JobRequest,
    candidates: &[Candidate],
    options: &RankingOptions,
) -> RankingReport {
    RankingReport {
        job_title: job.title.clone(),
        requested_skills: job.requested_skills.clone(),
        considered: candidates.len(),
        ranked: rank_candidates(job, candidates, options),
    }
}

fn score_candidate(
    candidate: &Candidate,
    job: &JobRequest,
    requested_count: usize,
) -> RankedCandidate {
    let score = compute_match_score(&candidate.metrics, Preset::Matching).value();
    let display_score = compute_match_score(&candidate.metrics, Preset::Display).rounded();
    let skills_overlap = compute_skills_overlap_score(&candidate.skills, &job.requested_skills);
    let matched = matched_skills(&candidate.skills, &job.requested_skills);
    let reasons = reasons::build_reasons(&candidate.metrics, score, &matched, requested_count);

    RankedCandidate {
        rank: 0,
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        score,
        display_score,
        skills_overlap,
        matched_skills: matched,
        reasons,
    }
}

fn compare_ranked(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.skills_overlap.total_cmp(&a.skills_overlap))
        .then_with(|| a.id.cmp(&b.id))
}

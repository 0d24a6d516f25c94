//! Ranker — the full recommendation pipeline and its cutoff/truncation rules.

use serde::Serialize;

use crate::models::major::Major;
use crate::quiz::classifier::tally_interests;
use crate::quiz::extractor::QuizAnswers;
use crate::quiz::filter::filter_by_education;
use crate::quiz::scorer::{score_major, ScoredMajor};
use crate::quiz::vocabulary::{EducationLevel, GoalTag};
use crate::quiz::RecommendError;

/// Majors scoring at or below this are never recommended.
pub const MIN_SCORE_EXCLUSIVE: u32 = 4;
pub const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub recommended_paths: Vec<String>,
    pub has_matches: bool,
    pub selected_education: EducationLevel,
    pub selected_goal: GoalTag,
    pub answers: Vec<String>,
    /// Score breakdown for each entry of `recommended_paths`, same order.
    pub scores: Vec<ScoredMajor>,
}

/// Stable sort by score descending, drop scores `<= MIN_SCORE_EXCLUSIVE`, keep the top 3.
/// Equal scores keep their input order.
pub fn rank(mut scored: Vec<ScoredMajor>) -> Vec<ScoredMajor> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
        .into_iter()
        .filter(|s| s.score > MIN_SCORE_EXCLUSIVE)
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

/// Recommends up to three majors for a completed quiz.
///
/// Zero qualifying majors is a valid outcome (`has_matches == false`), not an error.
pub fn recommend_majors(answers: &[String], catalog: &[Major]) -> Result<QuizResult, RecommendError> {
    if catalog.is_empty() {
        return Err(RecommendError::EmptyCatalog);
    }

    let parsed = QuizAnswers::parse(answers)?;
    let dominant = tally_interests(&parsed.interests).dominant();

    let scored = filter_by_education(catalog, parsed.education)
        .into_iter()
        .map(|major| score_major(major, &parsed, &dominant))
        .collect();

    let top = rank(scored);
    let recommended_paths: Vec<String> = top.iter().map(|s| s.major_id.clone()).collect();

    Ok(QuizResult {
        has_matches: !recommended_paths.is_empty(),
        recommended_paths,
        selected_education: parsed.education,
        selected_goal: parsed.goal,
        answers: answers.to_vec(),
        scores: top,
    })
}

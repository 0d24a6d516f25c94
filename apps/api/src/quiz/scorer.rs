//! Scorer — weighted match score of one major against a completed quiz.
//!
//! score = 2 × (interest answers found in `major.interests`)
//!       + 3 if the major's category is dominant
//!       + 2 if the stated goal is one of `major.goals`
//!
//! Weights are fixed; changing them changes which majors clear the ranker cutoff.

use serde::Serialize;

use crate::models::major::Major;
use crate::quiz::extractor::QuizAnswers;
use crate::quiz::vocabulary::Category;

pub const INTEREST_WEIGHT: u32 = 2;
pub const CATEGORY_BONUS: u32 = 3;
pub const GOAL_BONUS: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Interest answers found verbatim in the major's interests (0..=3).
    pub interest_matches: u32,
    pub category_bonus: u32,
    pub goal_bonus: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        INTEREST_WEIGHT * self.interest_matches + self.category_bonus + self.goal_bonus
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMajor {
    pub major_id: String,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

pub fn score_major(major: &Major, answers: &QuizAnswers, dominant: &[Category]) -> ScoredMajor {
    let interest_matches = answers
        .interests
        .iter()
        .filter(|a| major.interests.iter().any(|i| i == *a))
        .count() as u32;

    let category_bonus = if dominant.contains(&major.category) {
        CATEGORY_BONUS
    } else {
        0
    };

    let goal_bonus = if major.goals.contains(&answers.goal) {
        GOAL_BONUS
    } else {
        0
    };

    let breakdown = ScoreBreakdown {
        interest_matches,
        category_bonus,
        goal_bonus,
    };

    ScoredMajor {
        major_id: major.id.clone(),
        score: breakdown.total(),
        breakdown,
    }
}

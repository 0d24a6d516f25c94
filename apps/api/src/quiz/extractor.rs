//! Goal/education extraction — validates the raw answer array into `QuizAnswers`.

use crate::quiz::vocabulary::{EducationLevel, GoalTag, QUESTION_COUNT};
use crate::quiz::RecommendError;

const GOAL_SLOT: usize = 3;
const EDUCATION_SLOT: usize = 4;

/// A completed quiz in typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswers {
    pub interests: [String; 3],
    pub goal: GoalTag,
    pub education: EducationLevel,
}

impl QuizAnswers {
    /// Fails fast on a wrong answer count or an unrecognised goal/education option.
    pub fn parse(answers: &[String]) -> Result<Self, RecommendError> {
        if answers.len() != QUESTION_COUNT {
            return Err(RecommendError::InvalidInput(format!(
                "expected {QUESTION_COUNT} answers, got {}",
                answers.len()
            )));
        }

        let goal_answer = &answers[GOAL_SLOT];
        let goal = GoalTag::from_answer(goal_answer).ok_or_else(|| {
            RecommendError::InvalidInput(format!("unrecognised goal answer '{goal_answer}'"))
        })?;

        let education_answer = &answers[EDUCATION_SLOT];
        let education = EducationLevel::from_answer(education_answer).ok_or_else(|| {
            RecommendError::InvalidInput(format!(
                "unrecognised education answer '{education_answer}'"
            ))
        })?;

        Ok(QuizAnswers {
            interests: [
                answers[0].clone(),
                answers[1].clone(),
                answers[2].clone(),
            ],
            goal,
            education,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(answers: &[&str]) -> Vec<String> {
        answers.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_valid_answers() {
        let parsed = QuizAnswers::parse(&owned(&[
            "Technical and logical problems",
            "Independently with computers/technology",
            "Math and Science",
            "Make a high income",
            "4 years (bachelor's)",
        ]))
        .unwrap();
        assert_eq!(parsed.goal, GoalTag::HighIncome);
        assert_eq!(parsed.education, EducationLevel::FourYear);
        assert_eq!(parsed.interests[2], "Math and Science");
    }

    #[test]
    fn test_parse_rejects_short_array() {
        let err = QuizAnswers::parse(&owned(&["a", "b", "c"])).unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput(ref m) if m.contains("got 3")));
    }

    #[test]
    fn test_parse_rejects_long_array() {
        let err = QuizAnswers::parse(&owned(&["a", "b", "c", "d", "e", "f"])).unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_education() {
        let err = QuizAnswers::parse(&owned(&[
            "a",
            "b",
            "c",
            "Help others",
            "6 years",
        ]))
        .unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput(ref m) if m.contains("education")));
    }

    #[test]
    fn test_parse_rejects_unknown_goal() {
        let err = QuizAnswers::parse(&owned(&[
            "a",
            "b",
            "c",
            "Travel the world",
            "Master's or higher",
        ]))
        .unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput(ref m) if m.contains("goal")));
    }

    #[test]
    fn test_interest_answers_are_free_form() {
        let parsed = QuizAnswers::parse(&owned(&[
            "anything",
            "",
            "Arts and Humanities",
            "Be creative",
            "2 years (associate's)",
        ]))
        .unwrap();
        assert_eq!(parsed.interests[0], "anything");
        assert_eq!(parsed.education, EducationLevel::TwoYear);
    }
}

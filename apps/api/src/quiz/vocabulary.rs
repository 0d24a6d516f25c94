//! Quiz vocabulary — the fixed question bank and the typed tags derived from it.
//!
//! Option strings here are the single source of truth for the answer vocabulary.
//! Catalog `interests` must reuse them byte-for-byte; `goals` and education levels
//! are typed so a mismatch fails at deserialization instead of silently scoring zero.

use std::fmt;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Typed tags
// ────────────────────────────────────────────────────────────────────────────

/// Coarse interest bucket used for the category-dominance bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tech,
    Business,
    Social,
    Creative,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Business,
        Category::Social,
        Category::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "tech",
            Category::Business => "business",
            Category::Social => "social",
            Category::Creative => "creative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schooling commitment, ordered `TwoYear < FourYear < Masters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "2year")]
    TwoYear,
    #[serde(rename = "4year")]
    FourYear,
    #[serde(rename = "masters")]
    Masters,
}

/// Answer option text → education level.
const EDUCATION_ANSWERS: &[(&str, EducationLevel)] = &[
    ("2 years (associate's)", EducationLevel::TwoYear),
    ("4 years (bachelor's)", EducationLevel::FourYear),
    ("Master's or higher", EducationLevel::Masters),
];

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::TwoYear => "2year",
            EducationLevel::FourYear => "4year",
            EducationLevel::Masters => "masters",
        }
    }

    /// Maps the education question's option text to a level. Exact match after trimming.
    pub fn from_answer(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        EDUCATION_ANSWERS
            .iter()
            .find(|(text, _)| *text == answer)
            .map(|(_, level)| *level)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stated post-graduation goal. Serialized as the literal option text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalTag {
    #[serde(rename = "Make a high income")]
    HighIncome,
    #[serde(rename = "Help others")]
    HelpOthers,
    #[serde(rename = "Be creative")]
    BeCreative,
    #[serde(rename = "Start a business")]
    StartBusiness,
}

impl GoalTag {
    pub const ALL: [GoalTag; 4] = [
        GoalTag::HighIncome,
        GoalTag::HelpOthers,
        GoalTag::BeCreative,
        GoalTag::StartBusiness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalTag::HighIncome => "Make a high income",
            GoalTag::HelpOthers => "Help others",
            GoalTag::BeCreative => "Be creative",
            GoalTag::StartBusiness => "Start a business",
        }
    }

    pub fn from_answer(answer: &str) -> Option<Self> {
        let answer = answer.trim();
        Self::ALL.into_iter().find(|g| g.as_str() == answer)
    }
}

impl fmt::Display for GoalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Question bank
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free-form interest signal, classified into categories.
    Interest,
    Goal,
    Education,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u8,
    pub kind: QuestionKind,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

/// Number of answers a completed quiz must carry.
pub const QUESTION_COUNT: usize = 5;

/// The quiz, in answer order. Index 0–2 are interest questions, 3 is the goal, 4 the education ceiling.
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: 1,
        kind: QuestionKind::Interest,
        prompt: "What kind of problems do you enjoy solving?",
        options: &[
            "Technical and logical problems",
            "Business and strategic challenges",
            "Problems that involve helping people",
            "Creative and artistic projects",
        ],
    },
    Question {
        id: 2,
        kind: QuestionKind::Interest,
        prompt: "How do you prefer to work?",
        options: &[
            "Independently with computers/technology",
            "In teams leading projects",
            "One-on-one with people",
            "In creative collaborative environments",
        ],
    },
    Question {
        id: 3,
        kind: QuestionKind::Interest,
        prompt: "Which subjects interest you most?",
        options: &[
            "Math and Science",
            "Business and Economics",
            "Social Sciences",
            "Arts and Humanities",
        ],
    },
    Question {
        id: 4,
        kind: QuestionKind::Goal,
        prompt: "What is your main goal after graduation?",
        options: &[
            "Make a high income",
            "Help others",
            "Be creative",
            "Start a business",
        ],
    },
    Question {
        id: 5,
        kind: QuestionKind::Education,
        prompt: "How many years of school are you willing to commit?",
        options: &[
            "2 years (associate's)",
            "4 years (bachelor's)",
            "Master's or higher",
        ],
    },
];

/// True if `tag` is an option of one of the interest questions.
pub fn is_known_interest(tag: &str) -> bool {
    QUESTIONS
        .iter()
        .filter(|q| q.kind == QuestionKind::Interest)
        .flat_map(|q| q.options.iter())
        .any(|opt| *opt == tag)
}

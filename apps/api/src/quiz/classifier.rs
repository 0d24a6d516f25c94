//! Category classifier — tallies interest answers into coarse categories.

use serde::Serialize;

use crate::quiz::vocabulary::Category;

/// Substrings that signal each category. Compared ASCII case-insensitively.
const CATEGORY_INDICATORS: &[(Category, &[&str])] = &[
    (Category::Tech, &["Technical", "computers", "Math and Science"]),
    (Category::Business, &["Business", "teams leading", "Economics"]),
    (
        Category::Social,
        &["helping people", "One-on-one", "Social Sciences"],
    ),
    (
        Category::Creative,
        &["Creative", "artistic", "Arts and Humanities"],
    ),
];

/// Per-category count over the interest answers (0..=3 each).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub tech: u8,
    pub business: u8,
    pub social: u8,
    pub creative: u8,
}

impl CategoryTally {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Tech => self.tech,
            Category::Business => self.business,
            Category::Social => self.social,
            Category::Creative => self.creative,
        }
    }

    fn bump(&mut self, category: Category) {
        let slot = match category {
            Category::Tech => &mut self.tech,
            Category::Business => &mut self.business,
            Category::Social => &mut self.social,
            Category::Creative => &mut self.creative,
        };
        *slot += 1;
    }

    /// Every category tied for the maximum tally. Empty when nothing was tallied.
    pub fn dominant(&self) -> Vec<Category> {
        let max = Category::ALL
            .iter()
            .map(|c| self.get(*c))
            .max()
            .unwrap_or(0);
        if max == 0 {
            return vec![];
        }
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c) == max)
            .collect()
    }
}

/// Categories whose indicators occur in `answer`. Each category appears at most once.
pub fn classify_answer(answer: &str) -> Vec<Category> {
    let haystack = answer.to_ascii_lowercase();
    CATEGORY_INDICATORS
        .iter()
        .filter(|(_, needles)| {
            needles
                .iter()
                .any(|n| haystack.contains(&n.to_ascii_lowercase()))
        })
        .map(|(category, _)| *category)
        .collect()
}

pub fn tally_interests(answers: &[String]) -> CategoryTally {
    let mut tally = CategoryTally::default();
    for answer in answers {
        for category in classify_answer(answer) {
            tally.bump(category);
        }
    }
    tally
}

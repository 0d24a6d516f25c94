//! Candidate filter — narrows the catalog by the user's education ceiling.

use crate::models::major::Major;
use crate::quiz::vocabulary::EducationLevel;

impl EducationLevel {
    /// Whether a user with this ceiling is shown majors at `level`.
    ///
    /// Not a plain `<=`: a masters-willing user sees only masters-track majors.
    pub fn admits(&self, level: EducationLevel) -> bool {
        match self {
            EducationLevel::Masters => level == EducationLevel::Masters,
            EducationLevel::FourYear => {
                matches!(level, EducationLevel::FourYear | EducationLevel::TwoYear)
            }
            EducationLevel::TwoYear => level == EducationLevel::TwoYear,
        }
    }
}

/// Majors admitted by `ceiling`, in catalog order.
pub fn filter_by_education(catalog: &[Major], ceiling: EducationLevel) -> Vec<&Major> {
    catalog
        .iter()
        .filter(|m| ceiling.admits(m.education_level))
        .collect()
}

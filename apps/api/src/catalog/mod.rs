//! Major catalog — the static table the recommender scores against.
//!
//! Loaded once at startup (built-in table or a JSON file via `CATALOG_PATH`) and
//! shared read-only through `AppState`.

pub mod builtin;
pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::major::Major;
use crate::quiz::vocabulary::is_known_interest;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate major id '{0}'")]
    DuplicateId(String),

    #[error("Major '{major}' lists interest '{interest}' which is not a quiz option")]
    UnknownInterest { major: String, interest: String },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    majors: Vec<Major>,
}

impl Catalog {
    /// The table shipped with the service.
    pub fn builtin() -> Self {
        Catalog {
            majors: builtin::majors(),
        }
    }

    /// Builds a catalog after checking ids are unique and every interest is a quiz option.
    pub fn from_majors(majors: Vec<Major>) -> Result<Self, CatalogError> {
        validate(&majors)?;
        Ok(Catalog { majors })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let majors: Vec<Major> = serde_json::from_str(json)?;
        Self::from_majors(majors)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            majors = catalog.len(),
            "Loaded major catalog from file"
        );
        Ok(catalog)
    }

    pub fn majors(&self) -> &[Major] {
        &self.majors
    }

    pub fn get(&self, id: &str) -> Option<&Major> {
        self.majors.iter().find(|m| m.id == id)
    }

    /// Full records for `ids`, in the given order. Unknown ids are skipped.
    pub fn resolve(&self, ids: &[String]) -> Vec<Major> {
        ids.iter().filter_map(|id| self.get(id)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.majors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
    }
}

fn validate(majors: &[Major]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for major in majors {
        if !seen.insert(major.id.as_str()) {
            return Err(CatalogError::DuplicateId(major.id.clone()));
        }
        if let Some(bad) = major.interests.iter().find(|i| !is_known_interest(i)) {
            return Err(CatalogError::UnknownInterest {
                major: major.id.clone(),
                interest: bad.clone(),
            });
        }
    }
    Ok(())
}

use serde::{Deserialize, Serialize};

use crate::quiz::vocabulary::{Category, EducationLevel, GoalTag};

/// Catalog entry for a field of study. Read-only after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub education_level: EducationLevel,
    /// Interest answer strings, byte-identical to the quiz options.
    pub interests: Vec<String>,
    pub goals: Vec<GoalTag>,
    #[serde(default)]
    pub careers: Vec<Career>,
    #[serde(default)]
    pub job_market: JobMarket,
}

/// Display-only; not read by matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub title: String,
    #[serde(default)]
    pub median_salary: Option<u32>,
}

/// Display-only; not read by matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMarket {
    /// Projected ten-year growth, in percent.
    #[serde(default)]
    pub growth_rate: Option<f32>,
    #[serde(default)]
    pub outlook: Option<String>,
}

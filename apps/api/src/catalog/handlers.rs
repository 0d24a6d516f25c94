//! Axum route handlers for the Majors API.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::analytics::AnalyticsEvent;
use crate::errors::AppError;
use crate::models::major::Major;
use crate::state::AppState;

/// GET /api/v1/majors
pub async fn handle_list_majors(State(state): State<AppState>) -> Json<Vec<Major>> {
    Json(state.catalog.majors().to_vec())
}

/// GET /api/v1/majors/:id
pub async fn handle_get_major(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Major>, AppError> {
    let major = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Major {id} not found")))?;

    state
        .analytics
        .track(AnalyticsEvent::MajorViewed {
            major_id: major.id.clone(),
        })
        .await;

    Ok(Json(major))
}

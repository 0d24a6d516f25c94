//! Axum route handlers for the Quiz API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::AnalyticsEvent;
use crate::errors::AppError;
use crate::models::major::Major;
use crate::quiz::ranker::{recommend_majors, QuizResult};
use crate::quiz::vocabulary::{Question, QUESTIONS};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub session_id: Uuid,
    pub completed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: QuizResult,
    /// Full records for `recommendedPaths`, same order.
    pub majors: Vec<Major>,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
pub async fn handle_get_questions() -> Json<Vec<Question>> {
    Json(QUESTIONS.to_vec())
}

/// POST /api/v1/quiz/recommend
///
/// Runs the recommendation engine over a completed quiz. Malformed answers are a 400;
/// a quiz with no qualifying major is a 200 with `hasMatches: false`.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let result = match recommend_majors(&request.answers, state.catalog.majors()) {
        Ok(result) => result,
        Err(e) => {
            warn!("Quiz rejected: {e}");
            state
                .analytics
                .track(AnalyticsEvent::QuizRejected {
                    reason: e.to_string(),
                })
                .await;
            return Err(e.into());
        }
    };

    let session_id = Uuid::new_v4();
    info!(
        %session_id,
        education = %result.selected_education,
        matches = result.recommended_paths.len(),
        "Quiz completed"
    );

    state
        .analytics
        .track(AnalyticsEvent::QuizCompleted {
            session_id,
            recommended: result.recommended_paths.clone(),
            has_matches: result.has_matches,
            education: result.selected_education,
            goal: result.selected_goal,
        })
        .await;

    let majors = state.catalog.resolve(&result.recommended_paths);
    let message = build_message(&majors);

    Ok(Json(QuizResponse {
        session_id,
        completed_at: Utc::now(),
        result,
        majors,
        message,
    }))
}

/// Summary line for the results view; the fallback text when nothing qualified.
fn build_message(majors: &[Major]) -> String {
    match majors {
        [] => "We couldn't find a strong match for your answers. Try adjusting your \
               education preference or explore all majors."
            .to_string(),
        [only] => format!("Your best match is {}.", only.name),
        [first, rest @ ..] => {
            let others: Vec<&str> = rest.iter().map(|m| m.name.as_str()).collect();
            format!(
                "Your best match is {}. Also consider: {}.",
                first.name,
                others.join(", ")
            )
        }
    }
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::quiz::handlers as quiz_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route(
            "/api/v1/quiz/questions",
            get(quiz_handlers::handle_get_questions),
        )
        .route(
            "/api/v1/quiz/recommend",
            post(quiz_handlers::handle_recommend),
        )
        // Majors API
        .route("/api/v1/majors", get(catalog_handlers::handle_list_majors))
        .route("/api/v1/majors/:id", get(catalog_handlers::handle_get_major))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analytics::{AnalyticsEvent, RecordingAnalytics};
    use crate::catalog::Catalog;

    fn test_app(catalog: Catalog) -> (Router, Arc<RecordingAnalytics>) {
        let analytics = Arc::new(RecordingAnalytics::default());
        let state = AppState {
            catalog: Arc::new(catalog),
            analytics: analytics.clone(),
        };
        (build_router(state), analytics)
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_answers(answers: Value) -> Request<Body> {
        Request::post("/api/v1/quiz/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "answers": answers }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let (app, _) = test_app(Catalog::builtin());
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_questions_lists_five() {
        let (app, _) = test_app(Catalog::builtin());
        let resp = app
            .oneshot(
                Request::get("/api/v1/quiz/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[4]["kind"], "education");
    }

    #[tokio::test]
    async fn test_recommend_tech_answers() {
        let (app, analytics) = test_app(Catalog::builtin());
        let resp = app
            .oneshot(post_answers(json!([
                "Technical and logical problems",
                "Independently with computers/technology",
                "Math and Science",
                "Make a high income",
                "4 years (bachelor's)"
            ])))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["hasMatches"], true);
        assert_eq!(body["recommendedPaths"][0], "cs");
        assert_eq!(body["selectedEducation"], "4year");
        assert_eq!(body["selectedGoal"], "Make a high income");
        assert_eq!(body["majors"][0]["name"], "Computer Science");
        assert_eq!(body["scores"][0]["score"], 11);
        assert!(body["sessionId"].is_string());

        let events = analytics.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            AnalyticsEvent::QuizCompleted { has_matches: true, .. }
        ));
    }

    #[tokio::test]
    async fn test_recommend_without_matches_returns_fallback() {
        let (app, _) = test_app(Catalog::builtin());
        let resp = app
            .oneshot(post_answers(json!([
                "none",
                "none",
                "none",
                "Start a business",
                "2 years (associate's)"
            ])))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["hasMatches"], false);
        assert_eq!(body["recommendedPaths"], json!([]));
        assert!(body["message"].as_str().unwrap().contains("couldn't find"));
    }

    #[tokio::test]
    async fn test_recommend_short_answers_is_bad_request() {
        let (app, analytics) = test_app(Catalog::builtin());
        let resp = app
            .oneshot(post_answers(json!([
                "Technical and logical problems",
                "Independently with computers/technology",
                "Math and Science"
            ])))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let events = analytics.events.lock().unwrap();
        assert!(matches!(&events[0], AnalyticsEvent::QuizRejected { .. }));
    }

    #[tokio::test]
    async fn test_recommend_with_empty_catalog_is_unavailable() {
        let (app, _) = test_app(Catalog::from_json("[]").unwrap());
        let resp = app
            .oneshot(post_answers(json!([
                "a",
                "b",
                "c",
                "Help others",
                "Master's or higher"
            ])))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "CATALOG_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_list_majors() {
        let catalog = Catalog::builtin();
        let expected = catalog.len();
        let (app, _) = test_app(catalog);
        let resp = app
            .oneshot(Request::get("/api/v1/majors").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body.as_array().unwrap().len(), expected);
    }

    #[tokio::test]
    async fn test_get_major_tracks_view() {
        let (app, analytics) = test_app(Catalog::builtin());
        let resp = app
            .oneshot(
                Request::get("/api/v1/majors/design")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["educationLevel"], "4year");
        assert_eq!(body["category"], "creative");

        let events = analytics.events.lock().unwrap();
        assert_eq!(
            events.as_slice(),
            &[AnalyticsEvent::MajorViewed {
                major_id: "design".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_get_unknown_major_is_not_found() {
        let (app, _) = test_app(Catalog::builtin());
        let resp = app
            .oneshot(
                Request::get("/api/v1/majors/astrology")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

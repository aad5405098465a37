pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::grading::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/rules", post(handlers::handle_rules))
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::test_support::{empty_cv, full_cv};
    use crate::config::Config;
    use crate::grading::grader::DisabledGrader;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(Config::defaults(), Arc::new(DisabledGrader)))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cv-ats");
    }

    #[tokio::test]
    async fn test_rules_endpoint_returns_rule_result() {
        let (status, body) = post_json("/api/v1/ats/rules", json!({"cv": full_cv()})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["maxScore"], 100);
        assert!(body["totalScore"].as_u64().unwrap() >= 85);
        assert_eq!(
            body["sections"]["contact"]["positives"][0]["text"],
            "Name is present"
        );
    }

    #[tokio::test]
    async fn test_rules_endpoint_uses_cv_locale() {
        let mut cv = full_cv();
        cv.locale = Some(crate::ats::Locale::Pt);
        let (_, body) = post_json("/api/v1/ats/rules", json!({"cv": cv})).await;
        assert_eq!(
            body["sections"]["contact"]["positives"][0]["text"],
            "Nome preenchido"
        );
    }

    #[tokio::test]
    async fn test_score_endpoint_without_grader() {
        let (status, body) =
            post_json("/api/v1/ats/score", json!({"cv": empty_cv(), "locale": "pt"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overallScore"], body["ruleScore"]);
        assert!(body.get("llmGrade").is_none());
        assert_eq!(body["categories"].as_array().unwrap().len(), 9);
        assert_eq!(body["suggestions"][0]["priority"], "critical");
    }

    #[tokio::test]
    async fn test_oversized_input_is_rejected() {
        let mut cv = full_cv();
        cv.summary.text = "x".repeat(5_001);
        let (status, body) = post_json("/api/v1/ats/score", json!({"cv": cv})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "summary.text must be at most 5000 characters"
        );
    }

    #[tokio::test]
    async fn test_missing_section_is_rejected_by_extractor() {
        let mut cv = serde_json::to_value(full_cv()).unwrap();
        cv.as_object_mut().unwrap().remove("experience");
        let (status, _) = post_json("/api/v1/ats/rules", json!({"cv": cv})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}

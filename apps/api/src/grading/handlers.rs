//! Axum route handlers for the ATS API.

use anyhow::Context;
use axum::{extract::State, Json};
use serde::Deserialize;

use crate::ats::{self, Locale, RuleBasedResult};
use crate::errors::AppError;
use crate::grading::cache::cache_key;
use crate::grading::composer::{compose, AtsScoreResponse};
use crate::grading::grader::grade_best_effort;
use crate::models::cv::CvDocument;
use crate::models::validation::validate_cv;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub cv: CvDocument,
    #[serde(default)]
    pub locale: Option<Locale>,
}

impl AtsRequest {
    /// Request locale, then the CV's own locale, then English.
    fn locale(&self) -> Locale {
        self.locale.or(self.cv.locale).unwrap_or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/rules
///
/// Deterministic rule-based score only. Never calls the grader.
pub async fn handle_rules(
    Json(request): Json<AtsRequest>,
) -> Result<Json<RuleBasedResult>, AppError> {
    validate_cv(&request.cv)?;
    Ok(Json(ats::score(&request.cv, request.locale())))
}

/// POST /api/v1/ats/score
///
/// Rule-based score blended with the quality grade when one is available.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<AtsRequest>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    validate_cv(&request.cv)?;
    let response = analyze(&state, &request.cv, request.locale()).await?;
    Ok(Json(response))
}

/// Cached scoring pipeline behind `/score`.
pub async fn analyze(
    state: &AppState,
    cv: &CvDocument,
    locale: Locale,
) -> Result<AtsScoreResponse, AppError> {
    let key = cache_key(cv, locale).context("Failed to hash CV for the score cache")?;
    if let Some(cached) = state.score_cache.get(&key) {
        return Ok(cached);
    }

    let result = ats::score(cv, locale);
    let assessment =
        grade_best_effort(state.grader.as_ref(), cv, state.config.grader_timeout).await;
    let response = compose(&result, assessment.as_ref(), locale);

    state.score_cache.insert(key, response.clone());
    Ok(response)
}

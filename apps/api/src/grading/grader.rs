//! Quality Grader: pluggable, trait-based reviewer that assigns letter grades to the
//! writing quality of a CV.
//!
//! Default when an API key is configured: `LlmQualityGrader`. Otherwise `DisabledGrader`.
//! `AppState` holds an `Arc<dyn QualityGrader>`, chosen at startup from config.
//!
//! Grades are advisory. `grade_best_effort` is the only call site the service uses: it
//! bounds the call with a timeout and turns every failure into "no grade".

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::grading::prompts::{grade_user_prompt, GRADE_SYSTEM};
use crate::llm_client::{CompletionOptions, LlmClient, LlmError};
use crate::models::cv::CvDocument;

/// Fixed seed so repeated gradings of the same CV agree as far as the provider allows.
const GRADE_SEED: u64 = 42;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Points subtracted from the rule-based score.
    pub fn penalty(self) -> i32 {
        match self {
            Grade::A => 0,
            Grade::B => -1,
            Grade::C => -2,
            Grade::D => -3,
            Grade::F => -5,
        }
    }
}

/// What the grader returns for one CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityAssessment {
    pub summary_grade: Grade,
    pub experience_grade: Grade,
    pub overall_impression: Grade,
    pub top_suggestion: String,
}

#[derive(Debug, Error)]
pub enum GradeError {
    #[error("quality grader is disabled")]
    Disabled,

    #[error("quality grader timed out after {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap grading backends without touching the handler.
///
/// Carried in `AppState` as `Arc<dyn QualityGrader>`.
#[async_trait]
pub trait QualityGrader: Send + Sync {
    async fn grade(&self, cv: &CvDocument) -> Result<QualityAssessment, GradeError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmQualityGrader
// ────────────────────────────────────────────────────────────────────────────

/// Grades via the chat-completions model. Sends the CV without its rendering-only members.
pub struct LlmQualityGrader {
    llm: LlmClient,
}

impl LlmQualityGrader {
    /// One attempt per grading; the caller's timeout is the only deadline.
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm: llm.with_max_attempts(1),
        }
    }
}

#[async_trait]
impl QualityGrader for LlmQualityGrader {
    async fn grade(&self, cv: &CvDocument) -> Result<QualityAssessment, GradeError> {
        let prompt = grade_user_prompt(&cv.stripped_for_grading()).map_err(LlmError::Parse)?;
        let options = CompletionOptions {
            temperature: 0.0,
            seed: Some(GRADE_SEED),
            json_mode: true,
        };
        let assessment = self
            .llm
            .call_json::<QualityAssessment>(&prompt, GRADE_SYSTEM, options)
            .await?;
        Ok(assessment)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DisabledGrader
// ────────────────────────────────────────────────────────────────────────────

/// Used when no API key is configured.
pub struct DisabledGrader;

#[async_trait]
impl QualityGrader for DisabledGrader {
    async fn grade(&self, _cv: &CvDocument) -> Result<QualityAssessment, GradeError> {
        Err(GradeError::Disabled)
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Call site
// ────────────────────────────────────────────────────────────────────────────

/// Runs the grader once under `timeout`. Any failure yields `None`.
pub async fn grade_best_effort(
    grader: &dyn QualityGrader,
    cv: &CvDocument,
    timeout: Duration,
) -> Option<QualityAssessment> {
    let outcome = match tokio::time::timeout(timeout, grader.grade(cv)).await {
        Ok(result) => result,
        Err(_) => Err(GradeError::Timeout(timeout)),
    };

    match outcome {
        Ok(assessment) => Some(assessment),
        Err(GradeError::Disabled) => {
            debug!("Quality grader disabled, using rule-based score only");
            None
        }
        Err(e) => {
            warn!(
                backend = grader.backend(),
                "Quality grading failed, using rule-based score only: {e}"
            );
            None
        }
    }
}

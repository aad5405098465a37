use std::sync::Arc;

use crate::config::Config;
use crate::grading::cache::TtlCache;
use crate::grading::composer::AtsScoreResponse;
use crate::grading::grader::QualityGrader;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable quality grader. `LlmQualityGrader` when GROQ_API_KEY is set, otherwise
    /// `DisabledGrader`.
    pub grader: Arc<dyn QualityGrader>,
    /// Composed scores keyed by CV content hash and locale.
    pub score_cache: Arc<TtlCache<AtsScoreResponse>>,
}

impl AppState {
    pub fn new(config: Config, grader: Arc<dyn QualityGrader>) -> Self {
        let score_cache = Arc::new(TtlCache::new(config.cache_ttl, config.cache_capacity));
        Self {
            config,
            grader,
            score_cache,
        }
    }
}

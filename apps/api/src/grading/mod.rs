// ATS score composition: rule-based engine + optional LLM quality grade.
// All LLM calls go through llm_client; the rule-based engine lives in crate::ats.

pub mod cache;
pub mod composer;
pub mod grader;
pub mod handlers;
pub mod prompts;

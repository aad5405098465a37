// LLM prompt constants for quality grading.

use crate::models::cv::CvDocument;

/// System prompt for categorical grading. Enforces JSON-only output.
pub const GRADE_SYSTEM: &str = r#"You are an expert resume reviewer. Evaluate this CV's writing quality.
Respond ONLY with JSON:
{
  "summaryGrade": "A"|"B"|"C"|"D"|"F",
  "experienceGrade": "A"|"B"|"C"|"D"|"F",
  "overallImpression": "A"|"B"|"C"|"D"|"F",
  "topSuggestion": "<single most impactful improvement>"
}
Grades: A=excellent, B=good, C=fair, D=needs work, F=major issues"#;

/// User message carrying the CV as compact JSON.
pub fn grade_user_prompt(cv: &CvDocument) -> Result<String, serde_json::Error> {
    Ok(format!("CV Data:\n{}", serde_json::to_string(cv)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::test_support::full_cv;

    #[test]
    fn test_prompt_carries_stripped_cv() {
        let mut cv = full_cv();
        cv.custom_latex = Some("\\documentclass{article}".to_string());
        let prompt = grade_user_prompt(&cv.stripped_for_grading()).unwrap();
        assert!(prompt.starts_with("CV Data:\n{"));
        assert!(prompt.contains("jane@example.com"));
        assert!(!prompt.contains("documentclass"));
        assert!(!prompt.contains("templateId"));
    }

    #[test]
    fn test_system_prompt_names_every_field() {
        for field in ["summaryGrade", "experienceGrade", "overallImpression", "topSuggestion"] {
            assert!(GRADE_SYSTEM.contains(field));
        }
    }
}

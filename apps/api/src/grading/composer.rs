//! Turns a rule-based result and an optional quality assessment into the response the
//! editor displays.

use serde::{Deserialize, Serialize};

use crate::ats::messages::msg;
use crate::ats::{
    Locale, Priority, RuleBasedResult, SectionKey, SectionName, ValidationIssue,
    ValidationPositive, MAX_SCORE,
};
use crate::grading::grader::{Grade, QualityAssessment};

/// Largest total deduction a quality assessment can cause.
const MAX_GRADE_PENALTY: i32 = -10;

/// Categories at or above this percentage read "Good" when they have no issues.
const GOOD_PERCENT: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsCategory {
    pub name: String,
    pub score: u32,
    pub feedback: String,
    pub section: SectionKey,
}

pub type AtsSuggestion = ValidationIssue;

/// Earned points per section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub contact: u32,
    pub summary: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
    pub projects: u32,
    pub languages: u32,
    pub formatting: u32,
    pub date_continuity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResponse {
    pub overall_score: u32,
    pub categories: Vec<AtsCategory>,
    pub suggestions: Vec<AtsSuggestion>,
    pub positives: Vec<ValidationPositive>,
    pub rule_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_grade: Option<Grade>,
    pub breakdown: ScoreBreakdown,
}

/// Summary and experience penalties combined, never below `MAX_GRADE_PENALTY`.
pub fn grade_penalty(assessment: &QualityAssessment) -> i32 {
    let total = assessment.summary_grade.penalty() + assessment.experience_grade.penalty();
    total.max(MAX_GRADE_PENALTY)
}

fn category_name(name: SectionName, locale: Locale) -> String {
    msg(locale, &format!("category.{}", name.key()), &[])
}

fn categories(result: &RuleBasedResult, locale: Locale) -> Vec<AtsCategory> {
    result
        .sections
        .iter()
        .map(|(name, section)| {
            let score = section.percent();
            let feedback = if !section.issues.is_empty() {
                section
                    .issues
                    .iter()
                    .map(|i| i.text.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            } else if score >= GOOD_PERCENT {
                msg(locale, "category.good", &[])
            } else {
                msg(locale, "category.needs_improvement", &[])
            };
            AtsCategory {
                name: category_name(name, locale),
                score,
                feedback,
                section: name.section_key(),
            }
        })
        .collect()
}

/// Every issue, critical first. The sort is stable so section order survives within a
/// priority.
fn suggestions(result: &RuleBasedResult) -> Vec<AtsSuggestion> {
    let mut all: Vec<AtsSuggestion> = result
        .sections
        .iter()
        .flat_map(|(_, s)| s.issues.iter().cloned())
        .collect();
    all.sort_by_key(|i| i.priority);
    all
}

fn breakdown(result: &RuleBasedResult) -> ScoreBreakdown {
    let s = &result.sections;
    ScoreBreakdown {
        contact: s.contact.earned,
        summary: s.summary.earned,
        experience: s.experience.earned,
        education: s.education.earned,
        skills: s.skills.earned,
        projects: s.projects.earned,
        languages: s.languages.earned,
        formatting: s.formatting.earned,
        date_continuity: s.date_continuity.earned,
    }
}

pub fn compose(
    result: &RuleBasedResult,
    assessment: Option<&QualityAssessment>,
    locale: Locale,
) -> AtsScoreResponse {
    let mut suggestions = suggestions(result);
    let positives = result
        .sections
        .iter()
        .flat_map(|(_, s)| s.positives.iter().cloned())
        .collect();

    let mut penalty = 0;
    let mut llm_grade = None;
    if let Some(assessment) = assessment {
        penalty = grade_penalty(assessment);
        llm_grade = Some(assessment.overall_impression);
        if !assessment.top_suggestion.trim().is_empty() {
            suggestions.push(AtsSuggestion {
                text: assessment.top_suggestion.clone(),
                priority: Priority::Recommended,
                section: SectionKey::General,
            });
        }
    }

    let overall = (result.total_score as i32 + penalty).clamp(0, MAX_SCORE as i32) as u32;

    AtsScoreResponse {
        overall_score: overall,
        categories: categories(result, locale),
        suggestions,
        positives,
        rule_score: result.total_score,
        llm_grade,
        breakdown: breakdown(result),
    }
}

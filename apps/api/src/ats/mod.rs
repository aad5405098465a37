//! Rule-based ATS compatibility scoring.
//!
//! `score` is a pure function of a CV document and a locale: nine independent section
//! checkers each produce a bounded sub-score with localized feedback, and the results are
//! summed into a 0-100 total. Nothing here performs I/O or keeps state between calls.

pub mod checks;
pub mod dates;
pub mod messages;
pub mod types;
pub mod word_lists;

#[cfg(test)]
pub(crate) mod test_support;

use tracing::debug;

use crate::models::cv::CvDocument;

use self::checks::{
    contact, date_continuity, education, experience, formatting, languages, projects, skills,
    summary,
};
pub use self::types::{
    Locale, Priority, RuleBasedResult, SectionKey, SectionName, SectionScore, SectionScores,
    ValidationIssue, ValidationPositive,
};

pub const MAX_SCORE: u32 = 100;

const _: () = assert!(
    contact::MAX
        + summary::MAX
        + experience::MAX
        + education::MAX
        + skills::MAX
        + projects::MAX
        + languages::MAX
        + formatting::MAX
        + date_continuity::MAX
        == MAX_SCORE
);

/// Scores `cv` against every section checker.
pub fn score(cv: &CvDocument, locale: Locale) -> RuleBasedResult {
    let sections = SectionScores {
        contact: contact::check_contact(cv, locale),
        summary: summary::check_summary(cv, locale),
        experience: experience::check_experience(cv, locale),
        education: education::check_education(cv, locale),
        skills: skills::check_skills(cv, locale),
        projects: projects::check_projects(cv, locale),
        languages: languages::check_languages(cv, locale),
        formatting: formatting::check_formatting(cv, locale),
        date_continuity: date_continuity::check_date_continuity(cv, locale),
    };
    let total_score = sections.iter().map(|(_, s)| s.earned).sum();

    debug!(locale = locale.as_str(), total_score, "ATS rule-based score computed");

    RuleBasedResult {
        total_score,
        max_score: MAX_SCORE,
        sections,
    }
}

//! Size limits on incoming CV documents.
//!
//! Scoring assumes bounded input; requests are checked here before they reach the engine.
//! The first violation found is reported with its field path.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::cv::CvDocument;

const TEXT_MAX: usize = 500;
const LONG_TEXT_MAX: usize = 5_000;
const HIGHLIGHT_MAX: usize = 1_000;
const ID_MAX: usize = 50;
const ITEMS_MAX: usize = 20;
const HIGHLIGHTS_MAX: usize = 20;
const SECTION_ORDER_MAX: usize = 16;
const CUSTOM_SECTIONS_MAX: usize = 10;
const CUSTOM_ITEMS_MAX: usize = 30;
const CUSTOM_LATEX_MAX: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvValidationError {
    #[error("{path} must be at most {max} characters")]
    TooLong { path: String, max: usize },

    #[error("{path} must have at most {max} entries")]
    TooMany { path: String, max: usize },

    #[error("{path} must not contain duplicates")]
    Duplicate { path: String },
}

type Check = Result<(), CvValidationError>;

fn text(path: &str, value: &str, max: usize) -> Check {
    if value.chars().count() > max {
        return Err(CvValidationError::TooLong {
            path: path.to_string(),
            max,
        });
    }
    Ok(())
}

fn list<T>(path: &str, values: &[T], max: usize) -> Check {
    if values.len() > max {
        return Err(CvValidationError::TooMany {
            path: path.to_string(),
            max,
        });
    }
    Ok(())
}

fn highlights(path: &str, values: &[String]) -> Check {
    let path = format!("{path}.highlights");
    list(&path, values, HIGHLIGHTS_MAX)?;
    for (i, h) in values.iter().enumerate() {
        text(&format!("{path}[{i}]"), h, HIGHLIGHT_MAX)?;
    }
    Ok(())
}

pub fn validate_cv(cv: &CvDocument) -> Check {
    let h = &cv.header;
    for (field, value) in [
        ("name", &h.name),
        ("location", &h.location),
        ("phone", &h.phone),
        ("email", &h.email),
        ("linkedin", &h.linkedin),
        ("github", &h.github),
    ] {
        text(&format!("header.{field}"), value, TEXT_MAX)?;
    }

    text("summary.title", &cv.summary.title, TEXT_MAX)?;
    text("summary.text", &cv.summary.text, LONG_TEXT_MAX)?;

    text("education.title", &cv.education.title, TEXT_MAX)?;
    list("education.items", &cv.education.items, ITEMS_MAX)?;
    for (i, item) in cv.education.items.iter().enumerate() {
        let path = format!("education.items[{i}]");
        for (field, value) in [
            ("institution", &item.institution),
            ("degree", &item.degree),
            ("date", &item.date),
            ("location", &item.location),
        ] {
            text(&format!("{path}.{field}"), value, TEXT_MAX)?;
        }
        highlights(&path, &item.highlights)?;
    }

    text("experience.title", &cv.experience.title, TEXT_MAX)?;
    list("experience.items", &cv.experience.items, ITEMS_MAX)?;
    for (i, item) in cv.experience.items.iter().enumerate() {
        let path = format!("experience.items[{i}]");
        for (field, value) in [
            ("company", &item.company),
            ("role", &item.role),
            ("date", &item.date),
            ("location", &item.location),
        ] {
            text(&format!("{path}.{field}"), value, TEXT_MAX)?;
        }
        highlights(&path, &item.highlights)?;
    }

    text("projects.title", &cv.projects.title, TEXT_MAX)?;
    list("projects.items", &cv.projects.items, ITEMS_MAX)?;
    for (i, item) in cv.projects.items.iter().enumerate() {
        let path = format!("projects.items[{i}]");
        for (field, value) in [("name", &item.name), ("tech", &item.tech), ("date", &item.date)] {
            text(&format!("{path}.{field}"), value, TEXT_MAX)?;
        }
        highlights(&path, &item.highlights)?;
    }

    text("skills.title", &cv.skills.title, TEXT_MAX)?;
    list("skills.categories", &cv.skills.categories, ITEMS_MAX)?;
    for (i, category) in cv.skills.categories.iter().enumerate() {
        text(&format!("skills.categories[{i}].name"), &category.name, TEXT_MAX)?;
        text(
            &format!("skills.categories[{i}].values"),
            &category.values,
            LONG_TEXT_MAX,
        )?;
    }

    text("languages.title", &cv.languages.title, TEXT_MAX)?;
    list("languages.items", &cv.languages.items, ITEMS_MAX)?;
    for (i, item) in cv.languages.items.iter().enumerate() {
        text(&format!("languages.items[{i}].name"), &item.name, TEXT_MAX)?;
        text(&format!("languages.items[{i}].level"), &item.level, TEXT_MAX)?;
    }

    validate_extras(cv)
}

/// Members that only drive rendering.
fn validate_extras(cv: &CvDocument) -> Check {
    if let Some(order) = &cv.section_order {
        list("sectionOrder", order, SECTION_ORDER_MAX)?;
        let mut seen = HashSet::new();
        for (i, key) in order.iter().enumerate() {
            text(&format!("sectionOrder[{i}]"), key, ID_MAX)?;
            if !seen.insert(key.as_str()) {
                return Err(CvValidationError::Duplicate {
                    path: "sectionOrder".to_string(),
                });
            }
        }
    }

    if let Some(sections) = &cv.custom_sections {
        list("customSections", sections, CUSTOM_SECTIONS_MAX)?;
        for (i, section) in sections.iter().enumerate() {
            let path = format!("customSections[{i}]");
            text(&format!("{path}.id"), &section.id, ID_MAX)?;
            text(&format!("{path}.title"), &section.title, TEXT_MAX)?;
            list(&format!("{path}.items"), &section.items, CUSTOM_ITEMS_MAX)?;
            for (j, item) in section.items.iter().enumerate() {
                text(&format!("{path}.items[{j}].text"), &item.text, HIGHLIGHT_MAX)?;
            }
        }
    }

    if let Some(latex) = &cv.custom_latex {
        text("customLatex", latex, CUSTOM_LATEX_MAX)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::test_support::{empty_cv, full_cv};
    use crate::models::cv::{CustomSection, CustomSectionItem};

    #[test]
    fn test_fixtures_are_valid() {
        assert_eq!(validate_cv(&full_cv()), Ok(()));
        assert_eq!(validate_cv(&empty_cv()), Ok(()));
    }

    #[test]
    fn test_long_header_field() {
        let mut cv = full_cv();
        cv.header.github = "x".repeat(501);
        assert_eq!(
            validate_cv(&cv),
            Err(CvValidationError::TooLong {
                path: "header.github".to_string(),
                max: 500
            })
        );
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let mut cv = full_cv();
        cv.header.name = "é".repeat(500);
        assert_eq!(validate_cv(&cv), Ok(()));
    }

    #[test]
    fn test_summary_allows_long_text() {
        let mut cv = full_cv();
        cv.summary.text = "a".repeat(5_000);
        assert_eq!(validate_cv(&cv), Ok(()));
        cv.summary.text.push('a');
        assert!(validate_cv(&cv).is_err());
    }

    #[test]
    fn test_highlight_path_and_limit() {
        let mut cv = full_cv();
        cv.experience.items[1].highlights[2] = "x".repeat(1_001);
        let err = validate_cv(&cv).unwrap_err();
        assert_eq!(
            err.to_string(),
            "experience.items[1].highlights[2] must be at most 1000 characters"
        );
    }

    #[test]
    fn test_too_many_highlights() {
        let mut cv = full_cv();
        cv.projects.items[0].highlights = vec!["Built 10 tools".to_string(); 21];
        assert_eq!(
            validate_cv(&cv),
            Err(CvValidationError::TooMany {
                path: "projects.items[0].highlights".to_string(),
                max: 20
            })
        );
    }

    #[test]
    fn test_too_many_items() {
        let mut cv = full_cv();
        let item = cv.languages.items[0].clone();
        cv.languages.items = vec![item; 21];
        assert!(matches!(
            validate_cv(&cv),
            Err(CvValidationError::TooMany { path, .. }) if path == "languages.items"
        ));
    }

    #[test]
    fn test_duplicate_section_order() {
        let mut cv = full_cv();
        cv.section_order = Some(vec!["summary".to_string(), "summary".to_string()]);
        assert_eq!(
            validate_cv(&cv),
            Err(CvValidationError::Duplicate {
                path: "sectionOrder".to_string()
            })
        );
    }

    #[test]
    fn test_custom_section_limits() {
        let mut cv = full_cv();
        cv.custom_sections = Some(vec![CustomSection {
            id: "awards".to_string(),
            title: "Awards".to_string(),
            items: vec![
                CustomSectionItem {
                    text: "Hackathon winner".to_string()
                };
                31
            ],
        }]);
        assert_eq!(
            validate_cv(&cv).unwrap_err().to_string(),
            "customSections[0].items must have at most 30 entries"
        );
    }

    #[test]
    fn test_custom_latex_limit() {
        let mut cv = full_cv();
        cv.custom_latex = Some("%".repeat(100_001));
        assert!(matches!(
            validate_cv(&cv),
            Err(CvValidationError::TooLong { path, .. }) if path == "customLatex"
        ));
    }
}

use serde::{Deserialize, Serialize};

use crate::ats::Locale;

/// A complete CV document as authored in the editor.
///
/// Required sub-objects stay required on the wire; only per-item highlight lists and the
/// presentation-only members default when absent, so scoring never has to tell "missing"
/// apart from "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_order: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_sections: Option<Vec<CustomSection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_latex: Option<String>,
    pub header: Header,
    pub summary: Summary,
    pub education: EducationSection,
    pub experience: ExperienceSection,
    pub projects: ProjectsSection,
    pub skills: SkillsSection,
    pub languages: LanguagesSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationSection {
    pub title: String,
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub institution: String,
    pub degree: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceSection {
    pub title: String,
    pub items: Vec<ExperienceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    pub role: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsSection {
    pub title: String,
    pub items: Vec<ProjectItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: String,
    pub tech: String,
    pub date: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsSection {
    pub title: String,
    pub categories: Vec<SkillCategory>,
}

/// `values` is a comma-separated list, e.g. `"Rust, Go, TypeScript"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub values: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguagesSection {
    pub title: String,
    pub items: Vec<LanguageItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageItem {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<CustomSectionItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomSectionItem {
    pub text: String,
}

impl CvDocument {
    /// Copy of the document without the members that only drive rendering
    /// (`customLatex`, `templateId`). This is what leaves the process for grading
    /// and what the result cache is keyed on.
    pub fn stripped_for_grading(&self) -> CvDocument {
        CvDocument {
            template_id: None,
            custom_latex: None,
            ..self.clone()
        }
    }

    pub fn experience_highlights(&self) -> impl Iterator<Item = &str> {
        self.experience
            .items
            .iter()
            .flat_map(|item| item.highlights.iter().map(String::as_str))
    }
}

use serde::{Deserialize, Serialize};

/// Language used for feedback text and for the locale-specific word lists.
///
/// Any unrecognised locale string deserializes to `En`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Locale {
    Pt,
    #[default]
    En,
}

impl Locale {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pt" => Locale::Pt,
            _ => Locale::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Locale::parse(&value)
    }
}

/// Locale-agnostic tag identifying which part of the CV a feedback item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Header,
    Summary,
    Education,
    Experience,
    Projects,
    Skills,
    Languages,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    Recommended,
    Optional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub text: String,
    pub priority: Priority,
    pub section: SectionKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationPositive {
    pub text: String,
    pub section: SectionKey,
}

/// Points earned by one checker. `earned <= max` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub earned: u32,
    pub max: u32,
    pub issues: Vec<ValidationIssue>,
    pub positives: Vec<ValidationPositive>,
}

impl SectionScore {
    pub fn percent(&self) -> u32 {
        if self.max == 0 {
            return 100;
        }
        (self.earned * 200 + self.max) / (self.max * 2)
    }
}

/// One field per checker, so the set of sections is fixed at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub contact: SectionScore,
    pub summary: SectionScore,
    pub experience: SectionScore,
    pub education: SectionScore,
    pub skills: SectionScore,
    pub projects: SectionScore,
    pub languages: SectionScore,
    pub formatting: SectionScore,
    pub date_continuity: SectionScore,
}

/// Names of the nine scoring dimensions, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionName {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Languages,
    Formatting,
    DateContinuity,
}

impl SectionName {
    pub fn key(self) -> &'static str {
        match self {
            SectionName::Contact => "contact",
            SectionName::Summary => "summary",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Projects => "projects",
            SectionName::Languages => "languages",
            SectionName::Formatting => "formatting",
            SectionName::DateContinuity => "dateContinuity",
        }
    }

    /// Tag the caller-side adapter uses to map a whole section to a display area.
    pub fn section_key(self) -> SectionKey {
        match self {
            SectionName::Contact => SectionKey::Header,
            SectionName::Summary => SectionKey::Summary,
            SectionName::Experience | SectionName::DateContinuity => SectionKey::Experience,
            SectionName::Education => SectionKey::Education,
            SectionName::Skills => SectionKey::Skills,
            SectionName::Projects => SectionKey::Projects,
            SectionName::Languages => SectionKey::Languages,
            SectionName::Formatting => SectionKey::General,
        }
    }
}

impl SectionScores {
    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &SectionScore)> {
        [
            (SectionName::Contact, &self.contact),
            (SectionName::Summary, &self.summary),
            (SectionName::Experience, &self.experience),
            (SectionName::Education, &self.education),
            (SectionName::Skills, &self.skills),
            (SectionName::Projects, &self.projects),
            (SectionName::Languages, &self.languages),
            (SectionName::Formatting, &self.formatting),
            (SectionName::DateContinuity, &self.date_continuity),
        ]
        .into_iter()
    }
}

/// Output of a rule-based scoring pass. `total_score` is the sum of every section's
/// `earned`, and the section maxima sum to `max_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBasedResult {
    pub total_score: u32,
    pub max_score: u32,
    pub sections: SectionScores,
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ats::checks::{is_blank, proportional, SectionTally};
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::ats::word_lists::{classify_verb, VerbStrength};
use crate::models::cv::CvDocument;

pub const MAX: u32 = 30;

/// A percentage, a $ or R$ amount, or any number with two or more digits.
static METRIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+%|\$[0-9,]+|R\$[0-9.,]+|\b[0-9]{2,}\b").expect("metric regex")
});

/// Lower-cased first word of a bullet with one trailing punctuation mark removed.
pub(crate) fn first_word(text: &str) -> String {
    let word = text
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match word.strip_suffix(|c: char| matches!(c, '.' | ',' | ';' | ':')) {
        Some(stripped) => stripped.to_string(),
        None => word,
    }
}

pub(crate) fn is_quantified(text: &str) -> bool {
    METRIC.is_match(text)
}

/// Presence 5, complete fields 5, 3-6 bullets per entry 5, action verbs 8, metrics 7.
pub fn check_experience(cv: &CvDocument, locale: Locale) -> SectionScore {
    let items = &cv.experience.items;
    let mut tally = SectionTally::new(locale, SectionKey::Experience, MAX);

    if items.is_empty() {
        tally.fail(Priority::Critical, "experience.no_items", &[]);
        return tally.finish();
    }
    tally.pass(5, "experience.has_items");

    let complete = items
        .iter()
        .filter(|i| !is_blank(&i.company) && !is_blank(&i.role) && !is_blank(&i.date))
        .count();
    if complete == items.len() {
        tally.pass(5, "experience.fields_complete");
    } else {
        let missing = items.len() - complete;
        tally.partial(
            proportional(5, complete, items.len()),
            Priority::Critical,
            "experience.missing_fields",
            &[("count", &missing)],
        );
    }

    let highlights: Vec<&str> = cv
        .experience_highlights()
        .filter(|h| !is_blank(h))
        .collect();

    let average = highlights.len() as f64 / items.len() as f64;
    if (3.0..=6.0).contains(&average) {
        tally.pass(5, "experience.good_highlights");
    } else if average >= 3.0 {
        tally.partial(2, Priority::Optional, "experience.many_highlights", &[]);
    } else if average >= 1.0 {
        tally.partial(2, Priority::Recommended, "experience.few_highlights", &[]);
    } else {
        tally.fail(Priority::Critical, "experience.no_highlights", &[]);
    }

    if highlights.is_empty() {
        return tally.finish();
    }
    let total = highlights.len();

    // Unknown opening words are given the benefit of the doubt.
    let strong = highlights
        .iter()
        .filter(|h| classify_verb(locale, &first_word(h)) != VerbStrength::Weak)
        .count();
    if strong * 10 >= total * 8 {
        tally.pass(8, "experience.strong_verbs");
    } else if strong * 2 >= total {
        tally.partial(4, Priority::Recommended, "experience.some_weak_verbs", &[]);
    } else {
        tally.partial(2, Priority::Critical, "experience.weak_verbs", &[]);
    }

    let quantified = highlights.iter().filter(|h| is_quantified(h)).count();
    if quantified * 2 >= total {
        tally.pass(7, "experience.quantified");
    } else if quantified * 5 >= total {
        tally.partial(3, Priority::Recommended, "experience.some_metrics", &[]);
    } else {
        tally.partial(1, Priority::Critical, "experience.needs_metrics", &[]);
    }

    tally.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::test_support::full_cv;
    use crate::models::cv::ExperienceItem;

    fn item(highlights: &[&str]) -> ExperienceItem {
        ExperienceItem {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            date: "Jan 2020 - Present".to_string(),
            location: "Remote".to_string(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
        }
    }

    fn with_items(items: Vec<ExperienceItem>) -> CvDocument {
        let mut cv = full_cv();
        cv.experience.items = items;
        cv
    }

    #[test]
    fn test_first_word_normalization() {
        assert_eq!(first_word("  Led, the team"), "led");
        assert_eq!(first_word("Reduced: costs"), "reduced");
        assert_eq!(first_word("Helped..."), "helped..");
        assert_eq!(first_word(""), "");
    }

    #[test]
    fn test_metric_patterns() {
        assert!(is_quantified("Cut latency by 40%"));
        assert!(is_quantified("Saved $1,200 monthly"));
        assert!(is_quantified("Economizei R$3.500 por mês"));
        assert!(is_quantified("Served 12 regions"));
        assert!(!is_quantified("Served 3 regions"));
        assert!(!is_quantified("Built the billing system"));
    }

    #[test]
    fn test_full_experience_scores_max() {
        let score = check_experience(&full_cv(), Locale::En);
        assert_eq!(score.earned, MAX);
        assert!(score.issues.is_empty());
        assert_eq!(score.positives.len(), 5);
    }

    #[test]
    fn test_no_items_short_circuits() {
        let score = check_experience(&with_items(vec![]), Locale::En);
        assert_eq!(score.earned, 0);
        assert_eq!(score.issues.len(), 1);
        assert_eq!(score.issues[0].priority, Priority::Critical);
    }

    #[test]
    fn test_missing_fields_proportional_credit() {
        let mut incomplete = item(&["Led 12 engineers", "Cut costs 30%", "Shipped 15 features"]);
        incomplete.company = String::new();
        let complete = item(&["Led 12 engineers", "Cut costs 30%", "Shipped 15 features"]);
        let score = check_experience(&with_items(vec![complete, incomplete]), Locale::En);
        // round(5 * 1/2) = 3
        assert_eq!(score.earned, 5 + 3 + 5 + 8 + 7);
        assert!(score.issues[0].text.starts_with("1 experience item"));
        assert_eq!(score.issues[0].priority, Priority::Critical);
    }

    #[test]
    fn test_too_few_and_too_many_highlights() {
        let few = check_experience(&with_items(vec![item(&["Led 12 engineers"])]), Locale::En);
        assert_eq!(few.earned, 5 + 5 + 2 + 8 + 7);
        assert_eq!(few.issues[0].priority, Priority::Recommended);

        let many: Vec<&str> = vec!["Led 12 engineers"; 7];
        let many = check_experience(&with_items(vec![item(&many)]), Locale::En);
        assert_eq!(many.earned, 5 + 5 + 2 + 8 + 7);
        assert_eq!(many.issues[0].priority, Priority::Optional);
    }

    #[test]
    fn test_no_highlights_skips_verb_and_metric_checks() {
        let score = check_experience(&with_items(vec![item(&["", "  "])]), Locale::En);
        assert_eq!(score.earned, 10);
        assert_eq!(score.issues.len(), 1);
        assert!(score.issues[0].text.contains("no bullet points"));
    }

    #[test]
    fn test_weak_verbs_tiers() {
        let half = item(&["Helped 10 users", "Worked on 20 tickets", "Led 12 engineers", "Built 15 services"]);
        let score = check_experience(&with_items(vec![half]), Locale::En);
        assert_eq!(score.earned, 5 + 5 + 5 + 4 + 7);

        let mostly_weak = item(&["Helped 10 users", "Worked on 20 tickets", "Assisted 30 teams", "Led 12 engineers"]);
        let score = check_experience(&with_items(vec![mostly_weak]), Locale::En);
        assert_eq!(score.earned, 5 + 5 + 5 + 2 + 7);
        assert!(score
            .issues
            .iter()
            .any(|i| i.priority == Priority::Critical && i.text.contains("weak verbs")));
    }

    #[test]
    fn test_unknown_verbs_count_as_strong() {
        let unknown = item(&["Wrangled 10 pipelines", "Tamed 20 services", "Herded 30 jobs"]);
        let score = check_experience(&with_items(vec![unknown]), Locale::En);
        assert_eq!(score.earned, MAX);
    }

    #[test]
    fn test_quantification_tiers() {
        let some = item(&["Led the team", "Built the platform", "Cut costs 30%", "Shipped a feature", "Designed the API"]);
        let score = check_experience(&with_items(vec![some]), Locale::En);
        // 1/5 = 0.2 -> 3 pts
        assert_eq!(score.earned, 5 + 5 + 5 + 8 + 3);

        let none = item(&["Led the team", "Built the platform", "Shipped a feature"]);
        let score = check_experience(&with_items(vec![none]), Locale::En);
        assert_eq!(score.earned, 5 + 5 + 5 + 8 + 1);
    }
}

use crate::ats::checks::{is_blank, proportional, SectionTally};
use crate::ats::dates::is_ats_safe_date;
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::ats::word_lists::has_first_person;
use crate::models::cv::CvDocument;

pub const MAX: u32 = 15;

/// Summary, entry titles, every highlight and every skill, joined by single spaces.
fn collect_text(cv: &CvDocument) -> String {
    let mut parts: Vec<&str> = vec![cv.summary.text.as_str()];
    for item in &cv.experience.items {
        parts.push(&item.role);
        parts.push(&item.company);
        parts.extend(item.highlights.iter().map(String::as_str));
    }
    for item in &cv.education.items {
        parts.push(&item.degree);
        parts.push(&item.institution);
        parts.extend(item.highlights.iter().map(String::as_str));
    }
    for item in &cv.projects.items {
        parts.push(&item.name);
        parts.extend(item.highlights.iter().map(String::as_str));
    }
    for category in &cv.skills.categories {
        parts.push(&category.name);
        parts.push(&category.values);
    }
    parts.join(" ")
}

fn collect_highlights(cv: &CvDocument) -> Vec<&str> {
    let experience = cv.experience.items.iter().flat_map(|i| &i.highlights);
    let education = cv.education.items.iter().flat_map(|i| &i.highlights);
    let projects = cv.projects.items.iter().flat_map(|i| &i.highlights);
    experience
        .chain(education)
        .chain(projects)
        .map(String::as_str)
        .collect()
}

/// Non-blank dates from experience, education and projects.
fn collect_dates(cv: &CvDocument) -> Vec<&str> {
    let experience = cv.experience.items.iter().map(|i| i.date.as_str());
    let education = cv.education.items.iter().map(|i| i.date.as_str());
    let projects = cv.projects.items.iter().map(|i| i.date.as_str());
    experience
        .chain(education)
        .chain(projects)
        .filter(|d| !is_blank(d))
        .collect()
}

/// Length 5, no empty bullets 3, ATS-safe dates 4, no first-person pronouns 3.
pub fn check_formatting(cv: &CvDocument, locale: Locale) -> SectionScore {
    let mut tally = SectionTally::new(locale, SectionKey::General, MAX);
    let text = collect_text(cv);

    let words = text.split_whitespace().count();
    if (450..=1200).contains(&words) {
        tally.pass(5, "formatting.good_length");
    } else if (200..450).contains(&words) {
        tally.partial(3, Priority::Recommended, "formatting.short", &[("count", &words)]);
    } else if (1201..=1500).contains(&words) {
        tally.partial(3, Priority::Recommended, "formatting.long", &[("count", &words)]);
    } else if words > 0 {
        tally.partial(1, Priority::Critical, "formatting.very_off", &[("count", &words)]);
    } else {
        tally.fail(Priority::Critical, "formatting.empty", &[]);
    }

    let highlights = collect_highlights(cv);
    let empty_bullets = highlights.iter().filter(|h| is_blank(h)).count();
    if empty_bullets > 0 {
        tally.fail(
            Priority::Recommended,
            "formatting.empty_bullets",
            &[("count", &empty_bullets)],
        );
    } else if highlights.is_empty() {
        tally.award(3);
    } else {
        tally.pass(3, "formatting.no_empty_bullets");
    }

    let dates = collect_dates(cv);
    let safe = dates.iter().filter(|d| is_ats_safe_date(d)).count();
    if dates.is_empty() {
        tally.award(4);
    } else if safe == dates.len() {
        tally.pass(4, "formatting.ats_dates");
    } else {
        let unsafe_count = dates.len() - safe;
        tally.partial(
            proportional(4, safe, dates.len()),
            Priority::Recommended,
            "formatting.bad_dates",
            &[("count", &unsafe_count)],
        );
    }

    if has_first_person(locale, &text) {
        tally.fail(Priority::Recommended, "formatting.has_pronouns", &[]);
    } else if words == 0 {
        tally.award(3);
    } else {
        tally.pass(3, "formatting.no_pronouns");
    }

    tally.finish()
}

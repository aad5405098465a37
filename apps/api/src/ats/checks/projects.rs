use crate::ats::checks::{is_blank, proportional, SectionTally};
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::models::cv::CvDocument;

pub const MAX: u32 = 5;

/// A project is complete when it has a name and at least one non-empty highlight.
pub fn check_projects(cv: &CvDocument, locale: Locale) -> SectionScore {
    let items = &cv.projects.items;
    let mut tally = SectionTally::new(locale, SectionKey::Projects, MAX);

    if items.is_empty() {
        tally.fail(Priority::Optional, "projects.no_items", &[]);
        return tally.finish();
    }
    tally.pass(2, "projects.has_items");

    let complete = items
        .iter()
        .filter(|p| !is_blank(&p.name) && p.highlights.iter().any(|h| !is_blank(h)))
        .count();
    if complete == items.len() {
        tally.pass(3, "projects.fields_complete");
    } else {
        let missing = items.len() - complete;
        tally.partial(
            proportional(3, complete, items.len()),
            Priority::Recommended,
            "projects.missing_fields",
            &[("count", &missing)],
        );
    }

    tally.finish()
}

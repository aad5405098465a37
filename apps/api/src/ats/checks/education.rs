use crate::ats::checks::{is_blank, proportional, SectionTally};
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::models::cv::CvDocument;

pub const MAX: u32 = 8;

pub fn check_education(cv: &CvDocument, locale: Locale) -> SectionScore {
    let items = &cv.education.items;
    let mut tally = SectionTally::new(locale, SectionKey::Education, MAX);

    if items.is_empty() {
        tally.fail(Priority::Critical, "education.no_items", &[]);
        return tally.finish();
    }
    tally.pass(3, "education.has_items");

    let complete = items
        .iter()
        .filter(|i| !is_blank(&i.institution) && !is_blank(&i.degree))
        .count();
    if complete == items.len() {
        tally.pass(3, "education.fields_complete");
    } else {
        let missing = items.len() - complete;
        tally.partial(
            proportional(3, complete, items.len()),
            Priority::Recommended,
            "education.missing_fields",
            &[("count", &missing)],
        );
    }

    let dated = items.iter().filter(|i| !is_blank(&i.date)).count();
    if dated == items.len() {
        tally.pass(2, "education.dates_complete");
    } else {
        let missing = items.len() - dated;
        tally.partial(
            proportional(2, dated, items.len()),
            Priority::Optional,
            "education.missing_dates",
            &[("count", &missing)],
        );
    }

    tally.finish()
}

use crate::ats::checks::{is_blank, proportional, SectionTally};
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::models::cv::CvDocument;

pub const MAX: u32 = 5;

pub fn check_languages(cv: &CvDocument, locale: Locale) -> SectionScore {
    let items = &cv.languages.items;
    let mut tally = SectionTally::new(locale, SectionKey::Languages, MAX);

    if items.is_empty() {
        tally.fail(Priority::Optional, "languages.no_items", &[]);
        return tally.finish();
    }
    tally.pass(2, "languages.has_items");

    let complete = items
        .iter()
        .filter(|l| !is_blank(&l.name) && !is_blank(&l.level))
        .count();
    if complete == items.len() {
        tally.pass(3, "languages.fields_complete");
    } else {
        let missing = items.len() - complete;
        tally.partial(
            proportional(3, complete, items.len()),
            Priority::Recommended,
            "languages.missing_fields",
            &[("count", &missing)],
        );
    }

    tally.finish()
}

use crate::ats::checks::SectionTally;
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::ats::word_lists::has_first_person;
use crate::models::cv::CvDocument;

pub const MAX: u32 = 10;

fn count_sentences(text: &str) -> usize {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .filter(|s| !s.trim().is_empty())
        .count()
}

pub fn check_summary(cv: &CvDocument, locale: Locale) -> SectionScore {
    let text = cv.summary.text.trim();
    let mut tally = SectionTally::new(locale, SectionKey::Summary, MAX);

    if text.is_empty() {
        tally.fail(Priority::Critical, "summary.missing", &[]);
        return tally.finish();
    }
    tally.pass(3, "summary.present");

    let sentences = count_sentences(text);
    if (2..=5).contains(&sentences) {
        tally.pass(4, "summary.good_length");
    } else if sentences < 2 {
        tally.partial(2, Priority::Recommended, "summary.too_short", &[]);
    } else {
        tally.partial(2, Priority::Recommended, "summary.too_long", &[]);
    }

    if has_first_person(locale, text) {
        tally.fail(Priority::Recommended, "summary.has_pronouns", &[]);
    } else {
        tally.pass(3, "summary.no_pronouns");
    }

    tally.finish()
}

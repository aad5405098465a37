use chrono::{NaiveDate, Utc};

use crate::ats::checks::{is_blank, SectionTally};
use crate::ats::dates::{parse_date_range_at, DateRange};
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::models::cv::CvDocument;

pub const MAX: u32 = 5;

/// Longest tolerated distance, in months, between one job's end and the next one's start.
const MAX_GAP_MONTHS: i32 = 6;

pub fn check_date_continuity(cv: &CvDocument, locale: Locale) -> SectionScore {
    check_date_continuity_at(cv, locale, Utc::now().date_naive())
}

/// Employment dates are only judged when at least one of them can be read; free-text dates
/// the parser does not understand are never penalised here.
pub fn check_date_continuity_at(cv: &CvDocument, locale: Locale, today: NaiveDate) -> SectionScore {
    let mut tally = SectionTally::new(locale, SectionKey::Experience, MAX);

    let mut ranges: Vec<DateRange> = Vec::new();
    let mut unparsed = 0usize;
    for item in cv.experience.items.iter().filter(|i| !is_blank(&i.date)) {
        match parse_date_range_at(&item.date, today) {
            Some(range) => ranges.push(range),
            None => unparsed += 1,
        }
    }

    if ranges.is_empty() {
        tally.award(MAX);
        return tally.finish();
    }

    if unparsed == 0 {
        tally.pass(2, "dateContinuity.dates_parseable");
    } else {
        tally.partial(
            1,
            Priority::Optional,
            "dateContinuity.some_unparseable",
            &[("count", &unparsed)],
        );
    }

    // Most recent first.
    ranges.sort_by(|a, b| b.end.cmp(&a.end));
    let has_gap = ranges
        .windows(2)
        .any(|pair| pair[0].start - pair[1].end > MAX_GAP_MONTHS);
    if has_gap {
        tally.fail(Priority::Optional, "dateContinuity.has_gaps", &[]);
    } else {
        tally.pass(3, "dateContinuity.no_gaps");
    }

    tally.finish()
}

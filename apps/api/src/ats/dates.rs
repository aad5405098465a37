//! Free-text date parsing for gap analysis.
//!
//! Dates are reduced to "months since year 0" (`year * 12 + month0`) so that gaps are
//! plain integer differences. Anything unrecognised yields `None`; callers treat that as
//! "cannot judge", never as an error.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;
/// Month index used when only a year is known.
const MID_YEAR: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: i32,
    pub end: i32,
}

static MONTHS: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    [
        (&["jan", "january", "janeiro"][..], 0),
        (&["feb", "february", "fev", "fevereiro"][..], 1),
        (&["mar", "march", "marco", "março"][..], 2),
        (&["apr", "april", "abr", "abril"][..], 3),
        (&["may", "mai", "maio"][..], 4),
        (&["jun", "june", "junho"][..], 5),
        (&["jul", "july", "julho"][..], 6),
        (&["aug", "august", "ago", "agosto"][..], 7),
        (&["sep", "sept", "september", "set", "setembro"][..], 8),
        (&["oct", "october", "out", "outubro"][..], 9),
        (&["nov", "november", "novembro"][..], 10),
        (&["dec", "december", "dez", "dezembro"][..], 11),
    ]
    .into_iter()
    .flat_map(|(names, month)| names.iter().map(move |name| (*name, month)))
    .collect()
});

static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([a-záéíóúãõç]+)\s+([0-9]{4})").expect("month-year regex"));
static MM_YYYY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{1,2})/([0-9]{4})").expect("mm/yyyy regex"));
static BARE_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{4})\b").expect("year regex"));
static RANGE_DELIMITER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*[-–—]\s*|\s+to\s+|\s+a\s+").expect("range delimiter regex")
});
static PRESENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)present|atual|presente").expect("present regex"));
static ATS_SAFE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?|janeiro|fevereiro|março|marco|abril|maio|junho|julho|agosto|setembro|outubro|novembro|dezembro)\s+[0-9]{4}\b|\b[0-9]{2}/[0-9]{4}\b|\b[0-9]{4}\b|present|presente|atual",
    )
    .expect("ats date regex")
});

fn year_in_range(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Parses one side of a range: "Jan 2022", "01/2022" or "2022", in that order of preference.
pub fn parse_month_year(text: &str) -> Option<i32> {
    if let Some(caps) = MONTH_YEAR.captures(text) {
        let month = MONTHS.get(caps[1].to_lowercase().as_str()).copied();
        let year = caps[2].parse::<i32>().ok();
        if let (Some(month), Some(year)) = (month, year) {
            if year_in_range(year) {
                return Some(year * 12 + month);
            }
        }
    }

    if let Some(caps) = MM_YYYY.captures(text) {
        let month = caps[1].parse::<i32>().ok().map(|m| m - 1);
        let year = caps[2].parse::<i32>().ok();
        if let (Some(month), Some(year)) = (month, year) {
            if (0..=11).contains(&month) && year_in_range(year) {
                return Some(year * 12 + month);
            }
        }
    }

    BARE_YEAR
        .captures(text)
        .and_then(|caps| caps[1].parse::<i32>().ok())
        .filter(|year| year_in_range(*year))
        .map(|year| year * 12 + MID_YEAR)
}

/// Parses a date range, resolving "present" to the month of `today`.
pub fn parse_date_range_at(text: &str, today: NaiveDate) -> Option<DateRange> {
    let current = today.year() * 12 + today.month0() as i32;
    let is_present = PRESENT.is_match(text);
    let parts: Vec<&str> = RANGE_DELIMITER.split(text).collect();

    match parts.as_slice() {
        [single] => {
            let value = parse_month_year(single)?;
            let end = if is_present { current } else { value };
            Some(DateRange { start: value, end })
        }
        [first, .., last] => {
            let start = parse_month_year(first)?;
            let end = if is_present {
                current
            } else {
                parse_month_year(last)?
            };
            Some(DateRange { start, end })
        }
        [] => None,
    }
}

/// Whether an ATS is likely to read the date: a month name with year, MM/YYYY, a bare
/// year, or a "present" marker.
pub fn is_ats_safe_date(text: &str) -> bool {
    ATS_SAFE_DATE.is_match(text)
}

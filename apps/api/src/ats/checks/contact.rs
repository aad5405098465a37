use once_cell::sync::Lazy;
use regex::Regex;

use crate::ats::checks::{is_blank, SectionTally};
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::models::cv::CvDocument;

pub const MAX: u32 = 10;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/").expect("linkedin regex"));

/// Name 2, email 1 + 2 for a valid shape, phone 2, LinkedIn 2 (1 if malformed), location 1.
/// No short-circuit: every field is judged independently.
pub fn check_contact(cv: &CvDocument, locale: Locale) -> SectionScore {
    let header = &cv.header;
    let mut tally = SectionTally::new(locale, SectionKey::Header, MAX);

    if is_blank(&header.name) {
        tally.fail(Priority::Critical, "contact.name_missing", &[]);
    } else {
        tally.pass(2, "contact.name_ok");
    }

    let email = header.email.trim();
    if email.is_empty() {
        tally.fail(Priority::Critical, "contact.email_missing", &[]);
    } else if EMAIL.is_match(email) {
        tally.pass(3, "contact.email_ok");
    } else {
        tally.partial(1, Priority::Recommended, "contact.email_invalid", &[]);
    }

    if is_blank(&header.phone) {
        tally.fail(Priority::Recommended, "contact.phone_missing", &[]);
    } else {
        tally.pass(2, "contact.phone_ok");
    }

    let linkedin = header.linkedin.trim();
    if linkedin.is_empty() {
        tally.fail(Priority::Recommended, "contact.linkedin_missing", &[]);
    } else if LINKEDIN.is_match(linkedin) {
        tally.pass(2, "contact.linkedin_ok");
    } else {
        tally.partial(1, Priority::Recommended, "contact.linkedin_invalid", &[]);
    }

    if is_blank(&header.location) {
        tally.fail(Priority::Optional, "contact.location_missing", &[]);
    } else {
        tally.pass(1, "contact.location_ok");
    }

    tally.finish()
}

use crate::ats::checks::{is_blank, SectionTally};
use crate::ats::types::{Locale, Priority, SectionKey, SectionScore};
use crate::models::cv::{CvDocument, SkillCategory};

pub const MAX: u32 = 12;

const MIN_SKILLS: usize = 8;

fn skill_count(category: &SkillCategory) -> usize {
    category
        .values
        .split(',')
        .filter(|value| !is_blank(value))
        .count()
}

pub fn check_skills(cv: &CvDocument, locale: Locale) -> SectionScore {
    let categories = &cv.skills.categories;
    let mut tally = SectionTally::new(locale, SectionKey::Skills, MAX);

    if categories.is_empty() {
        tally.fail(Priority::Critical, "skills.no_categories", &[]);
        return tally.finish();
    }
    tally.pass(3, "skills.has_categories");

    if categories.len() >= 2 {
        tally.pass(3, "skills.good_categories");
    } else {
        tally.fail(Priority::Recommended, "skills.few_categories", &[]);
    }

    let total: usize = categories.iter().map(skill_count).sum();
    if total >= MIN_SKILLS {
        tally.pass(3, "skills.enough_skills");
    } else {
        tally.fail(Priority::Recommended, "skills.few_skills", &[("count", &total)]);
    }

    let empty = categories
        .iter()
        .filter(|c| is_blank(&c.name) || is_blank(&c.values))
        .count();
    if empty == 0 {
        tally.pass(3, "skills.no_empty");
    } else {
        tally.fail(Priority::Recommended, "skills.empty_category", &[("count", &empty)]);
    }

    tally.finish()
}

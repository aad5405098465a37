//! The nine section checkers. Each one is a pure function of the CV and locale and
//! returns a bounded `SectionScore`; none depends on another's output.

pub mod contact;
pub mod date_continuity;
pub mod education;
pub mod experience;
pub mod formatting;
pub mod languages;
pub mod projects;
pub mod skills;
pub mod summary;

use std::fmt::Display;

use crate::ats::messages::msg;
use crate::ats::types::{
    Locale, Priority, SectionKey, SectionScore, ValidationIssue, ValidationPositive,
};

/// Accumulates points and feedback for one section. Every sub-check ends in exactly one
/// of `pass`, `partial` or `fail`.
pub(crate) struct SectionTally {
    locale: Locale,
    section: SectionKey,
    score: SectionScore,
}

impl SectionTally {
    pub(crate) fn new(locale: Locale, section: SectionKey, max: u32) -> Self {
        Self {
            locale,
            section,
            score: SectionScore {
                earned: 0,
                max,
                issues: Vec::new(),
                positives: Vec::new(),
            },
        }
    }

    /// Awards `points` and records a positive.
    pub(crate) fn pass(&mut self, points: u32, key: &str) {
        self.score.earned += points;
        let text = msg(self.locale, key, &[]);
        self.score.positives.push(ValidationPositive {
            text,
            section: self.section,
        });
    }

    /// Awards `points` but still records an issue.
    pub(crate) fn partial(
        &mut self,
        points: u32,
        priority: Priority,
        key: &str,
        vars: &[(&str, &dyn Display)],
    ) {
        self.score.earned += points;
        self.fail(priority, key, vars);
    }

    /// Records an issue without awarding anything.
    pub(crate) fn fail(&mut self, priority: Priority, key: &str, vars: &[(&str, &dyn Display)]) {
        let text = msg(self.locale, key, vars);
        self.score.issues.push(ValidationIssue {
            text,
            priority,
            section: self.section,
        });
    }

    /// Awards points with no feedback item.
    pub(crate) fn award(&mut self, points: u32) {
        self.score.earned += points;
    }

    pub(crate) fn finish(mut self) -> SectionScore {
        debug_assert!(
            self.score.earned <= self.score.max,
            "section earned {} > max {}",
            self.score.earned,
            self.score.max
        );
        self.score.earned = self.score.earned.min(self.score.max);
        self.score
    }
}

/// `round(points * part / total)`, rounding halves up. `total == 0` yields 0.
pub(crate) fn proportional(points: u32, part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = 2 * points as usize * part + total;
    (scaled / (2 * total)) as u32
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

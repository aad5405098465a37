//! Static vocabularies used by the text heuristics.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ats::types::Locale;

const STRONG_VERBS_EN: &[&str] = &[
    "accelerated", "achieved", "architected", "automated", "boosted", "built", "championed",
    "consolidated", "cut", "delivered", "deployed", "designed", "developed", "directed",
    "drove", "eliminated", "engineered", "established", "expanded", "generated", "grew",
    "headed", "implemented", "improved", "increased", "initiated", "integrated", "introduced",
    "launched", "led", "managed", "mentored", "migrated", "modernized", "negotiated",
    "optimized", "orchestrated", "overhauled", "owned", "pioneered", "redesigned", "reduced",
    "refactored", "resolved", "restructured", "scaled", "secured", "shipped", "simplified",
    "spearheaded", "streamlined", "transformed", "won",
];

const WEAK_VERBS_EN: &[&str] = &[
    "assisted", "attended", "contributed", "did", "got", "handled", "helped", "involved",
    "made", "participated", "responsible", "supported", "tried", "used", "was", "worked",
];

const STRONG_VERBS_PT: &[&str] = &[
    "acelerei", "alcancei", "arquitetei", "automatizei", "aumentei", "construí", "conquistei",
    "coordenei", "criei", "desenvolvi", "diminuí", "dirigi", "economizei", "eliminei",
    "entreguei", "escalei", "estabeleci", "estruturei", "expandi", "gerei", "gerenciei",
    "idealizei", "implantei", "implementei", "integrei", "lancei", "liderei", "melhorei",
    "mentorei", "migrei", "modernizei", "negociei", "otimizei", "planejei", "projetei",
    "reduzi", "reestruturei", "refatorei", "reformulei", "resolvi", "simplifiquei",
    "transformei",
];

const WEAK_VERBS_PT: &[&str] = &[
    "ajudei", "apoiei", "atuei", "auxiliei", "colaborei", "fiz", "fui", "participei",
    "responsável", "tentei", "trabalhei", "usei", "utilizei",
];

static STRONG_EN: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STRONG_VERBS_EN.iter().copied().collect());
static WEAK_EN: Lazy<HashSet<&'static str>> =
    Lazy::new(|| WEAK_VERBS_EN.iter().copied().collect());
static STRONG_PT: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STRONG_VERBS_PT.iter().copied().collect());
static WEAK_PT: Lazy<HashSet<&'static str>> =
    Lazy::new(|| WEAK_VERBS_PT.iter().copied().collect());

static PRONOUNS_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:i|me|my|mine|myself|we|us|our|ours|ourselves)\b")
        .expect("english pronoun regex")
});
static PRONOUNS_PT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:eu|meu|minha|meus|minhas|me|nos|nosso|nossa|nossos|nossas)\b")
        .expect("portuguese pronoun regex")
});

/// How a bullet's opening word reads to a recruiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbStrength {
    Strong,
    Weak,
    Unknown,
}

pub fn classify_verb(locale: Locale, word: &str) -> VerbStrength {
    let (strong, weak) = match locale {
        Locale::Pt => (&*STRONG_PT, &*WEAK_PT),
        Locale::En => (&*STRONG_EN, &*WEAK_EN),
    };
    if strong.contains(word) {
        VerbStrength::Strong
    } else if weak.contains(word) {
        VerbStrength::Weak
    } else {
        VerbStrength::Unknown
    }
}

pub fn pronoun_pattern(locale: Locale) -> &'static Regex {
    match locale {
        Locale::Pt => &*PRONOUNS_PT,
        Locale::En => &*PRONOUNS_EN,
    }
}

pub fn has_first_person(locale: Locale, text: &str) -> bool {
    pronoun_pattern(locale).is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_english_verbs() {
        assert_eq!(classify_verb(Locale::En, "led"), VerbStrength::Strong);
        assert_eq!(classify_verb(Locale::En, "helped"), VerbStrength::Weak);
        assert_eq!(classify_verb(Locale::En, "orchestrated"), VerbStrength::Strong);
        assert_eq!(classify_verb(Locale::En, "blorped"), VerbStrength::Unknown);
    }

    #[test]
    fn test_classifies_portuguese_verbs() {
        assert_eq!(classify_verb(Locale::Pt, "liderei"), VerbStrength::Strong);
        assert_eq!(classify_verb(Locale::Pt, "ajudei"), VerbStrength::Weak);
        // English vocabulary is unknown under pt
        assert_eq!(classify_verb(Locale::Pt, "led"), VerbStrength::Unknown);
    }

    #[test]
    fn test_lists_do_not_overlap() {
        for verb in STRONG_VERBS_EN {
            assert!(!WEAK_EN.contains(verb), "{verb} is in both english lists");
        }
        for verb in STRONG_VERBS_PT {
            assert!(!WEAK_PT.contains(verb), "{verb} is in both portuguese lists");
        }
    }

    #[test]
    fn test_english_pronouns_whole_word() {
        assert!(has_first_person(Locale::En, "I led the team"));
        assert!(has_first_person(Locale::En, "Grew OUR revenue"));
        assert!(!has_first_person(Locale::En, "Mentored engineers in museum tours"));
        assert!(!has_first_person(Locale::En, "Improved performance"));
    }

    #[test]
    fn test_portuguese_pronouns_whole_word() {
        assert!(has_first_person(Locale::Pt, "Eu liderei a equipe"));
        assert!(has_first_person(Locale::Pt, "Melhorei nosso processo"));
        assert!(!has_first_person(Locale::Pt, "Liderei a equipe de dados"));
    }
}

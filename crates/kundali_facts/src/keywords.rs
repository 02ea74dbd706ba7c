//! Bilingual question keyword tables.
//!
//! Each row maps a lowercase pattern to the data it implies. Matching is
//! substring containment on the lowercased question; rows flagged
//! `whole_word` only match where no letter or digit touches either end of
//! the pattern. New terms and locales are added as rows, never as planner
//! code.

use std::borrow::Cow;

use kundali_base::{DashaLevel, DashaSystem, Locale};
use serde::{Deserialize, Serialize};

use crate::coverage::Need;
use crate::sheet::Varga;

/// One `pattern -> need` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub locale: Locale,
    pub pattern: Cow<'static, str>,
    pub need: Need,
    #[serde(default)]
    pub whole_word: bool,
}

impl KeywordRule {
    pub const fn new(locale: Locale, pattern: &'static str, need: Need) -> Self {
        Self {
            locale,
            pattern: Cow::Borrowed(pattern),
            need,
            whole_word: false,
        }
    }

    /// Same rule, matching whole words only.
    pub const fn word(mut self) -> Self {
        self.whole_word = true;
        self
    }

    /// Whether `question` (already lowercased) mentions this rule's pattern.
    pub fn matches(&self, lowered_question: &str) -> bool {
        let pattern = self.pattern.as_ref();
        if pattern.is_empty() {
            return false;
        }
        if !self.whole_word {
            return lowered_question.contains(pattern);
        }
        lowered_question.match_indices(pattern).any(|(at, found)| {
            let before = lowered_question[..at].chars().next_back();
            let after = lowered_question[at + found.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    }
}

const fn en(pattern: &'static str, need: Need) -> KeywordRule {
    KeywordRule::new(Locale::En, pattern, need)
}

const fn hi(pattern: &'static str, need: Need) -> KeywordRule {
    KeywordRule::new(Locale::Hi, pattern, need)
}

const V: DashaSystem = DashaSystem::Vimshottari;
const Y: DashaSystem = DashaSystem::Yogini;

/// Built-in English and Hindi rules.
pub static BUILTIN_RULES: &[KeywordRule] = &[
    // Divisional charts
    en("navamsa", Need::Divisional(Varga::D9)),
    en("navamsha", Need::Divisional(Varga::D9)),
    en("d9", Need::Divisional(Varga::D9)),
    en("marriage", Need::Divisional(Varga::D9)),
    en("spouse", Need::Divisional(Varga::D9)),
    en("dasamsa", Need::Divisional(Varga::D10)),
    en("dashamsha", Need::Divisional(Varga::D10)),
    en("d10", Need::Divisional(Varga::D10)),
    en("career", Need::Divisional(Varga::D10)),
    en("profession", Need::Divisional(Varga::D10)),
    en("hora", Need::Divisional(Varga::D2)),
    en("wealth", Need::Divisional(Varga::D2)),
    en("drekkana", Need::Divisional(Varga::D3)),
    en("siblings", Need::Divisional(Varga::D3)),
    en("chaturthamsa", Need::Divisional(Varga::D4)),
    en("property", Need::Divisional(Varga::D4)),
    en("saptamsa", Need::Divisional(Varga::D7)),
    en("children", Need::Divisional(Varga::D7)),
    en("dwadasamsa", Need::Divisional(Varga::D12)),
    en("parents", Need::Divisional(Varga::D12)),
    en("trimsamsa", Need::Divisional(Varga::D30)),
    en("shashtiamsa", Need::Divisional(Varga::D60)),
    hi("नवांश", Need::Divisional(Varga::D9)),
    hi("नवमांश", Need::Divisional(Varga::D9)),
    hi("विवाह", Need::Divisional(Varga::D9)),
    hi("शादी", Need::Divisional(Varga::D9)),
    hi("दशमांश", Need::Divisional(Varga::D10)),
    hi("करियर", Need::Divisional(Varga::D10)),
    hi("नौकरी", Need::Divisional(Varga::D10)),
    hi("व्यवसाय", Need::Divisional(Varga::D10)),
    hi("होरा", Need::Divisional(Varga::D2)),
    // Whole word: धनु (Sagittarius) and धनिष्ठा share the stem.
    hi("धन", Need::Divisional(Varga::D2)).word(),
    hi("संतान", Need::Divisional(Varga::D7)),
    // Dashas
    en("vimshottari", Need::Dasha(V, DashaLevel::Maha)),
    // Whole word: dashamsha is a divisional chart.
    en("dasha", Need::Dasha(V, DashaLevel::Maha)).word(),
    en("dashas", Need::Dasha(V, DashaLevel::Maha)).word(),
    en("mahadasha", Need::Dasha(V, DashaLevel::Maha)),
    en("antardasha", Need::Dasha(V, DashaLevel::Antar)),
    en("antar dasha", Need::Dasha(V, DashaLevel::Antar)),
    en("bhukti", Need::Dasha(V, DashaLevel::Antar)),
    en("current period", Need::Dasha(V, DashaLevel::Antar)),
    en("pratyantar", Need::Dasha(V, DashaLevel::Pratyantar)),
    en("sookshma", Need::Dasha(V, DashaLevel::Sookshma)),
    en("sukshma", Need::Dasha(V, DashaLevel::Sookshma)),
    en("pranadasha", Need::Dasha(V, DashaLevel::Pran)),
    en("prana dasha", Need::Dasha(V, DashaLevel::Pran)),
    en("yogini", Need::Dasha(Y, DashaLevel::Antar)),
    hi("विंशोत्तरी", Need::Dasha(V, DashaLevel::Maha)),
    hi("दशा", Need::Dasha(V, DashaLevel::Maha)),
    hi("अन्तरदशा", Need::Dasha(V, DashaLevel::Antar)),
    hi("अंतरदशा", Need::Dasha(V, DashaLevel::Antar)),
    hi("प्रत्यंतर", Need::Dasha(V, DashaLevel::Pratyantar)),
    hi("प्रत्यन्तर", Need::Dasha(V, DashaLevel::Pratyantar)),
    hi("सूक्ष्म", Need::Dasha(V, DashaLevel::Sookshma)),
    hi("प्राण", Need::Dasha(V, DashaLevel::Pran)),
    hi("योगिनी", Need::Dasha(Y, DashaLevel::Antar)),
    // Yogas and doshas
    en("yoga", Need::Yogas).word(),
    en("yogas", Need::Yogas).word(),
    en("rajyoga", Need::Yogas),
    en("dosha", Need::Doshas),
    en("manglik", Need::Doshas),
    en("kaal sarp", Need::Doshas),
    en("kalsarp", Need::Doshas),
    hi("योग", Need::Yogas).word(),
    hi("योगों", Need::Yogas),
    hi("राजयोग", Need::Yogas),
    hi("दोष", Need::Doshas),
    hi("मांगलिक", Need::Doshas),
    hi("कालसर्प", Need::Doshas),
    // Strength
    en("shadbala", Need::Shadbala),
    en("shad bala", Need::Shadbala),
    en("planetary strength", Need::Shadbala),
    hi("शड्बल", Need::Shadbala),
    hi("षड्बल", Need::Shadbala),
    hi("षडबल", Need::Shadbala),
    hi("ग्रह बल", Need::Shadbala),
];

/// Needs mentioned by `question`, in rule order, without duplicates.
pub fn needs_in<'a>(question: &str, rules: impl IntoIterator<Item = &'a KeywordRule>) -> Vec<Need> {
    let lowered = question.to_lowercase();
    let mut needs = Vec::new();
    for rule in rules {
        if rule.matches(&lowered) && !needs.contains(&rule.need) {
            needs.push(rule.need);
        }
    }
    needs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_hindi_navamsa() {
        let d9 = Need::Divisional(Varga::D9);
        assert_eq!(needs_in("Show my Navamsa chart", BUILTIN_RULES), vec![d9]);
        assert_eq!(needs_in("मेरी नवांश कुंडली", BUILTIN_RULES), vec![d9]);
    }

    #[test]
    fn antardasha_keywords() {
        let antar = Need::Dasha(DashaSystem::Vimshottari, DashaLevel::Antar);
        assert!(needs_in("Which antardasha am I in?", BUILTIN_RULES).contains(&antar));
        assert!(needs_in("मेरी अन्तरदशा क्या है", BUILTIN_RULES).contains(&antar));
    }

    #[test]
    fn shadbala_spellings() {
        for q in ["shadbala please", "मेरा शड्बल", "षड्बल बताइए"] {
            assert_eq!(needs_in(q, BUILTIN_RULES), vec![Need::Shadbala], "{q}");
        }
    }

    #[test]
    fn yogini_does_not_imply_yogas() {
        let needs = needs_in("योगिनी दशा बताइए", BUILTIN_RULES);
        assert!(!needs.contains(&Need::Yogas));
        assert!(needs.contains(&Need::Dasha(DashaSystem::Yogini, DashaLevel::Antar)));
        assert!(!needs_in("my yogini periods", BUILTIN_RULES).contains(&Need::Yogas));
    }

    #[test]
    fn dashamsha_is_not_a_dasha() {
        assert_eq!(
            needs_in("Show my dashamsha chart", BUILTIN_RULES),
            vec![Need::Divisional(Varga::D10)]
        );
        let maha = Need::Dasha(DashaSystem::Vimshottari, DashaLevel::Maha);
        assert_eq!(needs_in("Which dasha am I running?", BUILTIN_RULES), vec![maha]);
        assert_eq!(needs_in("my mahadasha", BUILTIN_RULES), vec![maha]);
    }

    #[test]
    fn dhanu_is_not_wealth() {
        let d2 = Need::Divisional(Varga::D2);
        assert!(!needs_in("मेरी धनु राशि", BUILTIN_RULES).contains(&d2));
        assert!(!needs_in("चंद्रमा धनिष्ठा नक्षत्र में", BUILTIN_RULES).contains(&d2));
        assert_eq!(needs_in("मेरे धन के बारे में", BUILTIN_RULES), vec![d2]);
    }

    #[test]
    fn hindi_yoga_at_end_of_question() {
        assert_eq!(needs_in("क्या मेरी कुंडली में योग", BUILTIN_RULES), vec![Need::Yogas]);
    }

    #[test]
    fn unrelated_question_needs_nothing() {
        assert!(needs_in("What is the weather?", BUILTIN_RULES).is_empty());
    }

    #[test]
    fn extra_rules_extend_tables() {
        let extra = [KeywordRule {
            locale: Locale::En,
            pattern: Cow::Owned("vocation".to_string()),
            need: Need::Divisional(Varga::D10),
            whole_word: true,
        }];
        let needs = needs_in("my vocation", BUILTIN_RULES.iter().chain(extra.iter()));
        assert_eq!(needs, vec![Need::Divisional(Varga::D10)]);
    }
}

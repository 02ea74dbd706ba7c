//! Graha identities, feed aliases and sign lordship.
//!
//! Nine grahas: the seven visible planets plus the lunar nodes. Rahu and
//! Ketu own no sign here.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Name spellings accepted from external feeds, lowercase.
///
/// Sanskrit, English, Hindi (Devanagari) and two-letter chart codes.
const GRAHA_ALIASES: [(Graha, &[&str]); 9] = [
    (Graha::Surya, &["surya", "sun", "su", "ravi", "सूर्य", "सूरज", "रवि"]),
    (Graha::Chandra, &["chandra", "moon", "mo", "soma", "चंद्र", "चन्द्र", "चंद्रमा"]),
    (Graha::Mangal, &["mangal", "mangala", "mars", "ma", "kuja", "मंगल"]),
    (Graha::Buddh, &["buddh", "budha", "mercury", "me", "बुध"]),
    (Graha::Guru, &["guru", "jupiter", "ju", "brihaspati", "गुरु", "बृहस्पति"]),
    (Graha::Shukra, &["shukra", "venus", "ve", "शुक्र"]),
    (Graha::Shani, &["shani", "saturn", "sa", "शनि"]),
    (Graha::Rahu, &["rahu", "ra", "north node", "राहु"]),
    (Graha::Ketu, &["ketu", "ke", "south node", "केतु"]),
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Hindi (Devanagari) name of the graha.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Surya => "सूर्य",
            Self::Chandra => "चंद्र",
            Self::Mangal => "मंगल",
            Self::Buddh => "बुध",
            Self::Guru => "गुरु",
            Self::Shukra => "शुक्र",
            Self::Shani => "शनि",
            Self::Rahu => "राहु",
            Self::Ketu => "केतु",
        }
    }

    /// Display name for a locale.
    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.english_name(),
            Locale::Hi => self.hindi_name(),
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Resolve a feed spelling (case-insensitive, surrounding space ignored).
    ///
    /// Returns None for unknown names; callers pick their own default.
    pub fn from_alias(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        GRAHA_ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&key.as_str()))
            .map(|(g, _)| *g)
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrischika → Mangal
/// - Vrishabha/Tula → Shukra
/// - Mithuna/Kanya → Buddh
/// - Karka → Chandra
/// - Simha → Surya
/// - Dhanu/Meena → Guru
/// - Makara/Kumbha → Shani
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

//! Rashi (zodiac sign) identification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal. External feeds name signs
//! by a 1-based id (1 = Mesha .. 12 = Meena); this module clamps such ids
//! instead of rejecting them.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::util::{clamp_twelve, normalize_360};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Hindi (Devanagari) name of the rashi.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Mesha => "मेष",
            Self::Vrishabha => "वृषभ",
            Self::Mithuna => "मिथुन",
            Self::Karka => "कर्क",
            Self::Simha => "सिंह",
            Self::Kanya => "कन्या",
            Self::Tula => "तुला",
            Self::Vrischika => "वृश्चिक",
            Self::Dhanu => "धनु",
            Self::Makara => "मकर",
            Self::Kumbha => "कुंभ",
            Self::Meena => "मीन",
        }
    }

    /// Sign label for a locale.
    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.western_name(),
            Locale::Hi => self.hindi_name(),
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign id (Mesha=1 .. Meena=12).
    pub const fn sign_id(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 0-based index, wrapping past 11.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Rashi from a 1-based sign id; out-of-range ids are clamped into 1..=12.
    pub fn from_sign_id(sign_id: i64) -> Self {
        Self::from_index(clamp_twelve(sign_id) - 1)
    }

    /// The rashi `offset` signs after this one (1 = same sign, 2 = next sign).
    pub const fn nth_from(self, offset: u8) -> Self {
        Self::from_index(((self.index() as u16 + offset as u16 + 11) % 12) as u8)
    }
}

/// Rashi and degrees within it for a sidereal longitude.
///
/// The longitude is normalized into [0, 360) first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> (Rashi, f64) {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / 30.0).floor() as u8).min(11);
    (Rashi::from_index(idx), lon - idx as f64 * 30.0)
}

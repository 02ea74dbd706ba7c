//! Nakshatra (lunar mansion) resolution for the 27-fold scheme.
//!
//! 27 equal mansions of 13 deg 20', four padas of 3 deg 20' each.
//!
//! The dasha engines only need the Moon's nakshatra and how much of it was
//! already traversed at birth, which `NakshatraPosition` carries.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::util::normalize_360;

/// Span of one nakshatra in the 27-scheme: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Devanagari names, same order as ALL_NAKSHATRAS_27.
const HINDI_NAMES: [&str; 27] = [
    "अश्विनी",
    "भरणी",
    "कृत्तिका",
    "रोहिणी",
    "मृगशिरा",
    "आर्द्रा",
    "पुनर्वसु",
    "पुष्य",
    "आश्लेषा",
    "मघा",
    "पूर्वा फाल्गुनी",
    "उत्तरा फाल्गुनी",
    "हस्त",
    "चित्रा",
    "स्वाति",
    "विशाखा",
    "अनुराधा",
    "ज्येष्ठा",
    "मूल",
    "पूर्वाषाढ़ा",
    "उत्तराषाढ़ा",
    "श्रवण",
    "धनिष्ठा",
    "शतभिषा",
    "पूर्वा भाद्रपद",
    "उत्तरा भाद्रपद",
    "रेवती",
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Label for a locale.
    pub fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.name(),
            Locale::Hi => HINDI_NAMES[self as usize],
        }
    }

    /// 1-based number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// The Moon's place within its nakshatra.
///
/// `index` is 1-based (1..=27) and `pada` is 1..=4; both are clamped, so an
/// input sitting on the 360 deg seam can never index past the tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra number.
    pub index: u8,
    /// Quarter within the nakshatra, 1-4.
    pub pada: u8,
    /// Portion of the nakshatra already traversed, in [0, 1).
    pub fraction_used: f64,
    /// `1 - fraction_used`.
    pub fraction_remaining: f64,
}

/// Resolve nakshatra, pada and traversed fraction from a sidereal longitude.
///
/// Longitudes are normalized into [0, 360) before lookup.
pub fn nakshatra_position(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let idx0 = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - idx0 as f64 * NAKSHATRA_SPAN_27;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    let fraction_used = (degrees_in_nakshatra / NAKSHATRA_SPAN_27).clamp(0.0, 1.0 - f64::EPSILON);

    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS_27[idx0 as usize],
        index: idx0 + 1,
        pada,
        fraction_used,
        fraction_remaining: 1.0 - fraction_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ashwini_start() {
        let p = nakshatra_position(0.0);
        assert_eq!(p.nakshatra, Nakshatra::Ashwini);
        assert_eq!(p.index, 1);
        assert_eq!(p.pada, 1);
        assert!(p.fraction_used.abs() < 1e-12);
        assert!((p.fraction_remaining - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rohini_boundary() {
        let p = nakshatra_position(40.0);
        assert_eq!(p.nakshatra, Nakshatra::Rohini);
        assert_eq!(p.index, 4);
        assert_eq!(p.pada, 1);
    }

    #[test]
    fn mid_nakshatra_fraction_and_pada() {
        let lon = 40.0 + NAKSHATRA_SPAN_27 * 0.5;
        let p = nakshatra_position(lon);
        assert!((p.fraction_used - 0.5).abs() < 1e-12);
        assert_eq!(p.pada, 3);
    }

    #[test]
    fn revati_end_stays_in_range() {
        let p = nakshatra_position(359.999_999_999);
        assert_eq!(p.nakshatra, Nakshatra::Revati);
        assert_eq!(p.index, 27);
        assert_eq!(p.pada, 4);
        assert!(p.fraction_used < 1.0);
    }

    #[test]
    fn numbers_match_table() {
        for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
            assert_eq!(n.number() as usize, i + 1);
        }
    }
}

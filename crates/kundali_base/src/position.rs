//! Normalized planet placement shared by D1 and divisional charts.

use serde::{Deserialize, Serialize};

use crate::bhava::whole_sign_house;
use crate::dignity::{Dignity, dignity_in_sign};
use crate::graha::Graha;
use crate::locale::Locale;
use crate::rashi::Rashi;

/// One graha placed in a chart.
///
/// Built once per normalization pass and never mutated afterwards; the house
/// is always the whole-sign house of `sign` from the chart's ascendant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    pub sign: Rashi,
    /// Localized sign label.
    pub sign_label: String,
    /// Whole-sign house from the ascendant, 1-12.
    pub house: u8,
    /// Degrees within the sign, [0, 30).
    pub degree: f64,
    pub retrograde: bool,
    pub dignity: Dignity,
}

impl PlanetPosition {
    /// Place `graha` in `sign` for a chart rising in `ascendant`.
    pub fn new(
        graha: Graha,
        sign: Rashi,
        ascendant: Rashi,
        degree: f64,
        retrograde: bool,
        locale: Locale,
    ) -> Self {
        Self {
            graha,
            sign,
            sign_label: sign.label(locale).to_string(),
            house: whole_sign_house(ascendant, sign),
            degree: degree.clamp(0.0, 30.0 - 1e-9),
            retrograde,
            dignity: dignity_in_sign(graha, sign),
        }
    }

    /// 1-based sign id.
    pub const fn sign_id(&self) -> u8 {
        self.sign.sign_id()
    }
}

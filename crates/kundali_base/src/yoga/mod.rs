//! Yoga and dosha detection over normalized planet positions.
//!
//! The detector set is closed: each [`Detector`] variant runs one pure rule.
//! A detector fails only when a graha it reads is malformed in the chart;
//! [`detect_all`] logs the failure and keeps the findings of the others.

pub mod chart;
pub mod rules;
pub mod text;
pub mod types;

use tracing::warn;

use crate::bhava::{DUSTHANA_HOUSES, house_lord};
use crate::error::YogaError;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::locale::Locale;
use crate::position::PlanetPosition;
use crate::rashi::Rashi;

pub use chart::ChartView;
pub use types::{Finding, FindingGroup, FindingKind, Grade};

/// Every yoga and dosha rule known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detector {
    Gajakesari,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Shasha,
    VipareetaRajyoga,
    BudhaAditya,
    ChandraMangala,
    Kemadruma,
    GuruChandal,
    KaalSarp,
    MangalDosha,
}

/// All detectors, yogas first, in reporting order.
pub const ALL_DETECTORS: [Detector; 13] = [
    Detector::Gajakesari,
    Detector::Ruchaka,
    Detector::Bhadra,
    Detector::Hamsa,
    Detector::Malavya,
    Detector::Shasha,
    Detector::VipareetaRajyoga,
    Detector::BudhaAditya,
    Detector::ChandraMangala,
    Detector::Kemadruma,
    Detector::GuruChandal,
    Detector::KaalSarp,
    Detector::MangalDosha,
];

impl Detector {
    /// Stable finding key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gajakesari => "gajakesari",
            Self::Ruchaka => "ruchaka",
            Self::Bhadra => "bhadra",
            Self::Hamsa => "hamsa",
            Self::Malavya => "malavya",
            Self::Shasha => "shasha",
            Self::VipareetaRajyoga => "vipareeta_rajyoga",
            Self::BudhaAditya => "budha_aditya",
            Self::ChandraMangala => "chandra_mangala",
            Self::Kemadruma => "kemadruma",
            Self::GuruChandal => "guru_chandal",
            Self::KaalSarp => "kaal_sarp",
            Self::MangalDosha => "mangal_dosha",
        }
    }

    pub const fn kind(self) -> FindingKind {
        match self {
            Self::Kemadruma | Self::GuruChandal | Self::KaalSarp | Self::MangalDosha => {
                FindingKind::Dosha
            }
            _ => FindingKind::Yoga,
        }
    }

    pub const fn group(self) -> FindingGroup {
        match self {
            Self::Gajakesari | Self::ChandraMangala | Self::Kemadruma => FindingGroup::Lunar,
            Self::Ruchaka | Self::Bhadra | Self::Hamsa | Self::Malavya | Self::Shasha => {
                FindingGroup::Mahapurusha
            }
            Self::VipareetaRajyoga => FindingGroup::Raja,
            Self::BudhaAditya => FindingGroup::Solar,
            Self::GuruChandal | Self::KaalSarp => FindingGroup::Nodal,
            Self::MangalDosha => FindingGroup::Marital,
        }
    }

    /// Look up a detector by its finding key.
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_DETECTORS.iter().copied().find(|d| d.key() == key)
    }

    /// Grahas whose positions this detector reads under `ascendant`.
    pub fn reads(self, ascendant: Rashi) -> Vec<Graha> {
        match self {
            Self::Gajakesari => vec![Graha::Chandra, Graha::Guru],
            Self::Ruchaka => vec![Graha::Mangal],
            Self::Bhadra => vec![Graha::Buddh],
            Self::Hamsa => vec![Graha::Guru],
            Self::Malavya => vec![Graha::Shukra],
            Self::Shasha => vec![Graha::Shani],
            Self::VipareetaRajyoga => DUSTHANA_HOUSES
                .iter()
                .map(|h| house_lord(ascendant, *h))
                .collect(),
            Self::BudhaAditya => vec![Graha::Surya, Graha::Buddh],
            Self::ChandraMangala => vec![Graha::Chandra, Graha::Mangal],
            Self::Kemadruma => SAPTA_GRAHAS.to_vec(),
            Self::GuruChandal => vec![Graha::Guru, Graha::Rahu],
            Self::KaalSarp => ALL_GRAHAS.to_vec(),
            Self::MangalDosha => vec![Graha::Mangal],
        }
    }

    /// Run this detector against one chart.
    ///
    /// `Ok(None)` when the combination is absent or a needed graha is missing.
    /// Malformed rows for grahas the detector does not read are ignored.
    pub fn detect(
        self,
        ascendant: Rashi,
        planets: &[PlanetPosition],
        locale: Locale,
    ) -> Result<Option<Finding>, YogaError> {
        self.run(&ChartView::new(ascendant, planets), locale)
    }

    fn run(self, chart: &ChartView<'_>, locale: Locale) -> Result<Option<Finding>, YogaError> {
        chart.check(&self.reads(chart.ascendant()))?;
        let found = match self {
            Self::Gajakesari => rules::gajakesari(chart, locale),
            Self::Ruchaka => rules::mahapurusha(self, Graha::Mangal, chart, locale),
            Self::Bhadra => rules::mahapurusha(self, Graha::Buddh, chart, locale),
            Self::Hamsa => rules::mahapurusha(self, Graha::Guru, chart, locale),
            Self::Malavya => rules::mahapurusha(self, Graha::Shukra, chart, locale),
            Self::Shasha => rules::mahapurusha(self, Graha::Shani, chart, locale),
            Self::VipareetaRajyoga => rules::vipareeta_rajyoga(chart, locale),
            Self::BudhaAditya => {
                rules::conjunction(self, Graha::Surya, Graha::Buddh, chart, locale)
            }
            Self::ChandraMangala => {
                rules::conjunction(self, Graha::Chandra, Graha::Mangal, chart, locale)
            }
            Self::Kemadruma => rules::kemadruma(chart, locale),
            Self::GuruChandal => {
                rules::conjunction(self, Graha::Guru, Graha::Rahu, chart, locale)
            }
            Self::KaalSarp => rules::kaal_sarp(chart, locale),
            Self::MangalDosha => rules::mangal_dosha(chart, locale),
        };
        Ok(found)
    }
}

/// Run every detector, skipping (and logging) those that fail.
pub fn detect_all(ascendant: Rashi, planets: &[PlanetPosition], locale: Locale) -> Vec<Finding> {
    let chart = ChartView::new(ascendant, planets);
    ALL_DETECTORS
        .iter()
        .filter_map(|d| match d.run(&chart, locale) {
            Ok(found) => found,
            Err(e) => {
                warn!(detector = d.key(), error = %e, "detector skipped");
                None
            }
        })
        .collect()
}

/// Yoga findings only.
pub fn detect_yogas(ascendant: Rashi, planets: &[PlanetPosition], locale: Locale) -> Vec<Finding> {
    detect_all(ascendant, planets, locale)
        .into_iter()
        .filter(Finding::is_yoga)
        .collect()
}

/// Dosha findings only.
pub fn detect_doshas(ascendant: Rashi, planets: &[PlanetPosition], locale: Locale) -> Vec<Finding> {
    detect_all(ascendant, planets, locale)
        .into_iter()
        .filter(Finding::is_dosha)
        .collect()
}

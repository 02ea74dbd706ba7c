//! The fact sheet: everything known about one chart, with provenance.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use kundali_base::{
    DashaLevel, DashaLord, DashaSystem, DashaTree, Finding, Graha, PlanetPosition, Rashi,
};
use serde::{Deserialize, Serialize};

use crate::error::FactError;

/// Divisional (varga) charts of the shodashavarga set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All sixteen vargas in ascending division order.
pub const ALL_VARGAS: [Varga; 16] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
];

impl Varga {
    /// Number of parts each sign is divided into.
    pub const fn division(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Traditional name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsa",
            Self::D7 => "Saptamsa",
            Self::D9 => "Navamsa",
            Self::D10 => "Dasamsa",
            Self::D12 => "Dwadasamsa",
            Self::D16 => "Shodasamsa",
            Self::D20 => "Vimsamsa",
            Self::D24 => "Chaturvimsamsa",
            Self::D27 => "Saptavimsamsa",
            Self::D30 => "Trimsamsa",
            Self::D40 => "Khavedamsa",
            Self::D45 => "Akshavedamsa",
            Self::D60 => "Shashtiamsa",
        }
    }

    /// Varga with `n` divisions, if it is one of the sixteen.
    pub fn from_division(n: u8) -> Option<Self> {
        ALL_VARGAS.iter().copied().find(|v| v.division() == n)
    }
}

impl Display for Varga {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.division())
    }
}

impl FromStr for Varga {
    type Err = FactError;

    /// Accepts `D9`, `d-9`, `9` and traditional names such as `navamsa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        let digits = key.strip_prefix('d').unwrap_or(&key);
        if let Ok(n) = digits.parse::<u8>() {
            return Self::from_division(n).ok_or_else(|| FactError::UnknownKey(s.to_string()));
        }
        let key = key.replace("amsha", "amsa");
        ALL_VARGAS
            .iter()
            .copied()
            .find(|v| v.name().to_ascii_lowercase() == key)
            .ok_or_else(|| FactError::UnknownKey(s.to_string()))
    }
}

/// Top-level fact categories tracked for coverage and provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactCategory {
    D1,
    Divisionals,
    Yogas,
    Doshas,
    Shadbala,
    Dashas,
}

/// Where a fact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Supplied with the user's account (the base chart).
    Account,
    /// Returned by the external ephemeris provider.
    Fetched,
    /// Computed locally by the engines.
    Computed,
}

/// One provenance entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Provenance {
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Provenance {
    pub fn new(source: Source, detail: Option<String>) -> Self {
        Self { source, detail }
    }
}

/// Planet positions of one divisional chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionalChart {
    pub varga: Varga,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascendant: Option<Rashi>,
    #[serde(default)]
    pub planets: Vec<PlanetPosition>,
}

impl DivisionalChart {
    /// A chart without planets carries no facts.
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

/// Minimum shadbala in virupas for the sapta grahas (BPHS).
pub const fn required_strength(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(390.0),
        Graha::Chandra => Some(360.0),
        Graha::Mangal => Some(300.0),
        Graha::Buddh => Some(420.0),
        Graha::Guru => Some(390.0),
        Graha::Shukra => Some(330.0),
        Graha::Shani => Some(300.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Shadbala total of one graha against its required minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadbalaRow {
    pub graha: Graha,
    /// Total strength in virupas (60 virupas = 1 rupa).
    pub virupas: f64,
    pub required: f64,
    pub is_strong: bool,
}

impl ShadbalaRow {
    /// Row for `graha`; None for the nodes, which carry no shadbala.
    pub fn new(graha: Graha, virupas: f64) -> Option<Self> {
        let required = required_strength(graha)?;
        Some(Self {
            graha,
            virupas,
            required,
            is_strong: virupas >= required,
        })
    }

    /// Strength in rupas.
    pub fn rupas(&self) -> f64 {
        self.virupas / 60.0
    }
}

/// One flattened dasha period, as consumed by timelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaItem {
    pub system: DashaSystem,
    pub level: DashaLevel,
    /// Lords from the maha level down to this period.
    pub path: Vec<DashaLord>,
    pub lord: DashaLord,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub years: f64,
}

impl DashaItem {
    /// Flatten the requested levels of a tree, coarsest level first.
    pub fn from_tree(tree: &DashaTree, levels: &[DashaLevel]) -> Vec<DashaItem> {
        let mut levels: Vec<DashaLevel> =
            levels.iter().copied().filter(|l| *l <= tree.depth).collect();
        levels.sort_unstable();
        levels.dedup();
        levels
            .into_iter()
            .flat_map(|level| {
                tree.periods_at(level).into_iter().map(move |(path, p)| DashaItem {
                    system: tree.system,
                    level,
                    path,
                    lord: p.lord,
                    start: p.start,
                    end: p.end,
                    years: p.years,
                })
            })
            .collect()
    }
}

/// Everything known about one chart.
///
/// Provenance is append-only: entries are added by merges and never removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactSheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascendant: Option<Rashi>,
    /// D1 positions.
    pub planets: Vec<PlanetPosition>,
    pub divisionals: Vec<DivisionalChart>,
    pub yogas: Vec<Finding>,
    pub doshas: Vec<Finding>,
    pub shadbala: Vec<ShadbalaRow>,
    pub dashas: Vec<DashaItem>,
    pub provenance: BTreeMap<FactCategory, BTreeSet<Provenance>>,
}

impl FactSheet {
    /// A sheet holding the account's D1 chart.
    pub fn from_account(ascendant: Rashi, planets: Vec<PlanetPosition>) -> Self {
        let mut sheet = Self {
            ascendant: Some(ascendant),
            planets,
            ..Self::default()
        };
        sheet.record(FactCategory::D1, Provenance::new(Source::Account, None));
        sheet
    }

    /// Append a provenance entry.
    pub fn record(&mut self, category: FactCategory, provenance: Provenance) {
        self.provenance.entry(category).or_default().insert(provenance);
    }

    /// Whether any provenance was recorded for `category`.
    pub fn attributed(&self, category: FactCategory) -> bool {
        self.provenance.get(&category).is_some_and(|p| !p.is_empty())
    }

    /// Whether the sheet holds data for `category`.
    pub fn has_data(&self, category: FactCategory) -> bool {
        match category {
            FactCategory::D1 => !self.planets.is_empty(),
            FactCategory::Divisionals => self.divisionals.iter().any(|d| !d.is_empty()),
            FactCategory::Yogas => !self.yogas.is_empty(),
            FactCategory::Doshas => !self.doshas.is_empty(),
            FactCategory::Shadbala => !self.shadbala.is_empty(),
            FactCategory::Dashas => !self.dashas.is_empty(),
        }
    }

    pub fn divisional(&self, varga: Varga) -> Option<&DivisionalChart> {
        self.divisionals.iter().find(|d| d.varga == varga)
    }

    /// Dasha levels present for `system`.
    pub fn dasha_levels(&self, system: DashaSystem) -> BTreeSet<DashaLevel> {
        self.dashas
            .iter()
            .filter(|d| d.system == system)
            .map(|d| d.level)
            .collect()
    }

    pub fn dasha_items(
        &self,
        system: DashaSystem,
        level: DashaLevel,
    ) -> impl Iterator<Item = &DashaItem> {
        self.dashas
            .iter()
            .filter(move |d| d.system == system && d.level == level)
    }
}

//! What a fact sheet already covers, and what a question still needs.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use kundali_base::{DashaLevel, DashaSystem};
use serde::{Deserialize, Serialize};

use crate::error::FactError;
use crate::sheet::{FactCategory, FactSheet, Varga};

/// Dasha levels present per system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaCoverage {
    pub vimshottari: BTreeSet<DashaLevel>,
    pub yogini: BTreeSet<DashaLevel>,
}

impl DashaCoverage {
    pub fn levels(&self, system: DashaSystem) -> &BTreeSet<DashaLevel> {
        match system {
            DashaSystem::Vimshottari => &self.vimshottari,
            DashaSystem::Yogini => &self.yogini,
        }
    }
}

/// Projection of a fact sheet onto its fact categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub d1: bool,
    pub divisionals: BTreeSet<Varga>,
    pub yogas: bool,
    pub doshas: bool,
    pub shadbala: bool,
    pub dashas: DashaCoverage,
}

/// Compute the coverage of `sheet`.
///
/// Yogas, doshas and shadbala count as covered when the sheet holds data or
/// has provenance for them, so a detection pass that found nothing is not
/// repeated. Divisionals and dasha levels are covered per chart and per level;
/// a divisional chart without planets covers nothing.
pub fn coverage_of(sheet: &FactSheet) -> Coverage {
    let covered = |c: FactCategory| sheet.has_data(c) || sheet.attributed(c);
    let mut divisionals: BTreeSet<Varga> = sheet
        .divisionals
        .iter()
        .filter(|d| !d.is_empty())
        .map(|d| d.varga)
        .collect();
    if !sheet.planets.is_empty() {
        divisionals.insert(Varga::D1);
    }
    Coverage {
        d1: covered(FactCategory::D1),
        divisionals,
        yogas: covered(FactCategory::Yogas),
        doshas: covered(FactCategory::Doshas),
        shadbala: covered(FactCategory::Shadbala),
        dashas: DashaCoverage {
            vimshottari: sheet.dasha_levels(DashaSystem::Vimshottari),
            yogini: sheet.dasha_levels(DashaSystem::Yogini),
        },
    }
}

/// A unit of required data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Need {
    D1,
    Divisional(Varga),
    Yogas,
    Doshas,
    Shadbala,
    Dasha(DashaSystem, DashaLevel),
}

impl Need {
    /// Fact category this need belongs to.
    pub const fn category(self) -> FactCategory {
        match self {
            Self::D1 => FactCategory::D1,
            Self::Divisional(Varga::D1) => FactCategory::D1,
            Self::Divisional(_) => FactCategory::Divisionals,
            Self::Yogas => FactCategory::Yogas,
            Self::Doshas => FactCategory::Doshas,
            Self::Shadbala => FactCategory::Shadbala,
            Self::Dasha(..) => FactCategory::Dashas,
        }
    }

    /// This need plus everything it implies: a dasha level needs every
    /// coarser level of the same system.
    pub fn expand(self) -> Vec<Need> {
        match self {
            Self::Dasha(system, level) => level
                .up_to()
                .iter()
                .map(|l| Self::Dasha(system, *l))
                .collect(),
            Self::Divisional(Varga::D1) => vec![Self::D1],
            other => vec![other],
        }
    }
}

impl Display for Need {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D1 => f.write_str("D1"),
            Self::Divisional(v) => write!(f, "{v}"),
            Self::Yogas => f.write_str("yogas"),
            Self::Doshas => f.write_str("doshas"),
            Self::Shadbala => f.write_str("shadbala"),
            Self::Dasha(s, l) => write!(f, "{s}:{l}"),
        }
    }
}

impl FromStr for Need {
    type Err = FactError;

    /// Parses DataNeeded keys: `D9`, `navamsa`, `yogas`, `doshas`,
    /// `shadbala`, `vimshottari`, `yogini:antar`, `vimshottari_pratyantar`,
    /// `antardasha`, `dasha`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let unknown = || FactError::UnknownKey(s.to_string());
        match key.as_str() {
            "" => return Err(unknown()),
            "d1" | "rasi" | "rashi" | "lagna" | "birth_chart" | "chart" => return Ok(Self::D1),
            "yoga" | "yogas" => return Ok(Self::Yogas),
            "dosha" | "doshas" => return Ok(Self::Doshas),
            "shadbala" | "strength" | "strengths" => return Ok(Self::Shadbala),
            "dasha" | "dashas" => {
                return Ok(Self::Dasha(DashaSystem::Vimshottari, DashaLevel::Maha));
            }
            _ => {}
        }

        if let Some((system, level)) = key.split_once([':', '_', '.', '/']) {
            if let Ok(system) = system.parse::<DashaSystem>() {
                let level = level.parse::<DashaLevel>().map_err(|_| unknown())?;
                return Ok(Self::Dasha(system, level));
            }
        }
        if let Ok(system) = key.parse::<DashaSystem>() {
            return Ok(Self::Dasha(system, DashaLevel::Maha));
        }
        if let Ok(level) = key.parse::<DashaLevel>() {
            return Ok(Self::Dasha(DashaSystem::Vimshottari, level));
        }
        if let Some(rest) = key.strip_prefix("divisional") {
            return rest
                .trim_start_matches([':', '_', '.', '/'])
                .parse::<Varga>()
                .map(Self::Divisional)
                .map_err(|_| unknown());
        }
        key.parse::<Varga>()
            .map(|v| if v == Varga::D1 { Self::D1 } else { Self::Divisional(v) })
            .map_err(|_| unknown())
    }
}

impl Coverage {
    /// Whether `need` is already satisfied.
    pub fn satisfies(&self, need: Need) -> bool {
        match need {
            Need::D1 | Need::Divisional(Varga::D1) => self.d1,
            Need::Divisional(v) => self.divisionals.contains(&v),
            Need::Yogas => self.yogas,
            Need::Doshas => self.doshas,
            Need::Shadbala => self.shadbala,
            Need::Dasha(system, level) => self.dashas.levels(system).contains(&level),
        }
    }
}

/// Needs not satisfied by `coverage`, implied needs included, first
/// occurrence order, without duplicates.
pub fn missing_for(needs: &[Need], coverage: &Coverage) -> Vec<Need> {
    let mut seen = BTreeSet::new();
    needs
        .iter()
        .flat_map(|n| n.expand())
        .filter(|n| seen.insert(*n))
        .filter(|n| !coverage.satisfies(*n))
        .collect()
}

//! Core types for dasha (planetary period) calculations.
//!
//! A dasha tree is an owned recursive structure: every period holds its
//! sub-periods, and the children of a period partition its span exactly.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::locale::Locale;
use crate::nakshatra::NakshatraPosition;

/// Year length constant for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds in one dasha year.
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * 86_400.0;

/// Largest accepted drift between a parent span and its children, in seconds.
pub const PARTITION_TOLERANCE_SECONDS: i64 = 1;

/// 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DashaLevel {
    Maha = 0,
    Antar = 1,
    Pratyantar = 2,
    Sookshma = 3,
    Pran = 4,
}

/// All levels, coarsest first.
pub const ALL_DASHA_LEVELS: [DashaLevel; 5] = [
    DashaLevel::Maha,
    DashaLevel::Antar,
    DashaLevel::Pratyantar,
    DashaLevel::Sookshma,
    DashaLevel::Pran,
];

impl DashaLevel {
    /// Create from raw u8 depth.
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_DASHA_LEVELS.get(v as usize).copied()
    }

    /// Depth below the maha level (Maha = 0).
    pub const fn depth(self) -> u8 {
        self as u8
    }

    /// Short key used in fetch keys and provenance details.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Maha => "maha",
            Self::Antar => "antar",
            Self::Pratyantar => "pratyantar",
            Self::Sookshma => "sookshma",
            Self::Pran => "pran",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Mahadasha",
            Self::Antar => "Antardasha",
            Self::Pratyantar => "Pratyantardasha",
            Self::Sookshma => "Sookshmadasha",
            Self::Pran => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Antar),
            Self::Antar => Some(Self::Pratyantar),
            Self::Pratyantar => Some(Self::Sookshma),
            Self::Sookshma => Some(Self::Pran),
            Self::Pran => None,
        }
    }

    /// This level and every coarser one, coarsest first.
    pub fn up_to(self) -> &'static [DashaLevel] {
        &ALL_DASHA_LEVELS[..=self.depth() as usize]
    }
}

impl Display for DashaLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DashaLevel {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maha" | "mahadasha" | "md" => Ok(Self::Maha),
            "antar" | "antardasha" | "ad" | "bhukti" => Ok(Self::Antar),
            "pratyantar" | "pratyantardasha" | "pd" => Ok(Self::Pratyantar),
            "sookshma" | "sookshmadasha" | "sukshma" | "sd" => Ok(Self::Sookshma),
            "pran" | "prana" | "pranadasha" => Ok(Self::Pran),
            _ => Err(VedicError::InvalidInput("unknown dasha level")),
        }
    }
}

/// Dasha systems computed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaSystem {
    Vimshottari,
    Yogini,
}

impl DashaSystem {
    /// Lowercase key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vimshottari => "vimshottari",
            Self::Yogini => "yogini",
        }
    }
}

impl Display for DashaSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DashaSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vimshottari" | "vimsottari" | "vimshottri" => Ok(Self::Vimshottari),
            "yogini" => Ok(Self::Yogini),
            _ => Err(VedicError::InvalidInput("unknown dasha system")),
        }
    }
}

/// The 8 yoginis of the Yogini dasha, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Yogini {
    Mangala,
    Pingala,
    Dhanya,
    Bhramari,
    Bhadrika,
    Ulka,
    Siddha,
    Sankata,
}

/// All 8 yoginis in cycle order.
pub const ALL_YOGINIS: [Yogini; 8] = [
    Yogini::Mangala,
    Yogini::Pingala,
    Yogini::Dhanya,
    Yogini::Bhramari,
    Yogini::Bhadrika,
    Yogini::Ulka,
    Yogini::Siddha,
    Yogini::Sankata,
];

impl Yogini {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mangala => "Mangala",
            Self::Pingala => "Pingala",
            Self::Dhanya => "Dhanya",
            Self::Bhramari => "Bhramari",
            Self::Bhadrika => "Bhadrika",
            Self::Ulka => "Ulka",
            Self::Siddha => "Siddha",
            Self::Sankata => "Sankata",
        }
    }

    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Mangala => "मंगला",
            Self::Pingala => "पिंगला",
            Self::Dhanya => "धान्या",
            Self::Bhramari => "भ्रामरी",
            Self::Bhadrika => "भद्रिका",
            Self::Ulka => "उल्का",
            Self::Siddha => "सिद्धा",
            Self::Sankata => "संकटा",
        }
    }

    /// 0-based position in the cycle.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Graha associated with the yogini.
    pub const fn graha(self) -> Graha {
        match self {
            Self::Mangala => Graha::Chandra,
            Self::Pingala => Graha::Surya,
            Self::Dhanya => Graha::Guru,
            Self::Bhramari => Graha::Mangal,
            Self::Bhadrika => Graha::Buddh,
            Self::Ulka => Graha::Shani,
            Self::Siddha => Graha::Shukra,
            Self::Sankata => Graha::Rahu,
        }
    }

    /// Look up by name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim();
        ALL_YOGINIS
            .iter()
            .copied()
            .find(|y| y.name().eq_ignore_ascii_case(key) || y.hindi_name() == key)
    }
}

/// What rules a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLord {
    Graha(Graha),
    Yogini(Yogini),
}

impl DashaLord {
    /// English display name (`Venus`, `Mangala`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Graha(g) => g.english_name(),
            Self::Yogini(y) => y.name(),
        }
    }

    /// Display name for a locale.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Graha(g), _) => g.label(locale),
            (Self::Yogini(y), Locale::En) => y.name(),
            (Self::Yogini(y), Locale::Hi) => y.hindi_name(),
        }
    }

    /// Graha behind this lord (a yogini's associated graha).
    pub const fn graha(self) -> Graha {
        match self {
            Self::Graha(g) => g,
            Self::Yogini(y) => y.graha(),
        }
    }
}

/// A single dasha period and its sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// The lord ruling this period.
    pub lord: DashaLord,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Exclusive end, strictly after `start`.
    pub end: DateTime<Utc>,
    /// Nominal length in dasha years.
    pub years: f64,
    /// Sub-periods in chronological order; empty at the requested depth.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Wall-clock length of the period.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `at` falls inside `[start, end)`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// A complete period tree for one dasha system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTree {
    /// Which system produced this tree.
    pub system: DashaSystem,
    /// Birth instant, start of the first maha period.
    pub birth: DateTime<Utc>,
    /// The Moon's nakshatra at birth.
    pub nakshatra: NakshatraPosition,
    /// Deepest level materialized.
    pub depth: DashaLevel,
    /// Maha periods in chronological order.
    pub periods: Vec<DashaPeriod>,
}

impl DashaTree {
    /// End of the last maha period.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.periods.last().map(|p| p.end)
    }

    /// Sum of maha period lengths in years.
    pub fn total_years(&self) -> f64 {
        self.periods.iter().map(|p| p.years).sum()
    }

    /// Every period at `level`, in chronological order, with the lords of its
    /// ancestors (maha first, the period's own lord last).
    pub fn periods_at(&self, level: DashaLevel) -> Vec<(Vec<DashaLord>, &DashaPeriod)> {
        let mut out = Vec::new();
        let mut path = Vec::with_capacity(level.depth() as usize + 1);
        for p in &self.periods {
            collect_level(p, level, &mut path, &mut out);
        }
        out
    }
}

fn collect_level<'a>(
    period: &'a DashaPeriod,
    level: DashaLevel,
    path: &mut Vec<DashaLord>,
    out: &mut Vec<(Vec<DashaLord>, &'a DashaPeriod)>,
) {
    path.push(period.lord);
    if period.level == level {
        out.push((path.clone(), period));
    } else if period.level < level {
        for child in &period.children {
            collect_level(child, level, path, out);
        }
    }
    path.pop();
}

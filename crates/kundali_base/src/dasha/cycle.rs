//! Lord cycles for the nakshatra-based dasha systems.
//!
//! Vimshottari: 9 grahas, 120-year cycle, Ketu first.
//! Yogini: 8 yoginis, 36-year cycle, Mangala first.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

use super::types::{DashaLord, DashaSystem, Yogini};

/// Vimshottari lords and their full periods in years.
const VIMSHOTTARI_SEQUENCE: [(DashaLord, f64); 9] = [
    (DashaLord::Graha(Graha::Ketu), 7.0),
    (DashaLord::Graha(Graha::Shukra), 20.0),
    (DashaLord::Graha(Graha::Surya), 6.0),
    (DashaLord::Graha(Graha::Chandra), 10.0),
    (DashaLord::Graha(Graha::Mangal), 7.0),
    (DashaLord::Graha(Graha::Rahu), 18.0),
    (DashaLord::Graha(Graha::Guru), 16.0),
    (DashaLord::Graha(Graha::Shani), 19.0),
    (DashaLord::Graha(Graha::Buddh), 17.0),
];

/// Yogini lords and their full periods in years (1..8).
const YOGINI_SEQUENCE: [(DashaLord, f64); 8] = [
    (DashaLord::Yogini(Yogini::Mangala), 1.0),
    (DashaLord::Yogini(Yogini::Pingala), 2.0),
    (DashaLord::Yogini(Yogini::Dhanya), 3.0),
    (DashaLord::Yogini(Yogini::Bhramari), 4.0),
    (DashaLord::Yogini(Yogini::Bhadrika), 5.0),
    (DashaLord::Yogini(Yogini::Ulka), 6.0),
    (DashaLord::Yogini(Yogini::Siddha), 7.0),
    (DashaLord::Yogini(Yogini::Sankata), 8.0),
];

/// Vimshottari cycle.
pub static VIMSHOTTARI: LordCycle = LordCycle {
    system: DashaSystem::Vimshottari,
    sequence: &VIMSHOTTARI_SEQUENCE,
    total_years: 120.0,
};

/// Yogini cycle.
pub static YOGINI: LordCycle = LordCycle {
    system: DashaSystem::Yogini,
    sequence: &YOGINI_SEQUENCE,
    total_years: 36.0,
};

/// How the first yogini is chosen from the birth nakshatra.
///
/// Traditions disagree here, so the rule is configuration rather than
/// hard-coded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YoginiStart {
    /// `(nakshatra + 3) mod 8` with 0 read as 8: Ardra starts with Mangala.
    #[default]
    Classical,
    /// `(nakshatra - 1) mod 8`: Ashwini starts with Mangala.
    Sequential,
    /// Always start with the given yogini.
    Fixed(Yogini),
}

/// An ordered, cyclic list of dasha lords with their full periods.
#[derive(Debug)]
pub struct LordCycle {
    pub system: DashaSystem,
    pub sequence: &'static [(DashaLord, f64)],
    pub total_years: f64,
}

impl LordCycle {
    /// Cycle for a dasha system.
    pub fn for_system(system: DashaSystem) -> &'static LordCycle {
        match system {
            DashaSystem::Vimshottari => &VIMSHOTTARI,
            DashaSystem::Yogini => &YOGINI,
        }
    }

    /// Number of lords in the cycle.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Lord at cycle position `idx` (wraps).
    pub fn lord(&self, idx: usize) -> DashaLord {
        self.sequence[idx % self.len()].0
    }

    /// Full period of the lord at cycle position `idx` (wraps).
    pub fn years(&self, idx: usize) -> f64 {
        self.sequence[idx % self.len()].1
    }

    /// Cycle position of `lord`, if it belongs to this cycle.
    pub fn position(&self, lord: DashaLord) -> Option<usize> {
        self.sequence.iter().position(|(l, _)| *l == lord)
    }

    /// Cycle position of the first maha lord for a 1-based nakshatra number.
    ///
    /// `yogini_start` only affects the Yogini cycle.
    pub fn first_lord_index(&self, nakshatra_number: u8, yogini_start: YoginiStart) -> usize {
        let n = nakshatra_number.clamp(1, 27) as usize;
        match self.system {
            DashaSystem::Vimshottari => (n - 1) % self.len(),
            DashaSystem::Yogini => match yogini_start {
                YoginiStart::Classical => match (n + 3) % 8 {
                    0 => 7,
                    r => r - 1,
                },
                YoginiStart::Sequential => (n - 1) % 8,
                YoginiStart::Fixed(y) => y.index() as usize,
            },
        }
    }
}

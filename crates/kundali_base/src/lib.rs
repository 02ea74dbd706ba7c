//! Deterministic jyotish math for birth-chart fact sheets.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra tables with localized labels
//! - Whole-sign house mapping relative to an ascendant
//! - Sign-based dignity classification
//! - Vimshottari (120y) and Yogini (36y) dasha trees, five levels deep
//! - A closed set of yoga/dosha detectors over normalized planet positions
//!
//! Everything here is pure: no I/O, no shared mutable state. Positions are
//! consumed, never computed from an ephemeris.

pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod locale;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod util;
pub mod yoga;

pub use ayanamsha::AyanamshaSystem;
pub use bhava::{
    DUSTHANA_HOUSES, KENDRA_HOUSES, house_lord, is_dusthana, is_kendra, relative_house,
    sign_of_house, whole_sign_house,
};
pub use dasha::{
    DashaConfig, DashaLevel, DashaLord, DashaPeriod, DashaSystem, DashaTree, Yogini, YoginiStart,
    active_stack, dasha_tree, validate_tree,
};
pub use dignity::{Dignity, debilitation_sign, dignity_in_sign, exaltation_sign, own_signs};
pub use error::{DashaError, VedicError, YogaError};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use locale::Locale;
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraPosition, PADA_SPAN,
    nakshatra_position,
};
pub use position::PlanetPosition;
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use yoga::{
    ALL_DETECTORS, Detector, Finding, FindingGroup, FindingKind, Grade, detect_all,
    detect_doshas, detect_yogas,
};

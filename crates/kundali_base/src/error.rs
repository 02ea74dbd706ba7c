//! Error types for jyotish calculations.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::dasha::types::{DashaLevel, DashaSystem};
use crate::graha::Graha;

/// Errors from base jyotish calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Dasha tree construction or validation failed.
    #[error("dasha error: {0}")]
    Dasha(#[from] DashaError),
    /// A yoga detector rejected its chart.
    #[error("yoga error: {0}")]
    Yoga(#[from] YogaError),
    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Dasha tree invariant violations.
///
/// A tree that fails these checks is a programming error; callers must never
/// treat such a tree as approximately correct.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DashaError {
    /// Periods at one level do not partition their parent span.
    #[error("{system:?} {level:?} partition violation at {lord}: {detail}")]
    PartitionViolation {
        system: DashaSystem,
        level: DashaLevel,
        lord: String,
        detail: String,
    },
    /// A period boundary falls outside the representable date range.
    #[error("period boundary {seconds}s after {birth} is outside the supported date range")]
    DateOutOfRange { birth: DateTime<Utc>, seconds: f64 },
    /// Maha periods do not add up to the cycle total.
    #[error("{system:?} maha periods span {actual_years} years, expected {expected_years}")]
    CycleTotal {
        system: DashaSystem,
        expected_years: f64,
        actual_years: f64,
    },
}

/// Malformed chart input seen by a yoga detector.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum YogaError {
    /// The same graha appears more than once.
    #[error("graha {} listed more than once", .0.english_name())]
    DuplicateGraha(Graha),
    /// A house number outside 1..=12.
    #[error("graha {} has house {house} outside 1..=12", .graha.english_name())]
    HouseOutOfRange { graha: Graha, house: u8 },
    /// House and sign disagree under whole-sign counting.
    #[error(
        "graha {} in house {house} but its sign implies house {expected}",
        .graha.english_name()
    )]
    HouseSignMismatch { graha: Graha, house: u8, expected: u8 },
}

//! Error types for fact sheets, profiles and configuration.

use std::path::PathBuf;

use kundali_base::{DashaError, VedicError};
use thiserror::Error;

/// Errors from building or completing a fact sheet.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Dasha(#[from] DashaError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// A DataNeeded key that names no known fact category.
    #[error("unknown fact key: {0}")]
    UnknownKey(String),
    /// Invalid input parameter.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Birth profile validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Birth year outside [`MIN_BIRTH_YEAR`, `MAX_BIRTH_YEAR`].
    ///
    /// [`MIN_BIRTH_YEAR`]: crate::profile::MIN_BIRTH_YEAR
    /// [`MAX_BIRTH_YEAR`]: crate::profile::MAX_BIRTH_YEAR
    #[error("birth year {0} outside the supported range")]
    DateOutOfRange(i32),
    #[error("UTC offset {0} minutes outside +/-18h")]
    OffsetOutOfRange(i32),
    #[error("unknown time zone {0:?}")]
    UnknownZone(String),
    /// Neither a fixed offset nor an IANA zone was given, or both were.
    #[error("exactly one of utc_offset_minutes or timezone is required")]
    ZoneMissing,
    /// The local time falls in a DST gap.
    #[error("local time {0} does not exist in {1}")]
    NonexistentLocalTime(String, String),
    /// The local time is repeated and the profile rejects ambiguity.
    #[error("local time {0} is ambiguous in {1}")]
    AmbiguousLocalTime(String, String),
    #[error("unknown ayanamsha {0:?}")]
    UnknownAyanamsha(String),
}

/// Configuration loading failures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Validated birth profile.
//!
//! A profile is checked once at construction (coordinates, zone, local time)
//! and is immutable afterwards, so the birth instant can be handed to the
//! engines without further checks.

use std::fmt::{Display, Formatter};

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc,
};
use chrono_tz::Tz;
use kundali_base::AyanamshaSystem;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ProfileError;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1;

/// Latest accepted birth year; a full dasha cycle from it stays within the
/// four-digit calendar.
pub const MAX_BIRTH_YEAR: i32 = 9_999 - 120;

/// Where the birth clock time was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthZone {
    /// Fixed offset east of UTC.
    Offset(FixedOffset),
    /// IANA zone, with historical DST rules.
    Iana(Tz),
}

impl Display for BirthZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offset(o) => write!(f, "{o}"),
            Self::Iana(tz) => f.write_str(tz.name()),
        }
    }
}

/// How to read a local time that occurs twice (DST fall-back).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguousTime {
    /// Take the earlier instant and log it.
    #[default]
    Earliest,
    Latest,
    Reject,
}

/// Birth date, time and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile", into = "RawProfile")]
pub struct BirthProfile {
    date: NaiveDate,
    time: NaiveTime,
    zone: BirthZone,
    latitude: f64,
    longitude: f64,
    ayanamsha: AyanamshaSystem,
    ambiguous: AmbiguousTime,
    utc: DateTime<Utc>,
}

impl BirthProfile {
    /// Validate and build a profile.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        zone: BirthZone,
        latitude: f64,
        longitude: f64,
        ayanamsha: AyanamshaSystem,
    ) -> Result<Self, ProfileError> {
        let policy = AmbiguousTime::default();
        Self::with_policy(date, time, zone, latitude, longitude, ayanamsha, policy)
    }

    /// Like [`BirthProfile::new`] with an explicit ambiguous-time policy.
    pub fn with_policy(
        date: NaiveDate,
        time: NaiveTime,
        zone: BirthZone,
        latitude: f64,
        longitude: f64,
        ayanamsha: AyanamshaSystem,
        ambiguous: AmbiguousTime,
    ) -> Result<Self, ProfileError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ProfileError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ProfileError::LongitudeOutOfRange(longitude));
        }
        if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&date.year()) {
            return Err(ProfileError::DateOutOfRange(date.year()));
        }
        let utc = resolve_utc(date.and_time(time), zone, ambiguous)?;
        Ok(Self {
            date,
            time,
            zone,
            latitude,
            longitude,
            ayanamsha,
            ambiguous,
            utc,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn zone(&self) -> BirthZone {
        self.zone
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn ayanamsha(&self) -> AyanamshaSystem {
        self.ayanamsha
    }

    /// The birth instant.
    pub fn birth_utc(&self) -> DateTime<Utc> {
        self.utc
    }
}

fn resolve_utc(
    local: NaiveDateTime,
    zone: BirthZone,
    ambiguous: AmbiguousTime,
) -> Result<DateTime<Utc>, ProfileError> {
    let resolved = match zone {
        BirthZone::Offset(offset) => map_local(offset.from_local_datetime(&local)),
        BirthZone::Iana(tz) => map_local(tz.from_local_datetime(&local)),
    };
    match resolved {
        LocalResult::Single(utc) => Ok(utc),
        LocalResult::Ambiguous(early, late) => match ambiguous {
            AmbiguousTime::Earliest => {
                warn!(
                    %local,
                    %zone,
                    chosen = %early,
                    "ambiguous local birth time, using earlier instant"
                );
                Ok(early)
            }
            AmbiguousTime::Latest => Ok(late),
            AmbiguousTime::Reject => Err(ProfileError::AmbiguousLocalTime(
                local.to_string(),
                zone.to_string(),
            )),
        },
        LocalResult::None => Err(ProfileError::NonexistentLocalTime(
            local.to_string(),
            zone.to_string(),
        )),
    }
}

fn map_local<Z: TimeZone>(result: LocalResult<DateTime<Z>>) -> LocalResult<DateTime<Utc>> {
    match result {
        LocalResult::Single(dt) => LocalResult::Single(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(a, b) => {
            LocalResult::Ambiguous(a.with_timezone(&Utc), b.with_timezone(&Utc))
        }
        LocalResult::None => LocalResult::None,
    }
}

/// Wire form of a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProfile {
    date: NaiveDate,
    time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    utc_offset_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    ayanamsha: AyanamshaSystem,
    #[serde(default)]
    ambiguous: AmbiguousTime,
}

impl TryFrom<RawProfile> for BirthProfile {
    type Error = ProfileError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        let zone = match (raw.utc_offset_minutes, raw.timezone.as_deref()) {
            (Some(minutes), None) => BirthZone::Offset(
                FixedOffset::east_opt(minutes.saturating_mul(60))
                    .ok_or(ProfileError::OffsetOutOfRange(minutes))?,
            ),
            (None, Some(name)) => BirthZone::Iana(
                name.trim()
                    .parse::<Tz>()
                    .map_err(|_| ProfileError::UnknownZone(name.to_string()))?,
            ),
            _ => return Err(ProfileError::ZoneMissing),
        };
        Self::with_policy(
            raw.date,
            raw.time,
            zone,
            raw.latitude,
            raw.longitude,
            raw.ayanamsha,
            raw.ambiguous,
        )
    }
}

impl From<BirthProfile> for RawProfile {
    fn from(p: BirthProfile) -> Self {
        let (utc_offset_minutes, timezone) = match p.zone {
            BirthZone::Offset(o) => (Some(o.local_minus_utc() / 60), None),
            BirthZone::Iana(tz) => (None, Some(tz.name().to_string())),
        };
        Self {
            date: p.date,
            time: p.time,
            utc_offset_minutes,
            timezone,
            latitude: p.latitude,
            longitude: p.longitude,
            ayanamsha: p.ayanamsha,
            ambiguous: p.ambiguous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> BirthZone {
        BirthZone::Offset(FixedOffset::east_opt(19_800).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn lahiri(
        date: NaiveDate,
        time: NaiveTime,
        zone: BirthZone,
        lat: f64,
        lon: f64,
    ) -> Result<BirthProfile, ProfileError> {
        BirthProfile::new(date, time, zone, lat, lon, AyanamshaSystem::Lahiri)
    }

    #[test]
    fn fixed_offset_birth_instant() {
        let p = lahiri(date(1990, 1, 15), time(12, 0), ist(), 28.61, 77.21).unwrap();
        assert_eq!(p.birth_utc(), Utc.with_ymd_and_hms(1990, 1, 15, 6, 30, 0).unwrap());
    }

    #[test]
    fn coordinates_validated() {
        let err = lahiri(date(1990, 1, 15), time(12, 0), ist(), 91.0, 0.0).unwrap_err();
        assert_eq!(err, ProfileError::LatitudeOutOfRange(91.0));
        let err = lahiri(date(1990, 1, 15), time(12, 0), ist(), 0.0, f64::NAN).unwrap_err();
        assert!(matches!(err, ProfileError::LongitudeOutOfRange(_)));
    }

    #[test]
    fn far_dates_rejected() {
        for year in [262_100, 9_950, 0, -44] {
            let err = lahiri(date(year, 1, 1), time(0, 0), ist(), 0.0, 0.0).unwrap_err();
            assert_eq!(err, ProfileError::DateOutOfRange(year));
        }
        assert!(lahiri(date(MAX_BIRTH_YEAR, 12, 31), time(23, 0), ist(), 0.0, 0.0).is_ok());
    }

    #[test]
    fn dst_gap_rejected() {
        // 2021-03-14 02:30 does not exist in New York
        let zone = BirthZone::Iana(chrono_tz::America::New_York);
        let err = lahiri(date(2021, 3, 14), time(2, 30), zone, 40.7, -74.0).unwrap_err();
        assert!(matches!(err, ProfileError::NonexistentLocalTime(..)));
    }

    #[test]
    fn dst_overlap_policy() {
        // 2021-11-07 01:30 happens twice in New York
        let zone = BirthZone::Iana(chrono_tz::America::New_York);
        let early = lahiri(date(2021, 11, 7), time(1, 30), zone, 40.7, -74.0).unwrap();
        assert_eq!(early.birth_utc(), Utc.with_ymd_and_hms(2021, 11, 7, 5, 30, 0).unwrap());
        let late = BirthProfile::with_policy(
            date(2021, 11, 7),
            time(1, 30),
            zone,
            40.7,
            -74.0,
            AyanamshaSystem::Lahiri,
            AmbiguousTime::Latest,
        )
        .unwrap();
        assert_eq!(late.birth_utc(), Utc.with_ymd_and_hms(2021, 11, 7, 6, 30, 0).unwrap());
        let rejected = BirthProfile::with_policy(
            date(2021, 11, 7),
            time(1, 30),
            zone,
            40.7,
            -74.0,
            AyanamshaSystem::Lahiri,
            AmbiguousTime::Reject,
        );
        assert!(matches!(rejected, Err(ProfileError::AmbiguousLocalTime(..))));
    }

    #[test]
    fn json_goes_through_validation() {
        let ok: BirthProfile = serde_json::from_str(
            r#"{"date":"1990-01-15","time":"12:00:00","utc_offset_minutes":330,"latitude":28.61,"longitude":77.21}"#,
        )
        .unwrap();
        assert_eq!(ok.ayanamsha(), AyanamshaSystem::Lahiri);

        let iana: BirthProfile = serde_json::from_str(
            r#"{"date":"1990-01-15","time":"12:00:00","timezone":"Asia/Kolkata","latitude":28.61,"longitude":77.21}"#,
        )
        .unwrap();
        assert_eq!(iana.birth_utc(), ok.birth_utc());

        let bad = serde_json::from_str::<BirthProfile>(
            r#"{"date":"1990-01-15","time":"12:00:00","timezone":"Mars/Olympus","latitude":0,"longitude":0}"#,
        );
        assert!(bad.is_err());
        let none = serde_json::from_str::<BirthProfile>(
            r#"{"date":"1990-01-15","time":"12:00:00","latitude":0,"longitude":0}"#,
        );
        assert!(none.is_err());
    }

    #[test]
    fn json_roundtrip_keeps_zone() {
        let p = BirthProfile::new(
            date(1985, 7, 4),
            time(23, 10),
            BirthZone::Iana(chrono_tz::Europe::London),
            51.5,
            -0.12,
            AyanamshaSystem::KP,
        )
        .unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("Europe/London"));
        let back: BirthProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}

//! Normalization of raw planet feeds into [`PlanetPosition`]s.
//!
//! Feeds come from the provider or the user's account in loose shapes:
//! names in several scripts, signs as ids or longitudes, houses instead of
//! signs. Normalization never fails; unusable values are replaced by
//! defaults and logged.

use kundali_base::{Graha, Locale, PlanetPosition, Rashi, rashi_from_longitude, sign_of_house};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One planet row as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlanet {
    #[serde(alias = "planet", alias = "graha")]
    pub name: String,
    /// 1-based sign id.
    #[serde(default, alias = "sign_id", alias = "rasi", alias = "rashi")]
    pub sign: Option<i64>,
    /// Sidereal longitude in degrees.
    #[serde(default, alias = "full_degree", alias = "lon")]
    pub longitude: Option<f64>,
    /// Degrees within the sign.
    #[serde(default, alias = "norm_degree")]
    pub degree: Option<f64>,
    #[serde(default)]
    pub house: Option<i64>,
    #[serde(default, alias = "is_retro", alias = "isRetro")]
    pub retrograde: bool,
}

/// A normalized D1 chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedChart {
    pub ascendant: Rashi,
    pub planets: Vec<PlanetPosition>,
}

const ASCENDANT_NAMES: [&str; 5] = ["ascendant", "lagna", "asc", "lg", "लग्न"];

fn is_ascendant(name: &str) -> bool {
    let key = name.trim().to_lowercase();
    ASCENDANT_NAMES.contains(&key.as_str())
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

fn clamp_house(house: i64) -> u8 {
    house.clamp(1, 12) as u8
}

/// Sign and in-sign degree of a raw row, or None when the row carries
/// neither a longitude nor a sign id nor a house.
fn placement(raw: &RawPlanet, ascendant: Option<Rashi>) -> Option<(Rashi, f64)> {
    if let Some(lon) = finite(raw.longitude) {
        return Some(rashi_from_longitude(lon));
    }
    let degree = finite(raw.degree).unwrap_or(0.0);
    if let Some(id) = raw.sign {
        if !(1..=12).contains(&id) {
            warn!(planet = %raw.name, sign = id, "sign id out of range, clamped");
        }
        return Some((Rashi::from_sign_id(id), degree));
    }
    match (raw.house, ascendant) {
        (Some(house), Some(asc)) => {
            if !(1..=12).contains(&house) {
                warn!(planet = %raw.name, house, "house out of range, clamped");
            }
            Some((sign_of_house(asc, clamp_house(house)), degree))
        }
        _ => None,
    }
}

/// Normalize a feed.
///
/// The ascendant comes from an ascendant row, else from `ascendant_hint`,
/// else defaults to Mesha. When a graha appears twice the first row wins.
/// Unknown planet names map to Surya, but only when no recognised row
/// places Surya.
pub fn normalize(
    raw: &[RawPlanet],
    ascendant_hint: Option<Rashi>,
    locale: Locale,
) -> NormalizedChart {
    let asc_row = raw.iter().find(|r| is_ascendant(&r.name));
    let ascendant = asc_row
        .and_then(|r| placement(r, None))
        .map(|(sign, _)| sign)
        .or(ascendant_hint)
        .unwrap_or_else(|| {
            warn!("feed has no ascendant, defaulting to Mesha");
            Rashi::Mesha
        });

    let rows = raw.iter().filter(|r| !is_ascendant(&r.name));
    let (known, unknown): (Vec<_>, Vec<_>) = rows
        .map(|r| (Graha::from_alias(&r.name), r))
        .partition(|(graha, _)| graha.is_some());
    let defaulted = unknown.into_iter().map(|(_, row)| {
        warn!(name = %row.name, "unknown planet name, defaulting to Surya");
        (Graha::Surya, row)
    });

    let mut planets: Vec<PlanetPosition> = Vec::with_capacity(raw.len());
    let ordered = known
        .into_iter()
        .filter_map(|(graha, row)| graha.map(|g| (g, row)))
        .chain(defaulted);
    for (graha, row) in ordered {
        if planets.iter().any(|p| p.graha == graha) {
            warn!(graha = graha.name(), "duplicate planet row ignored");
            continue;
        }
        let (sign, degree) = placement(row, Some(ascendant)).unwrap_or_else(|| {
            warn!(graha = graha.name(), "planet row has no placement, using ascendant sign");
            (ascendant, 0.0)
        });
        planets.push(PlanetPosition::new(graha, sign, ascendant, degree, row.retrograde, locale));
    }
    planets.sort_by_key(|p| p.graha);
    NormalizedChart { ascendant, planets }
}

/// Normalize a JSON array of planet rows.
pub fn normalize_json(
    json: &str,
    ascendant_hint: Option<Rashi>,
    locale: Locale,
) -> Result<NormalizedChart, serde_json::Error> {
    let raw: Vec<RawPlanet> = serde_json::from_str(json)?;
    Ok(normalize(&raw, ascendant_hint, locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> RawPlanet {
        RawPlanet {
            name: name.to_string(),
            ..RawPlanet::default()
        }
    }

    #[test]
    fn longitude_wins_over_sign() {
        let raw = [RawPlanet {
            sign: Some(3),
            longitude: Some(95.5),
            ..row("Jupiter")
        }];
        let chart = normalize(&raw, Some(Rashi::Mesha), Locale::En);
        let guru = &chart.planets[0];
        assert_eq!(guru.graha, Graha::Guru);
        assert_eq!(guru.sign, Rashi::Karka);
        assert!((guru.degree - 5.5).abs() < 1e-9);
        assert_eq!(guru.house, 4);
    }

    #[test]
    fn ascendant_row_sets_houses() {
        let raw = [
            RawPlanet { sign: Some(2), ..row("Ascendant") },
            RawPlanet { sign: Some(2), ..row("Su") },
        ];
        let chart = normalize(&raw, None, Locale::En);
        assert_eq!(chart.ascendant, Rashi::Vrishabha);
        assert_eq!(chart.planets.len(), 1);
        assert_eq!(chart.planets[0].house, 1);
    }

    #[test]
    fn house_only_rows_derive_sign() {
        let raw = [RawPlanet { house: Some(10), ..row("Moon") }];
        let chart = normalize(&raw, Some(Rashi::Vrishabha), Locale::En);
        assert_eq!(chart.planets[0].sign, Rashi::Kumbha);
        assert_eq!(chart.planets[0].house, 10);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let raw = [
            RawPlanet { sign: Some(15), ..row("Mars") },
            RawPlanet { house: Some(0), ..row("Venus") },
        ];
        let chart = normalize(&raw, Some(Rashi::Mesha), Locale::En);
        let mangal = chart.planets.iter().find(|p| p.graha == Graha::Mangal).unwrap();
        let shukra = chart.planets.iter().find(|p| p.graha == Graha::Shukra).unwrap();
        assert_eq!(mangal.sign, Rashi::Meena);
        assert_eq!(shukra.house, 1);
    }

    #[test]
    fn recognised_row_beats_unknown_name() {
        let raw = [
            RawPlanet { sign: Some(5), ..row("Pluto") },
            RawPlanet { sign: Some(9), ..row("Sun") },
        ];
        let chart = normalize(&raw, Some(Rashi::Mesha), Locale::En);
        assert_eq!(chart.planets.len(), 1);
        assert_eq!(chart.planets[0].graha, Graha::Surya);
        assert_eq!(chart.planets[0].sign, Rashi::Dhanu);
    }

    #[test]
    fn unknown_name_fills_empty_surya_slot() {
        let raw = [
            RawPlanet { sign: Some(5), ..row("Pluto") },
            RawPlanet { sign: Some(1), ..row("Moon") },
            RawPlanet { sign: Some(3), ..row("Moon") },
        ];
        let chart = normalize(&raw, Some(Rashi::Mesha), Locale::En);
        assert_eq!(chart.planets.len(), 2);
        assert_eq!(chart.planets[0].graha, Graha::Surya);
        assert_eq!(chart.planets[0].sign, Rashi::Simha);
        assert_eq!(chart.planets[1].sign, Rashi::Mesha);
    }

    #[test]
    fn no_ascendant_defaults_to_mesha() {
        let chart = normalize(&[RawPlanet { sign: Some(4), ..row("Saturn") }], None, Locale::En);
        assert_eq!(chart.ascendant, Rashi::Mesha);
        assert_eq!(chart.planets[0].house, 4);
    }

    #[test]
    fn json_aliases() {
        let chart = normalize_json(
            r#"[
                {"planet": "Lagna", "sign_id": 7},
                {"name": "Shani", "full_degree": 200.0, "is_retro": true},
                {"name": "Rahu", "rasi": 1, "norm_degree": 12.0}
            ]"#,
            None,
            Locale::Hi,
        )
        .unwrap();
        assert_eq!(chart.ascendant, Rashi::Tula);
        let shani = chart.planets.iter().find(|p| p.graha == Graha::Shani).unwrap();
        assert!(shani.retrograde);
        assert_eq!(shani.house, 1);
        let rahu = chart.planets.iter().find(|p| p.graha == Graha::Rahu).unwrap();
        assert_eq!(rahu.house, 7);
        assert_eq!(rahu.sign_label, "मेष");
    }

    #[test]
    fn non_finite_longitude_ignored() {
        let raw = [RawPlanet {
            longitude: Some(f64::NAN),
            sign: Some(6),
            ..row("Mercury")
        }];
        let chart = normalize(&raw, Some(Rashi::Mesha), Locale::En);
        assert_eq!(chart.planets[0].sign, Rashi::Kanya);
    }
}

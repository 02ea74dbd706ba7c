//! Detection rules, one function per detector.
//!
//! Every rule takes a [`ChartView`] whose faults for the grahas it reads have
//! already been checked, and returns `None` when the combination is absent
//! or a graha it needs is missing from the chart.

use crate::bhava::{DUSTHANA_HOUSES, house_lord, is_dusthana, is_kendra, relative_house};
use crate::dignity::Dignity;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::locale::Locale;

use super::chart::ChartView;
use super::text;
use super::types::{Finding, Grade};
use super::Detector;

/// Houses that give Mars the Mangal dosha.
pub const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

fn finding(
    detector: Detector,
    locale: Locale,
    factors: Vec<Graha>,
    justification: String,
    grade: Grade,
) -> Finding {
    Finding {
        key: detector.key().to_string(),
        label: text::label(detector, locale).to_string(),
        factors,
        justification,
        grade,
        group: detector.group(),
        kind: detector.kind(),
    }
}

/// Jupiter in a kendra (1, 4, 7, 10) counted from the Moon.
pub fn gajakesari(chart: &ChartView<'_>, locale: Locale) -> Option<Finding> {
    let moon = chart.get(Graha::Chandra)?;
    let jupiter = chart.get(Graha::Guru)?;
    let rel = relative_house(moon.house, jupiter.house);
    if !is_kendra(rel) {
        return None;
    }
    let grade = match jupiter.dignity {
        Dignity::Exalted | Dignity::Own => Grade::High,
        Dignity::Debilitated | Dignity::Enemy => Grade::Low,
        _ => Grade::Medium,
    };
    Some(finding(
        Detector::Gajakesari,
        locale,
        vec![Graha::Chandra, Graha::Guru],
        text::gajakesari(locale, moon.house, jupiter.house, rel),
        grade,
    ))
}

/// One of the five Pancha-Mahapurusha yogas: `graha` in a kendra from the
/// ascendant and in its own or exaltation sign.
pub fn mahapurusha(
    detector: Detector,
    graha: Graha,
    chart: &ChartView<'_>,
    locale: Locale,
) -> Option<Finding> {
    let p = chart.get(graha)?;
    if !is_kendra(p.house) {
        return None;
    }
    let grade = match p.dignity {
        Dignity::Exalted => Grade::High,
        Dignity::Own => Grade::Medium,
        _ => return None,
    };
    Some(finding(
        detector,
        locale,
        vec![graha],
        text::mahapurusha(locale, graha, p.sign, p.house, p.dignity),
        grade,
    ))
}

/// Lords of the 6th, 8th and 12th placed in the 6th, 8th or 12th.
pub fn vipareeta_rajyoga(chart: &ChartView<'_>, locale: Locale) -> Option<Finding> {
    let mut factors = Vec::new();
    let mut lines = Vec::new();
    for owned in DUSTHANA_HOUSES {
        let lord = house_lord(chart.ascendant(), owned);
        let Some(placed) = chart.house_of(lord) else {
            continue;
        };
        if is_dusthana(placed) {
            lines.push(text::lord_placed(locale, lord, owned, placed));
            if !factors.contains(&lord) {
                factors.push(lord);
            }
        }
    }
    if lines.is_empty() {
        return None;
    }
    let grade = if lines.len() >= 2 { Grade::High } else { Grade::Medium };
    Some(finding(
        Detector::VipareetaRajyoga,
        locale,
        factors,
        lines.join("; "),
        grade,
    ))
}

/// Two grahas sharing a sign.
pub fn conjunction(
    detector: Detector,
    a: Graha,
    b: Graha,
    chart: &ChartView<'_>,
    locale: Locale,
) -> Option<Finding> {
    let sign = chart.conjunct(a, b)?;
    let house = chart.house_of(a)?;
    let grade = match detector {
        Detector::GuruChandal => match chart.get(Graha::Guru).map(|p| p.dignity) {
            Some(Dignity::Debilitated | Dignity::Enemy) => Grade::High,
            _ => Grade::Medium,
        },
        _ if is_kendra(house) => Grade::High,
        _ => Grade::Medium,
    };
    Some(finding(
        detector,
        locale,
        vec![a, b],
        text::same_sign(locale, a, b, sign),
        grade,
    ))
}

/// No graha other than the Sun and the nodes in the 2nd or 12th from the Moon.
///
/// Needs all seven visible grahas; a partial chart cannot show the absence.
pub fn kemadruma(chart: &ChartView<'_>, locale: Locale) -> Option<Finding> {
    if !chart.has_all(&SAPTA_GRAHAS) {
        return None;
    }
    let moon_house = chart.house_of(Graha::Chandra)?;
    let counts =
        |g: &Graha| !matches!(g, Graha::Chandra | Graha::Surya | Graha::Rahu | Graha::Ketu);
    let flanked = chart
        .positions()
        .filter(|p| counts(&p.graha))
        .any(|p| matches!(relative_house(moon_house, p.house), 2 | 12));
    if flanked {
        return None;
    }
    // A graha in a kendra from the Moon softens the affliction.
    let softened = chart
        .positions()
        .filter(|p| counts(&p.graha))
        .any(|p| is_kendra(relative_house(moon_house, p.house)));
    let grade = if softened { Grade::Low } else { Grade::Medium };
    Some(finding(
        Detector::Kemadruma,
        locale,
        vec![Graha::Chandra],
        text::kemadruma(locale, moon_house),
        grade,
    ))
}

/// Every other graha inside the inclusive arc between Rahu and Ketu.
///
/// The shorter of the two arcs is examined; when the nodes are exactly
/// opposite either side qualifies.
pub fn kaal_sarp(chart: &ChartView<'_>, locale: Locale) -> Option<Finding> {
    if !chart.has_all(&SAPTA_GRAHAS) {
        return None;
    }
    let rahu = chart.house_of(Graha::Rahu)?;
    let ketu = chart.house_of(Graha::Ketu)?;
    let forward = relative_house(rahu, ketu);
    let backward = relative_house(ketu, rahu);
    let within = |from: u8, len: u8| {
        SAPTA_GRAHAS.iter().all(|g| {
            chart
                .house_of(*g)
                .is_some_and(|h| relative_house(from, h) <= len)
        })
    };

    let (from, to) = match forward.cmp(&backward) {
        std::cmp::Ordering::Less if within(rahu, forward) => (Graha::Rahu, Graha::Ketu),
        std::cmp::Ordering::Greater if within(ketu, backward) => (Graha::Ketu, Graha::Rahu),
        std::cmp::Ordering::Equal if within(rahu, forward) => (Graha::Rahu, Graha::Ketu),
        std::cmp::Ordering::Equal if within(ketu, backward) => (Graha::Ketu, Graha::Rahu),
        _ => return None,
    };

    // Full strength when no graha sits on a node.
    let on_node = SAPTA_GRAHAS
        .iter()
        .filter_map(|g| chart.house_of(*g))
        .any(|h| h == rahu || h == ketu);
    let grade = if on_node { Grade::Medium } else { Grade::High };
    let (from_house, to_house) = if from == Graha::Rahu { (rahu, ketu) } else { (ketu, rahu) };

    let mut factors = vec![Graha::Rahu, Graha::Ketu];
    factors.extend(SAPTA_GRAHAS);
    Some(finding(
        Detector::KaalSarp,
        locale,
        factors,
        text::kaal_sarp(locale, from, from_house, to, to_house),
        grade,
    ))
}

/// Mars in the 1st, 2nd, 4th, 7th, 8th or 12th from the ascendant.
///
/// High in the 7th and 8th, Medium in the 1st and 4th, Low otherwise.
pub fn mangal_dosha(chart: &ChartView<'_>, locale: Locale) -> Option<Finding> {
    let house = chart.house_of(Graha::Mangal)?;
    if !MANGAL_DOSHA_HOUSES.contains(&house) {
        return None;
    }
    let grade = match house {
        7 | 8 => Grade::High,
        1 | 4 => Grade::Medium,
        _ => Grade::Low,
    };
    Some(finding(
        Detector::MangalDosha,
        locale,
        vec![Graha::Mangal],
        text::mangal(locale, house),
        grade,
    ))
}

//! Integration tests for yoga and dosha detection.

use kundali_base::yoga::rules::MANGAL_DOSHA_HOUSES;
use kundali_base::{
    Detector, FindingKind, Grade, Graha, Locale, PlanetPosition, Rashi, YogaError, detect_all,
    detect_doshas, detect_yogas,
};

fn place(asc: Rashi, placements: &[(Graha, Rashi)]) -> Vec<PlanetPosition> {
    placements
        .iter()
        .map(|&(g, s)| PlanetPosition::new(g, s, asc, 12.0, false, Locale::En))
        .collect()
}

fn keys(findings: &[kundali_base::Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.key.as_str()).collect()
}

/// Moon in Capricorn (H10) and Jupiter in Libra (H7) from an Aries ascendant.
#[test]
fn gajakesari_rel_ten() {
    let asc = Rashi::Mesha;
    let planets = place(asc, &[(Graha::Chandra, Rashi::Makara), (Graha::Guru, Rashi::Tula)]);
    assert_eq!(planets[0].house, 10);
    assert_eq!(planets[1].house, 7);

    let f = Detector::Gajakesari.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert_eq!(f.key, "gajakesari");
    assert_eq!(f.kind, FindingKind::Yoga);
    assert!(f.justification.contains("10"), "{}", f.justification);
    assert_eq!(f.factors, vec![Graha::Chandra, Graha::Guru]);
}

/// Same signs from a Taurus ascendant: houses 9 and 6, relation still 10.
#[test]
fn gajakesari_taurus_ascendant() {
    let asc = Rashi::Vrishabha;
    let planets = place(asc, &[(Graha::Chandra, Rashi::Makara), (Graha::Guru, Rashi::Tula)]);
    let f = Detector::Gajakesari.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert!(f.justification.contains("10th from the Moon"));
}

#[test]
fn gajakesari_absent_outside_kendra() {
    let asc = Rashi::Mesha;
    let planets = place(asc, &[(Graha::Chandra, Rashi::Mesha), (Graha::Guru, Rashi::Vrishabha)]);
    assert_eq!(Detector::Gajakesari.detect(asc, &planets, Locale::En), Ok(None));
}

/// Taurus ascendant: H12 is Aries, lord Mars; Mars in Sagittarius is H8.
#[test]
fn vipareeta_rajyoga_mars_in_eighth() {
    let asc = Rashi::Vrishabha;
    let planets = place(asc, &[(Graha::Mangal, Rashi::Dhanu)]);
    let f = Detector::VipareetaRajyoga.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert!(f.justification.contains("Mars (lord of H12th) placed in H8th"));
    assert_eq!(f.factors, vec![Graha::Mangal]);
    assert_eq!(f.grade, Grade::Medium);
}

#[test]
fn vipareeta_rajyoga_aggregates_lords() {
    // Taurus: H6 Libra (Venus), H8 Sagittarius (Jupiter), H12 Aries (Mars)
    let asc = Rashi::Vrishabha;
    let planets = place(
        asc,
        &[
            (Graha::Mangal, Rashi::Dhanu),
            (Graha::Guru, Rashi::Mesha),
            (Graha::Shukra, Rashi::Vrishabha),
        ],
    );
    let f = Detector::VipareetaRajyoga.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert_eq!(f.factors, vec![Graha::Guru, Graha::Mangal]);
    assert_eq!(f.grade, Grade::High);
    assert!(f.justification.contains("Jupiter (lord of H8th) placed in H12th"));
}

#[test]
fn mangal_dosha_by_house() {
    let asc = Rashi::Mesha;
    // Libra is H7
    let planets = place(asc, &[(Graha::Mangal, Rashi::Tula)]);
    let f = Detector::MangalDosha.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert_eq!(f.kind, FindingKind::Dosha);
    assert_eq!(f.grade, Grade::High);

    // Leo is H5
    let planets = place(asc, &[(Graha::Mangal, Rashi::Simha)]);
    assert_eq!(Detector::MangalDosha.detect(asc, &planets, Locale::En), Ok(None));
}

#[test]
fn mangal_dosha_house_table() {
    let asc = Rashi::Mesha;
    for sign in kundali_base::ALL_RASHIS {
        let planets = place(asc, &[(Graha::Mangal, sign)]);
        let found = Detector::MangalDosha.detect(asc, &planets, Locale::En).unwrap();
        assert_eq!(found.is_some(), MANGAL_DOSHA_HOUSES.contains(&planets[0].house));
    }
}

#[test]
fn mahapurusha_own_and_exalted() {
    let asc = Rashi::Makara;
    // Saturn in Capricorn (own) in H1, Jupiter in Cancer (exalted) in H7
    let planets = place(asc, &[(Graha::Shani, Rashi::Makara), (Graha::Guru, Rashi::Karka)]);
    let shasha = Detector::Shasha.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert!(shasha.justification.contains("own sign"));
    let hamsa = Detector::Hamsa.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert!(hamsa.justification.contains("exalted"));
    assert_eq!(hamsa.grade, Grade::High);

    // Saturn exalted in Libra but in H10 from Capricorn: still a kendra
    let planets = place(asc, &[(Graha::Shani, Rashi::Tula)]);
    assert!(Detector::Shasha.detect(asc, &planets, Locale::En).unwrap().is_some());
    // Saturn in Aquarius (own) is H2: no yoga
    let planets = place(asc, &[(Graha::Shani, Rashi::Kumbha)]);
    assert_eq!(Detector::Shasha.detect(asc, &planets, Locale::En), Ok(None));
}

#[test]
fn budha_aditya_names_sign() {
    let asc = Rashi::Simha;
    let planets = place(asc, &[(Graha::Surya, Rashi::Kanya), (Graha::Buddh, Rashi::Kanya)]);
    let f = Detector::BudhaAditya.detect(asc, &planets, Locale::En).unwrap().unwrap();
    assert!(f.justification.contains("Virgo"));
    let hi = Detector::BudhaAditya.detect(asc, &planets, Locale::Hi).unwrap().unwrap();
    assert_eq!(hi.label, "बुधादित्य योग");
    assert!(hi.justification.contains("कन्या"));
}

fn full_chart(asc: Rashi, rahu: Rashi, others: [Rashi; 7]) -> Vec<PlanetPosition> {
    let mut placements: Vec<(Graha, Rashi)> = kundali_base::SAPTA_GRAHAS
        .iter()
        .copied()
        .zip(others)
        .collect();
    placements.push((Graha::Rahu, rahu));
    placements.push((Graha::Ketu, rahu.nth_from(7)));
    place(asc, &placements)
}

#[test]
fn kaal_sarp_all_on_one_side() {
    use Rashi::*;
    // Rahu H1, Ketu H7; everything in H2..H6
    let others = [Vrishabha, Mithuna, Karka, Simha, Kanya, Mithuna, Karka];
    let planets = full_chart(Mesha, Mesha, others);
    let f = Detector::KaalSarp.detect(Mesha, &planets, Locale::En).unwrap().unwrap();
    assert_eq!(f.grade, Grade::High);
    assert!(f.justification.contains("Rahu in H1st"));

    // The other side also qualifies
    let planets = full_chart(Mesha, Mesha, [Vrischika, Dhanu, Makara, Kumbha, Meena, Tula, Dhanu]);
    let f = Detector::KaalSarp.detect(Mesha, &planets, Locale::En).unwrap().unwrap();
    assert!(f.justification.contains("Ketu in H7th"));

    // Split across both sides: no dosha
    let others = [Vrishabha, Mithuna, Karka, Simha, Kanya, Makara, Karka];
    let planets = full_chart(Mesha, Mesha, others);
    assert_eq!(Detector::KaalSarp.detect(Mesha, &planets, Locale::En), Ok(None));
}

#[test]
fn kaal_sarp_needs_full_chart() {
    let asc = Rashi::Mesha;
    let planets = place(
        asc,
        &[
            (Graha::Rahu, Rashi::Mesha),
            (Graha::Ketu, Rashi::Tula),
            (Graha::Surya, Rashi::Simha),
        ],
    );
    assert_eq!(Detector::KaalSarp.detect(asc, &planets, Locale::En), Ok(None));
}

#[test]
fn malformed_row_fails_only_its_readers() {
    let asc = Rashi::Mesha;
    let mut planets = place(
        asc,
        &[
            (Graha::Mangal, Rashi::Tula),
            (Graha::Chandra, Rashi::Makara),
            (Graha::Guru, Rashi::Tula),
            (Graha::Rahu, Rashi::Mithuna),
        ],
    );
    planets.push(planets[3].clone());

    assert_eq!(
        Detector::GuruChandal.detect(asc, &planets, Locale::En),
        Err(YogaError::DuplicateGraha(Graha::Rahu))
    );
    assert!(Detector::MangalDosha.detect(asc, &planets, Locale::En).unwrap().is_some());

    let all = detect_all(asc, &planets, Locale::En);
    assert!(keys(&all).contains(&"gajakesari"));
    assert!(keys(&all).contains(&"mangal_dosha"));
}

#[test]
fn duplicate_read_graha_fails_detector() {
    let asc = Rashi::Mesha;
    let mut planets = place(asc, &[(Graha::Mangal, Rashi::Tula), (Graha::Chandra, Rashi::Makara)]);
    planets.push(planets[0].clone());
    assert_eq!(
        Detector::MangalDosha.detect(asc, &planets, Locale::En),
        Err(YogaError::DuplicateGraha(Graha::Mangal))
    );
    assert!(!keys(&detect_all(asc, &planets, Locale::En)).contains(&"mangal_dosha"));
}

#[test]
fn detect_all_splits_yogas_and_doshas() {
    let asc = Rashi::Mesha;
    let planets = place(
        asc,
        &[
            (Graha::Chandra, Rashi::Makara),
            (Graha::Guru, Rashi::Tula),
            (Graha::Mangal, Rashi::Tula),
        ],
    );
    let all = detect_all(asc, &planets, Locale::En);
    assert!(keys(&all).contains(&"gajakesari"));
    assert!(keys(&all).contains(&"mangal_dosha"));

    let yogas = detect_yogas(asc, &planets, Locale::En);
    assert!(yogas.iter().all(|f| f.kind == FindingKind::Yoga));
    let doshas = detect_doshas(asc, &planets, Locale::En);
    assert_eq!(keys(&doshas), vec!["mangal_dosha"]);
    assert_eq!(yogas.len() + doshas.len(), all.len());
}

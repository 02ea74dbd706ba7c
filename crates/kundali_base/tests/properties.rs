//! Property tests for the pure mapping and period math.

use chrono::{DateTime, TimeZone, Utc};
use kundali_base::dasha::SECONDS_PER_YEAR;
use kundali_base::{
    ALL_RASHIS, DashaConfig, DashaLevel, DashaPeriod, DashaSystem, Rashi, YoginiStart,
    dasha_tree, nakshatra_position, whole_sign_house,
};
use proptest::prelude::*;

fn birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1975, 11, 2, 18, 45, 0).unwrap()
}

fn span_years(p: &DashaPeriod) -> f64 {
    (p.end - p.start).num_nanoseconds().unwrap_or(i64::MAX) as f64 / 1e9 / SECONDS_PER_YEAR
}

fn assert_partition(parent: &DashaPeriod) {
    if parent.children.is_empty() {
        return;
    }
    assert_eq!(parent.children[0].start, parent.start);
    assert_eq!(parent.children[parent.children.len() - 1].end, parent.end);
    for pair in parent.children.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let sum: f64 = parent.children.iter().map(|c| c.years).sum();
    assert!((sum - parent.years).abs() < 1.0 / SECONDS_PER_YEAR);
    for child in &parent.children {
        assert_partition(child);
    }
}

proptest! {
    #[test]
    fn nakshatra_index_and_fractions(lon in 0.0f64..360.0) {
        let p = nakshatra_position(lon);
        prop_assert!((1..=27).contains(&p.index));
        prop_assert!((1..=4).contains(&p.pada));
        prop_assert!((p.fraction_used + p.fraction_remaining - 1.0).abs() < 1e-12);
        prop_assert!(p.fraction_used >= 0.0 && p.fraction_used < 1.0);
    }

    #[test]
    fn house_is_bijection(asc_idx in 0u8..12) {
        let asc = Rashi::from_index(asc_idx);
        prop_assert_eq!(whole_sign_house(asc, asc), 1);
        let mut houses: Vec<u8> = ALL_RASHIS.iter().map(|s| whole_sign_house(asc, *s)).collect();
        houses.sort_unstable();
        prop_assert_eq!(houses, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn vimshottari_spans_120_years(lon in 0.0f64..360.0) {
        let tree = dasha_tree(
            DashaSystem::Vimshottari,
            birth(),
            &nakshatra_position(lon),
            &DashaConfig::with_depth(DashaLevel::Maha),
        ).unwrap();
        let total = (tree.end().unwrap() - birth()).num_milliseconds() as f64 / 1000.0;
        prop_assert!((total - 120.0 * SECONDS_PER_YEAR).abs() <= 1.0);
        for pair in tree.periods.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn yogini_spans_36_years(lon in 0.0f64..360.0, sequential in any::<bool>()) {
        let config = DashaConfig {
            depth: DashaLevel::Maha,
            yogini_start: if sequential { YoginiStart::Sequential } else { YoginiStart::Classical },
        };
        let pos = nakshatra_position(lon);
        let tree = dasha_tree(DashaSystem::Yogini, birth(), &pos, &config).unwrap();
        let total = (tree.end().unwrap() - birth()).num_milliseconds() as f64 / 1000.0;
        prop_assert!((total - 36.0 * SECONDS_PER_YEAR).abs() <= 1.0);
    }

    #[test]
    fn nested_levels_partition_parents(lon in 0.0f64..360.0, maha in 0usize..8) {
        let tree = dasha_tree(
            DashaSystem::Yogini,
            birth(),
            &nakshatra_position(lon),
            &DashaConfig::with_depth(DashaLevel::Sookshma),
        ).unwrap();
        let period = &tree.periods[maha.min(tree.periods.len() - 1)];
        assert_partition(period);
        for antar in &period.children {
            prop_assert!((span_years(antar) - antar.years).abs() < 1e-6);
        }
    }
}

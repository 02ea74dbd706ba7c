//! Integration tests for dasha tree construction and queries.

use chrono::{DateTime, Duration, TimeZone, Utc};
use kundali_base::dasha::{SECONDS_PER_YEAR, maha_sequence, VIMSHOTTARI};
use kundali_base::{
    DashaConfig, DashaLevel, DashaLord, DashaSystem, Graha, Yogini, YoginiStart, active_stack,
    dasha_tree, nakshatra_position, validate_tree,
};

/// Birth: 1990-01-15 06:30 UTC
fn birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1990, 1, 15, 6, 30, 0).unwrap()
}

fn years_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (b - a).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_YEAR
}

/// Moon at 0° Aries (start of Ashwini) → Ketu mahadasha, full 7y.
#[test]
fn vimshottari_moon_at_zero() {
    let tree = dasha_tree(
        DashaSystem::Vimshottari,
        birth(),
        &nakshatra_position(0.0),
        &DashaConfig::with_depth(DashaLevel::Maha),
    )
    .unwrap();

    assert_eq!(tree.periods.len(), 9);
    assert_eq!(tree.periods[0].lord, DashaLord::Graha(Graha::Ketu));
    assert_eq!(tree.periods[1].lord, DashaLord::Graha(Graha::Shukra));
    assert_eq!(tree.periods[8].lord, DashaLord::Graha(Graha::Buddh));

    let ketu = years_between(tree.periods[0].start, tree.periods[0].end);
    assert!((ketu - 7.0).abs() < 1e-6, "Ketu maha should be 7y, got {ketu}");
}

/// Moon halfway through Bharani → 10y of Venus, then the cycle wraps back
/// to Venus for the other half.
#[test]
fn vimshottari_partial_balance_wraps() {
    let tree = dasha_tree(
        DashaSystem::Vimshottari,
        birth(),
        &nakshatra_position(20.0),
        &DashaConfig::with_depth(DashaLevel::Maha),
    )
    .unwrap();

    let lords: Vec<_> = tree.periods.iter().map(|p| p.lord).collect();
    assert_eq!(lords.len(), 10);
    assert_eq!(lords[0], DashaLord::Graha(Graha::Shukra));
    assert_eq!(lords[9], DashaLord::Graha(Graha::Shukra));
    assert!((tree.periods[0].years - 10.0).abs() < 1e-9);
    assert!((tree.periods[9].years - 10.0).abs() < 1e-9);

    let span = years_between(birth(), tree.end().unwrap());
    assert!((span - 120.0).abs() < 1.0 / SECONDS_PER_YEAR);
}

#[test]
fn yogini_total_is_36_years() {
    let tree = dasha_tree(
        DashaSystem::Yogini,
        birth(),
        &nakshatra_position(301.7),
        &DashaConfig::with_depth(DashaLevel::Maha),
    )
    .unwrap();
    let span = years_between(birth(), tree.end().unwrap());
    assert!((span - 36.0).abs() < 1.0 / SECONDS_PER_YEAR);
}

#[test]
fn yogini_fixed_start_overrides_nakshatra() {
    let config = DashaConfig {
        depth: DashaLevel::Antar,
        yogini_start: YoginiStart::Fixed(Yogini::Siddha),
    };
    let tree = dasha_tree(DashaSystem::Yogini, birth(), &nakshatra_position(0.0), &config).unwrap();
    assert_eq!(tree.periods[0].lord, DashaLord::Yogini(Yogini::Siddha));
    assert_eq!(tree.periods[1].lord, DashaLord::Yogini(Yogini::Sankata));
    assert_eq!(tree.periods[2].lord, DashaLord::Yogini(Yogini::Mangala));
    // Antar periods start at the maha's own yogini
    assert_eq!(
        tree.periods[1].children[0].lord,
        DashaLord::Yogini(Yogini::Sankata)
    );
}

#[test]
fn full_depth_tree_is_valid_and_nested() {
    let tree = dasha_tree(
        DashaSystem::Vimshottari,
        birth(),
        &nakshatra_position(157.25),
        &DashaConfig::default(),
    )
    .unwrap();
    assert_eq!(tree.depth, DashaLevel::Pran);
    assert_eq!(validate_tree(&tree), Ok(()));

    let maha = &tree.periods[3];
    assert_eq!(maha.children.len(), 9);
    let antar = &maha.children[2];
    assert_eq!(antar.children.len(), 9);
    assert_eq!(antar.children[0].lord, antar.lord);
    let pran = &antar.children[0].children[0].children;
    assert_eq!(pran.len(), 9);
    assert!(pran.iter().all(|p| p.level == DashaLevel::Pran && p.children.is_empty()));
}

#[test]
fn periods_at_level_carry_lord_paths() {
    let tree = dasha_tree(
        DashaSystem::Vimshottari,
        birth(),
        &nakshatra_position(0.0),
        &DashaConfig::with_depth(DashaLevel::Pratyantar),
    )
    .unwrap();
    let antars = tree.periods_at(DashaLevel::Antar);
    assert_eq!(antars.len(), 81);
    let (path, first) = &antars[0];
    assert_eq!(path.len(), 2);
    assert_eq!(path[0], DashaLord::Graha(Graha::Ketu));
    assert_eq!(first.lord, DashaLord::Graha(Graha::Ketu));
    // Ketu/Venus antar
    assert_eq!(antars[1].0[1], DashaLord::Graha(Graha::Shukra));
    for pair in antars.windows(2) {
        assert_eq!(pair[0].1.end, pair[1].1.start);
    }
    assert_eq!(tree.periods_at(DashaLevel::Pratyantar).len(), 729);
    assert!(tree.periods_at(DashaLevel::Sookshma).is_empty());
}

#[test]
fn active_stack_matches_periods() {
    let tree = dasha_tree(
        DashaSystem::Vimshottari,
        birth(),
        &nakshatra_position(47.0),
        &DashaConfig::default(),
    )
    .unwrap();
    let query = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let stack = active_stack(&tree, query);
    assert_eq!(stack.len(), 5);
    for (depth, period) in stack.iter().enumerate() {
        assert_eq!(period.level.depth() as usize, depth);
        assert!(period.contains(query));
    }
    for pair in stack.windows(2) {
        assert!(pair[0].children.iter().any(|c| std::ptr::eq(c, pair[1])));
    }
}

#[test]
fn active_stack_after_cycle_is_empty() {
    let tree = dasha_tree(
        DashaSystem::Yogini,
        birth(),
        &nakshatra_position(12.0),
        &DashaConfig::with_depth(DashaLevel::Antar),
    )
    .unwrap();
    assert!(active_stack(&tree, birth() + Duration::days(366 * 40)).is_empty());
}

#[test]
fn maha_sequence_handles_float_balances() {
    let seq = maha_sequence(&VIMSHOTTARI, 6, 16.0 * 0.333_333_333_3);
    let total: f64 = seq.iter().map(|(_, y)| y).sum();
    assert!((total - 120.0).abs() < 1e-9);
    assert_eq!(seq.first().map(|s| s.0), Some(6));
    assert_eq!(seq.last().map(|s| s.0), Some(6));
}

#[test]
fn tree_roundtrips_through_json() {
    let tree = dasha_tree(
        DashaSystem::Yogini,
        birth(),
        &nakshatra_position(88.8),
        &DashaConfig::with_depth(DashaLevel::Antar),
    )
    .unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: kundali_base::DashaTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back.periods.len(), tree.periods.len());
    assert_eq!(back.periods[0].children.len(), 8);
    assert_eq!(back.periods[0].start, tree.periods[0].start);
    assert_eq!(validate_tree(&back), Ok(()));
}

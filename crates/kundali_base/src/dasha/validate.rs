//! Structural checks on a dasha tree.
//!
//! At every level the periods must start at the parent's start, end at the
//! parent's end, touch without gaps or overlaps, and add up to the parent's
//! length. Maha periods must add up to the full cycle. Drift up to
//! [`PARTITION_TOLERANCE_SECONDS`] is accepted.

use chrono::{DateTime, Utc};

use crate::error::DashaError;

use super::balance::MIN_PERIOD_YEARS;
use super::cycle::LordCycle;
use super::subperiod::instant_after;
use super::types::{
    DashaLevel, DashaPeriod, DashaSystem, DashaTree, PARTITION_TOLERANCE_SECONDS,
    SECONDS_PER_YEAR,
};

fn apart(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    (a - b).num_milliseconds().abs() > PARTITION_TOLERANCE_SECONDS * 1000
}

fn violation(system: DashaSystem, period: &DashaPeriod, detail: String) -> DashaError {
    DashaError::PartitionViolation {
        system,
        level: period.level,
        lord: period.lord.name().to_string(),
        detail,
    }
}

/// Check every invariant of `tree`.
pub fn validate_tree(tree: &DashaTree) -> Result<(), DashaError> {
    let cycle = LordCycle::for_system(tree.system);
    let actual_years = tree.total_years();
    if (actual_years - cycle.total_years).abs() > MIN_PERIOD_YEARS {
        return Err(DashaError::CycleTotal {
            system: tree.system,
            expected_years: cycle.total_years,
            actual_years,
        });
    }

    let (Some(first), Some(last)) = (tree.periods.first(), tree.periods.last()) else {
        return Err(DashaError::CycleTotal {
            system: tree.system,
            expected_years: cycle.total_years,
            actual_years: 0.0,
        });
    };
    if apart(first.start, tree.birth) {
        return Err(violation(
            tree.system,
            first,
            format!("first period starts at {}, birth is {}", first.start, tree.birth),
        ));
    }
    let expected_end = instant_after(tree.birth, cycle.total_years * SECONDS_PER_YEAR)?;
    if apart(last.end, expected_end) {
        return Err(violation(
            tree.system,
            last,
            format!("last period ends at {}, expected {expected_end}", last.end),
        ));
    }

    check_siblings(tree, &tree.periods, DashaLevel::Maha)?;
    for period in &tree.periods {
        check_period(tree, period)?;
    }
    Ok(())
}

fn check_siblings(
    tree: &DashaTree,
    siblings: &[DashaPeriod],
    level: DashaLevel,
) -> Result<(), DashaError> {
    for p in siblings {
        if p.level != level {
            return Err(violation(
                tree.system,
                p,
                format!("found at {level} position"),
            ));
        }
        if p.end <= p.start {
            return Err(violation(
                tree.system,
                p,
                format!("ends at {}, not after its start {}", p.end, p.start),
            ));
        }
    }
    for pair in siblings.windows(2) {
        if apart(pair[0].end, pair[1].start) {
            let kind = if pair[0].end < pair[1].start { "gap" } else { "overlap" };
            return Err(violation(
                tree.system,
                &pair[1],
                format!("{kind} after {} ending {}", pair[0].lord.name(), pair[0].end),
            ));
        }
    }
    Ok(())
}

fn check_period(tree: &DashaTree, parent: &DashaPeriod) -> Result<(), DashaError> {
    let child_level = match parent.level.child_level() {
        Some(l) if l <= tree.depth => l,
        _ => {
            if parent.children.is_empty() {
                return Ok(());
            }
            return Err(violation(
                tree.system,
                parent,
                "has sub-periods below the tree depth".to_string(),
            ));
        }
    };

    let (Some(first), Some(last)) = (parent.children.first(), parent.children.last()) else {
        return Err(violation(
            tree.system,
            parent,
            format!("missing {child_level} sub-periods"),
        ));
    };
    if apart(first.start, parent.start) || apart(last.end, parent.end) {
        return Err(violation(
            tree.system,
            parent,
            format!(
                "sub-periods span {}..{}, parent spans {}..{}",
                first.start, last.end, parent.start, parent.end
            ),
        ));
    }
    let years: f64 = parent.children.iter().map(|c| c.years).sum();
    if (years - parent.years).abs() > MIN_PERIOD_YEARS {
        return Err(violation(
            tree.system,
            parent,
            format!("sub-periods add up to {years} years, parent has {}", parent.years),
        ));
    }

    check_siblings(tree, &parent.children, child_level)?;
    for child in &parent.children {
        check_period(tree, child)?;
    }
    Ok(())
}

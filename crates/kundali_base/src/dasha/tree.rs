//! Full dasha tree construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DashaError;
use crate::nakshatra::NakshatraPosition;

use super::balance::{birth_balance, maha_sequence};
use super::cycle::{LordCycle, YoginiStart};
use super::subperiod::{Span, build_period};
use super::types::{DashaLevel, DashaSystem, DashaTree, SECONDS_PER_YEAR};
use super::validate::validate_tree;

/// Options for building a dasha tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaConfig {
    /// Deepest level to materialize.
    pub depth: DashaLevel,
    /// First-yogini rule for the Yogini system.
    pub yogini_start: YoginiStart,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            depth: DashaLevel::Pran,
            yogini_start: YoginiStart::Classical,
        }
    }
}

impl DashaConfig {
    /// Default config materializing down to `depth`.
    pub fn with_depth(depth: DashaLevel) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// Build the period tree for `system` from the Moon's nakshatra at birth.
///
/// The first maha period starts at `birth` and the maha periods together
/// cover exactly one full cycle. Each level below is a proportional
/// subdivision of its parent. The tree is validated before it is returned;
/// a violation is reported as an error rather than an approximate tree.
pub fn dasha_tree(
    system: DashaSystem,
    birth: DateTime<Utc>,
    nakshatra: &NakshatraPosition,
    config: &DashaConfig,
) -> Result<DashaTree, DashaError> {
    let cycle = LordCycle::for_system(system);
    let (first_idx, balance) = birth_balance(cycle, nakshatra, config.yogini_start);
    debug!(
        %system,
        nakshatra = nakshatra.nakshatra.name(),
        first_lord = cycle.lord(first_idx).name(),
        balance_years = balance,
        "building dasha tree"
    );

    let total_s = cycle.total_years * SECONDS_PER_YEAR;
    let mahas = maha_sequence(cycle, first_idx, balance);
    let count = mahas.len();
    let mut cursor = 0.0;
    let mut periods = Vec::with_capacity(count);

    for (i, (lord_idx, years)) in mahas.into_iter().enumerate() {
        let end_s = if i + 1 == count {
            total_s
        } else {
            cursor + years * SECONDS_PER_YEAR
        };
        let span = Span {
            lord_idx,
            years,
            start_s: cursor,
            end_s,
        };
        periods.push(build_period(cycle, birth, &span, DashaLevel::Maha, config.depth)?);
        cursor = end_s;
    }

    let tree = DashaTree {
        system,
        birth,
        nakshatra: *nakshatra,
        depth: config.depth,
        periods,
    };
    validate_tree(&tree)?;
    Ok(tree)
}

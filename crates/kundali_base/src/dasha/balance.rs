//! Birth balance and the maha-level walk.
//!
//! The first maha period runs for the unelapsed share of its lord's full
//! period. The cycle then continues in order, wrapping around to the first
//! lord again, until the maha periods add up to exactly one full cycle; the
//! last period is truncated to fit.

use crate::nakshatra::NakshatraPosition;

use super::cycle::{LordCycle, YoginiStart};
use super::types::SECONDS_PER_YEAR;

/// One second in years; the drift accepted between summed and nominal years.
pub const MIN_PERIOD_YEARS: f64 = 1.0 / SECONDS_PER_YEAR;

/// Maha balances and tails shorter than one day are folded into the
/// neighbouring period, so every period down to the pran level has a
/// positive width.
pub const MIN_MAHA_YEARS: f64 = 86_400.0 / SECONDS_PER_YEAR;

/// Remaining years of the first maha period at birth.
///
/// Returns `(first_lord_index, balance_years)`.
pub fn birth_balance(
    cycle: &LordCycle,
    position: &NakshatraPosition,
    yogini_start: YoginiStart,
) -> (usize, f64) {
    let idx = cycle.first_lord_index(position.index, yogini_start);
    let remaining = position.fraction_remaining.clamp(0.0, 1.0);
    (idx, cycle.years(idx) * remaining)
}

/// Maha periods as `(cycle_index, years)` pairs summing to the cycle total.
pub fn maha_sequence(cycle: &LordCycle, first_idx: usize, balance_years: f64) -> Vec<(usize, f64)> {
    let total = cycle.total_years;
    let mut out: Vec<(usize, f64)> = Vec::with_capacity(cycle.len() + 1);
    let mut elapsed = 0.0;

    if balance_years >= MIN_MAHA_YEARS {
        out.push((first_idx, balance_years));
        elapsed = balance_years;
    }

    let mut idx = first_idx + 1;
    while total - elapsed >= MIN_MAHA_YEARS {
        let full = cycle.years(idx);
        let left = total - elapsed;
        let years = if full >= left - MIN_MAHA_YEARS { left } else { full };
        out.push((idx % cycle.len(), years));
        elapsed += years;
        idx += 1;
    }

    // Fold any float residue into the last period.
    if let Some(last) = out.last_mut() {
        last.1 += total - elapsed;
    }
    out
}

//! Proportional sub-period generation.
//!
//! A child's length is `(child_full_years / cycle_total_years) * parent_years`,
//! and the children start with the parent's own lord and run through the
//! whole cycle once. Boundaries are tracked as seconds from birth so that
//! every child ends exactly where the next one begins; the last child is
//! snapped to the parent's end to absorb float drift.

use chrono::{DateTime, Duration, Utc};

use crate::error::DashaError;

use super::cycle::LordCycle;
use super::types::{DashaLevel, DashaPeriod, SECONDS_PER_YEAR};

/// Instant `secs` seconds after `birth`, rounded to the nanosecond.
pub fn instant_after(birth: DateTime<Utc>, secs: f64) -> Result<DateTime<Utc>, DashaError> {
    let out_of_range = || DashaError::DateOutOfRange {
        birth,
        seconds: secs,
    };
    let nanos = (secs * 1e9).round();
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    birth
        .checked_add_signed(Duration::nanoseconds(nanos as i64))
        .ok_or_else(out_of_range)
}

/// One period before it is materialized: cycle position, years, and span in
/// seconds from birth.
#[derive(Debug, Clone, Copy)]
pub struct Span {
    pub lord_idx: usize,
    pub years: f64,
    pub start_s: f64,
    pub end_s: f64,
}

/// Children spans of `parent`, starting from the parent's lord.
pub fn proportional_spans(cycle: &LordCycle, parent: &Span) -> Vec<Span> {
    let n = cycle.len();
    let mut spans = Vec::with_capacity(n);
    let mut cursor = parent.start_s;

    for offset in 0..n {
        let lord_idx = (parent.lord_idx + offset) % n;
        let years = cycle.years(lord_idx) / cycle.total_years * parent.years;
        let end_s = cursor + years * SECONDS_PER_YEAR;
        spans.push(Span {
            lord_idx,
            years,
            start_s: cursor,
            end_s,
        });
        cursor = end_s;
    }

    if let Some(last) = spans.last_mut() {
        last.end_s = parent.end_s;
    }
    spans
}

/// Materialize `span` at `level`, recursing down to `depth`.
pub fn build_period(
    cycle: &LordCycle,
    birth: DateTime<Utc>,
    span: &Span,
    level: DashaLevel,
    depth: DashaLevel,
) -> Result<DashaPeriod, DashaError> {
    let children = match level.child_level() {
        Some(child_level) if child_level <= depth => proportional_spans(cycle, span)
            .iter()
            .map(|child| build_period(cycle, birth, child, child_level, depth))
            .collect::<Result<Vec<_>, _>>()?,
        _ => Vec::new(),
    };

    Ok(DashaPeriod {
        lord: cycle.lord(span.lord_idx),
        level,
        start: instant_after(birth, span.start_s)?,
        end: instant_after(birth, span.end_s)?,
        years: span.years,
        children,
    })
}

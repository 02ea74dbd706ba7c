//! Provenance-tracked merging of fetched or computed patches.
//!
//! `merge_patch` is a pure function of the sheet and the patch. Entries are
//! deduplicated by natural key with the existing entry winning, and every
//! collection is put into canonical order afterwards, so merging patches
//! for different categories gives the same sheet in any order, and merging
//! the same patch twice changes nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sheet::{DivisionalChart, FactCategory, FactSheet, Provenance, Source};

/// A partial fact sheet plus the attribution for what it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstroPatch {
    pub source: Source,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    pub facts: FactSheet,
    /// Categories attributed even when the patch holds no data for them,
    /// e.g. a detection pass that found no doshas.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub covers: BTreeSet<FactCategory>,
}

impl AstroPatch {
    pub fn new(source: Source, detail: Option<String>, facts: FactSheet) -> Self {
        Self {
            source,
            detail,
            facts,
            covers: BTreeSet::new(),
        }
    }

    /// Attribute `category` regardless of data.
    pub fn covering(mut self, category: FactCategory) -> Self {
        self.covers.insert(category);
        self
    }

    fn provenance(&self) -> Provenance {
        Provenance::new(self.source, self.detail.clone())
    }
}

const ALL_CATEGORIES: [FactCategory; 6] = [
    FactCategory::D1,
    FactCategory::Divisionals,
    FactCategory::Yogas,
    FactCategory::Doshas,
    FactCategory::Shadbala,
    FactCategory::Dashas,
];

/// Append `incoming` entries whose key is not yet present.
fn merge_keyed<T: Clone, K: Ord>(
    existing: &[T],
    incoming: &[T],
    key: impl Fn(&T) -> K,
    what: &'static str,
) -> Vec<T> {
    let mut seen: BTreeSet<K> = existing.iter().map(&key).collect();
    let mut out = existing.to_vec();
    for item in incoming {
        if seen.insert(key(item)) {
            out.push(item.clone());
        } else {
            debug!(what, "merge skipped entry already present");
        }
    }
    out
}

/// Divisional charts that carry planets; empty ones neither cover nor block.
fn filled(charts: &[DivisionalChart]) -> Vec<DivisionalChart> {
    let (kept, empty): (Vec<_>, Vec<_>) = charts.iter().cloned().partition(|d| !d.is_empty());
    for d in &empty {
        debug!(varga = %d.varga, "merge dropped divisional chart without planets");
    }
    kept
}

/// Merge `patch` into a copy of `sheet`.
pub fn merge_patch(sheet: &FactSheet, patch: &AstroPatch) -> FactSheet {
    let facts = &patch.facts;
    let mut out = FactSheet {
        ascendant: sheet.ascendant.or(facts.ascendant),
        planets: merge_keyed(&sheet.planets, &facts.planets, |p| p.graha, "planet"),
        divisionals: merge_keyed(
            &filled(&sheet.divisionals),
            &filled(&facts.divisionals),
            |d| d.varga,
            "divisional",
        ),
        yogas: merge_keyed(&sheet.yogas, &facts.yogas, |f| f.key.clone(), "yoga"),
        doshas: merge_keyed(&sheet.doshas, &facts.doshas, |f| f.key.clone(), "dosha"),
        shadbala: merge_keyed(&sheet.shadbala, &facts.shadbala, |r| r.graha, "shadbala"),
        dashas: sheet.dashas.clone(),
        provenance: sheet.provenance.clone(),
    };

    // Dasha items are grouped: a (system, level) already present keeps all
    // of its own items.
    let present: BTreeSet<_> = sheet.dashas.iter().map(|d| (d.system, d.level)).collect();
    let (fresh, skipped): (Vec<_>, Vec<_>) = facts
        .dashas
        .iter()
        .partition(|d| !present.contains(&(d.system, d.level)));
    if !skipped.is_empty() {
        debug!(count = skipped.len(), "merge skipped dasha items for levels already present");
    }
    out.dashas.extend(fresh.into_iter().cloned());

    for (category, entries) in &facts.provenance {
        for p in entries {
            out.record(*category, p.clone());
        }
    }
    for category in ALL_CATEGORIES {
        if facts.has_data(category) || patch.covers.contains(&category) {
            out.record(category, patch.provenance());
        }
    }

    canonicalize(&mut out);
    out
}

/// Put every collection of `sheet` into canonical order.
pub fn canonicalize(sheet: &mut FactSheet) {
    sheet.planets.sort_by_key(|p| p.graha);
    sheet.divisionals.sort_by_key(|d| d.varga);
    sheet.yogas.sort_by(|a, b| a.key.cmp(&b.key));
    sheet.doshas.sort_by(|a, b| a.key.cmp(&b.key));
    sheet.shadbala.sort_by_key(|r| r.graha);
    sheet.dashas.sort_by(|a, b| {
        (a.system, a.level, a.start)
            .cmp(&(b.system, b.level, b.start))
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// Merge several patches in order.
pub fn merge_all<'a>(
    sheet: &FactSheet,
    patches: impl IntoIterator<Item = &'a AstroPatch>,
) -> FactSheet {
    patches
        .into_iter()
        .fold(sheet.clone(), |acc, patch| merge_patch(&acc, patch))
}

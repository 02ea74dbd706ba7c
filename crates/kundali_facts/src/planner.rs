//! Question → minimal fetch plans.
//!
//! The planner turns a question (or explicit DataNeeded keys) into needs,
//! removes everything the sheet already covers, and groups what is left
//! into [`FetchPlan`]s in a fixed order: Vimshottari, Yogini, divisional
//! charts, shadbala, yoga/dosha detail.

use std::collections::BTreeSet;

use kundali_base::{DashaLevel, DashaSystem};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CoreConfig;
use crate::coverage::{Need, coverage_of, missing_for};
use crate::keywords::{BUILTIN_RULES, KeywordRule, needs_in};
use crate::sheet::{FactCategory, FactSheet, Varga};

/// One unit of work for the fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchPlan {
    Vimshottari { levels: Vec<DashaLevel> },
    Yogini { levels: Vec<DashaLevel> },
    Divisionals { charts: Vec<Varga> },
    ShadbalaDetail,
    YogaDoshaDetail,
}

impl FetchPlan {
    /// Categories this plan fills.
    pub fn categories(&self) -> &'static [FactCategory] {
        match self {
            Self::Vimshottari { .. } | Self::Yogini { .. } => &[FactCategory::Dashas],
            Self::Divisionals { .. } => &[FactCategory::Divisionals],
            Self::ShadbalaDetail => &[FactCategory::Shadbala],
            Self::YogaDoshaDetail => &[FactCategory::Yogas, FactCategory::Doshas],
        }
    }
}

/// Planner over built-in plus configured keyword rules.
#[derive(Debug, Clone)]
pub struct FetchPlanner {
    extra: Vec<KeywordRule>,
}

impl Default for FetchPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchPlanner {
    /// Planner using only the built-in rules.
    pub fn new() -> Self {
        Self { extra: Vec::new() }
    }

    /// Planner with additional rules checked after the built-ins.
    pub fn with_rules(extra: Vec<KeywordRule>) -> Self {
        Self { extra }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self::with_rules(config.extra_keywords.clone())
    }

    /// Needs mentioned by `question`.
    pub fn needs_for_question(&self, question: &str) -> Vec<Need> {
        needs_in(question, BUILTIN_RULES.iter().chain(self.extra.iter()))
    }

    /// Plans for the data `question` needs that `sheet` lacks.
    pub fn plan_fetches(&self, question: &str, sheet: &FactSheet) -> Vec<FetchPlan> {
        let needs = self.needs_for_question(question);
        debug!(?needs, "question needs");
        plan_needs(&needs, sheet)
    }

    /// Plans for explicit DataNeeded keys; unknown keys are dropped.
    pub fn plans_for_keys<S: AsRef<str>>(&self, keys: &[S], sheet: &FactSheet) -> Vec<FetchPlan> {
        let needs: Vec<Need> = keys
            .iter()
            .filter_map(|k| match k.as_ref().parse::<Need>() {
                Ok(need) => Some(need),
                Err(e) => {
                    debug!(key = k.as_ref(), error = %e, "dropping fetch key");
                    None
                }
            })
            .collect();
        plan_needs(&needs, sheet)
    }
}

/// Group the missing needs into plans.
pub fn plan_needs(needs: &[Need], sheet: &FactSheet) -> Vec<FetchPlan> {
    let missing = missing_for(needs, &coverage_of(sheet));

    let mut vimshottari = BTreeSet::new();
    let mut yogini = BTreeSet::new();
    let mut charts = BTreeSet::new();
    let mut shadbala = false;
    let mut yoga_dosha = false;
    for need in missing {
        match need {
            Need::D1 | Need::Divisional(Varga::D1) => {
                debug!("D1 is account data, never fetched");
            }
            Need::Divisional(v) => {
                charts.insert(v);
            }
            Need::Dasha(DashaSystem::Vimshottari, l) => {
                vimshottari.insert(l);
            }
            Need::Dasha(DashaSystem::Yogini, l) => {
                yogini.insert(l);
            }
            Need::Shadbala => shadbala = true,
            Need::Yogas | Need::Doshas => yoga_dosha = true,
        }
    }

    let mut plans = Vec::new();
    if !vimshottari.is_empty() {
        plans.push(FetchPlan::Vimshottari {
            levels: vimshottari.into_iter().collect(),
        });
    }
    if !yogini.is_empty() {
        plans.push(FetchPlan::Yogini {
            levels: yogini.into_iter().collect(),
        });
    }
    if !charts.is_empty() {
        plans.push(FetchPlan::Divisionals {
            charts: charts.into_iter().collect(),
        });
    }
    if shadbala {
        plans.push(FetchPlan::ShadbalaDetail);
    }
    if yoga_dosha {
        plans.push(FetchPlan::YogaDoshaDetail);
    }
    plans
}

/// [`FetchPlanner::plan_fetches`] with the built-in rules.
pub fn plan_fetches(question: &str, sheet: &FactSheet) -> Vec<FetchPlan> {
    FetchPlanner::new().plan_fetches(question, sheet)
}

/// [`FetchPlanner::plans_for_keys`] with the built-in rules.
pub fn plans_for_keys<S: AsRef<str>>(keys: &[S], sheet: &FactSheet) -> Vec<FetchPlan> {
    FetchPlanner::new().plans_for_keys(keys, sheet)
}

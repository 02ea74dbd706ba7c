//! Fact sheets with incremental coverage.
//!
//! This crate sits between a question-answering layer and the jyotish
//! engines in `kundali_base`:
//! - [`BirthProfile`]: validated birth date, time, zone and place
//! - [`feed`]: normalization of raw planet rows
//! - [`FactSheet`] with per-category provenance, and its [`Coverage`]
//! - [`FetchPlanner`]: question or DataNeeded keys → minimal [`FetchPlan`]s
//! - [`merge_patch`]: provenance-tracked, idempotent merging
//! - [`LocalResolver`]: plans the engines can answer directly
//!
//! No I/O happens here apart from [`CoreConfig::load`].

pub mod config;
pub mod coverage;
pub mod error;
pub mod feed;
pub mod keywords;
pub mod local;
pub mod merge;
pub mod planner;
pub mod profile;
pub mod sheet;

pub use config::{CONFIG_ENV, CoreConfig};
pub use coverage::{Coverage, DashaCoverage, Need, coverage_of, missing_for};
pub use error::{ConfigError, FactError, ProfileError};
pub use feed::{NormalizedChart, RawPlanet, normalize, normalize_json};
pub use keywords::{BUILTIN_RULES, KeywordRule, needs_in};
pub use local::{LocalResolver, Resolution};
pub use merge::{AstroPatch, canonicalize, merge_all, merge_patch};
pub use planner::{FetchPlan, FetchPlanner, plan_fetches, plan_needs, plans_for_keys};
pub use profile::{AmbiguousTime, BirthProfile, BirthZone, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR};
pub use sheet::{
    ALL_VARGAS, DashaItem, DivisionalChart, FactCategory, FactSheet, Provenance, ShadbalaRow,
    Source, Varga, required_strength,
};

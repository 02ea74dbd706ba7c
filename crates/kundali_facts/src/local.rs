//! Plans the engines can satisfy without the external provider.

use kundali_base::{
    DashaConfig, DashaLevel, DashaSystem, dasha_tree, detect_all, nakshatra_position,
};
use tracing::debug;

use crate::config::CoreConfig;
use crate::error::FactError;
use crate::merge::AstroPatch;
use crate::planner::FetchPlan;
use crate::profile::BirthProfile;
use crate::sheet::{DashaItem, FactCategory, FactSheet, Source};

/// Outcome of resolving one plan locally.
///
/// A plan can be answered in part: dasha levels deeper than the configured
/// depth come back in `remaining` for the external provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    pub patch: Option<AstroPatch>,
    pub remaining: Option<FetchPlan>,
}

impl Resolution {
    fn deferred(plan: &FetchPlan) -> Self {
        Self {
            patch: None,
            remaining: Some(plan.clone()),
        }
    }
}

/// Resolves dasha plans from the birth profile and Moon longitude, and
/// yoga/dosha plans from the sheet's D1 chart.
#[derive(Debug, Clone)]
pub struct LocalResolver {
    profile: BirthProfile,
    moon_longitude: f64,
    config: CoreConfig,
}

impl LocalResolver {
    /// `moon_longitude` is the sidereal longitude of the Moon at birth.
    pub fn new(
        profile: BirthProfile,
        moon_longitude: f64,
        config: CoreConfig,
    ) -> Result<Self, FactError> {
        if !moon_longitude.is_finite() {
            return Err(FactError::InvalidInput("moon longitude must be finite"));
        }
        Ok(Self {
            profile,
            moon_longitude: moon_longitude.rem_euclid(360.0),
            config,
        })
    }

    pub fn profile(&self) -> &BirthProfile {
        &self.profile
    }

    /// Patch for the part of `plan` the engines can answer, plus whatever
    /// is left for the external provider.
    pub fn resolve(&self, plan: &FetchPlan, sheet: &FactSheet) -> Result<Resolution, FactError> {
        match plan {
            FetchPlan::Vimshottari { levels } => self.dashas(DashaSystem::Vimshottari, levels),
            FetchPlan::Yogini { levels } => self.dashas(DashaSystem::Yogini, levels),
            FetchPlan::YogaDoshaDetail => Ok(match self.yoga_dosha(sheet) {
                Some(patch) => Resolution {
                    patch: Some(patch),
                    remaining: None,
                },
                None => Resolution::deferred(plan),
            }),
            FetchPlan::Divisionals { .. } | FetchPlan::ShadbalaDetail => {
                Ok(Resolution::deferred(plan))
            }
        }
    }

    /// Resolve every plan it can; returns the patches and the plans left
    /// for the external provider.
    pub fn resolve_all(
        &self,
        plans: &[FetchPlan],
        sheet: &FactSheet,
    ) -> Result<(Vec<AstroPatch>, Vec<FetchPlan>), FactError> {
        let mut patches = Vec::new();
        let mut remaining = Vec::new();
        for plan in plans {
            let resolution = self.resolve(plan, sheet)?;
            patches.extend(resolution.patch);
            remaining.extend(resolution.remaining);
        }
        Ok((patches, remaining))
    }

    fn dashas(&self, system: DashaSystem, levels: &[DashaLevel]) -> Result<Resolution, FactError> {
        let cap = self.config.dasha_depth;
        let (wanted, deeper): (Vec<DashaLevel>, Vec<DashaLevel>) =
            levels.iter().copied().partition(|l| *l <= cap);
        let remaining = (!deeper.is_empty()).then(|| {
            debug!(%system, %cap, ?deeper, "levels past the local depth left for the provider");
            match system {
                DashaSystem::Vimshottari => FetchPlan::Vimshottari { levels: deeper },
                DashaSystem::Yogini => FetchPlan::Yogini { levels: deeper },
            }
        });
        let Some(depth) = wanted.iter().copied().max() else {
            return Ok(Resolution {
                patch: None,
                remaining,
            });
        };
        let nakshatra = nakshatra_position(self.moon_longitude);
        let config = DashaConfig {
            depth,
            yogini_start: self.config.yogini_start,
        };
        let tree = dasha_tree(system, self.profile.birth_utc(), &nakshatra, &config)?;
        let facts = FactSheet {
            dashas: DashaItem::from_tree(&tree, &wanted),
            ..FactSheet::default()
        };
        let patch = AstroPatch::new(Source::Computed, Some(system.key().to_string()), facts)
            .covering(FactCategory::Dashas);
        Ok(Resolution {
            patch: Some(patch),
            remaining,
        })
    }

    fn yoga_dosha(&self, sheet: &FactSheet) -> Option<AstroPatch> {
        let Some(ascendant) = sheet.ascendant else {
            debug!("no ascendant on sheet, yoga/dosha detail left for the provider");
            return None;
        };
        if sheet.planets.is_empty() {
            debug!("no D1 planets on sheet, yoga/dosha detail left for the provider");
            return None;
        }
        let (yogas, doshas) = detect_all(ascendant, &sheet.planets, self.config.locale)
            .into_iter()
            .partition(|f| f.is_yoga());
        let facts = FactSheet {
            yogas,
            doshas,
            ..FactSheet::default()
        };
        Some(
            AstroPatch::new(Source::Computed, Some("rules".to_string()), facts)
                .covering(FactCategory::Yogas)
                .covering(FactCategory::Doshas),
        )
    }
}

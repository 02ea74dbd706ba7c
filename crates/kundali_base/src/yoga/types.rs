//! Finding types shared by yoga and dosha detectors.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Strength of a yoga or severity of a dosha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Low,
    #[default]
    Medium,
    High,
}

/// Whether a finding is auspicious (yoga) or afflicting (dosha).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Yoga,
    Dosha,
}

/// Loose family a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingGroup {
    /// Moon-centred combinations.
    Lunar,
    /// Sun-centred combinations.
    Solar,
    /// Pancha-Mahapurusha.
    Mahapurusha,
    /// Raja yogas, including the vipareeta kind.
    Raja,
    /// Afflictions involving Rahu or Ketu.
    Nodal,
    /// Afflictions read for marriage compatibility.
    Marital,
    /// Anything supplied by an outside source without a known family.
    #[serde(other)]
    Other,
}

/// A detected yoga or dosha.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable identifier, e.g. `gajakesari`; the natural key when merging.
    pub key: String,
    /// Localized display name.
    pub label: String,
    /// Grahas that form the combination.
    pub factors: Vec<Graha>,
    /// Localized reason the rule fired.
    pub justification: String,
    pub grade: Grade,
    pub group: FindingGroup,
    pub kind: FindingKind,
}

impl Finding {
    pub fn is_yoga(&self) -> bool {
        self.kind == FindingKind::Yoga
    }

    pub fn is_dosha(&self) -> bool {
        self.kind == FindingKind::Dosha
    }
}

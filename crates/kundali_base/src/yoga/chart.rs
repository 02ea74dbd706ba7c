//! Lookup view over a list of planet positions, with per-graha faults.

use crate::bhava::{relative_house, whole_sign_house};
use crate::error::YogaError;
use crate::graha::Graha;
use crate::position::PlanetPosition;
use crate::rashi::Rashi;

/// Planet positions indexed by graha.
///
/// A graha listed twice, placed in a house outside 1..=12, or placed in a
/// house that disagrees with the whole-sign house of its sign is faulted.
/// A faulted graha is absent from every lookup; [`ChartView::check`] reports
/// the fault to the detectors that read it.
#[derive(Debug, Clone)]
pub struct ChartView<'a> {
    ascendant: Rashi,
    slots: [Option<&'a PlanetPosition>; 9],
    faults: [Option<YogaError>; 9],
}

fn fault_of(ascendant: Rashi, p: &PlanetPosition) -> Option<YogaError> {
    if !(1..=12).contains(&p.house) {
        return Some(YogaError::HouseOutOfRange {
            graha: p.graha,
            house: p.house,
        });
    }
    let expected = whole_sign_house(ascendant, p.sign);
    (expected != p.house).then_some(YogaError::HouseSignMismatch {
        graha: p.graha,
        house: p.house,
        expected,
    })
}

impl<'a> ChartView<'a> {
    pub fn new(ascendant: Rashi, planets: &'a [PlanetPosition]) -> Self {
        let mut slots: [Option<&'a PlanetPosition>; 9] = [None; 9];
        let mut faults: [Option<YogaError>; 9] = Default::default();
        let mut seen = [false; 9];
        for p in planets {
            let i = p.graha.index() as usize;
            if std::mem::replace(&mut seen[i], true) {
                slots[i] = None;
                faults[i].get_or_insert(YogaError::DuplicateGraha(p.graha));
                continue;
            }
            match fault_of(ascendant, p) {
                Some(fault) => faults[i] = Some(fault),
                None => slots[i] = Some(p),
            }
        }
        Self {
            ascendant,
            slots,
            faults,
        }
    }

    /// First fault among `grahas`, in the order given.
    pub fn check(&self, grahas: &[Graha]) -> Result<(), YogaError> {
        match grahas.iter().find_map(|g| self.fault(*g)) {
            Some(fault) => Err(fault.clone()),
            None => Ok(()),
        }
    }

    pub fn fault(&self, graha: Graha) -> Option<&YogaError> {
        self.faults[graha.index() as usize].as_ref()
    }

    pub fn ascendant(&self) -> Rashi {
        self.ascendant
    }

    pub fn get(&self, graha: Graha) -> Option<&'a PlanetPosition> {
        self.slots[graha.index() as usize]
    }

    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.get(graha).map(|p| p.house)
    }

    /// True when every graha in `grahas` is present.
    pub fn has_all(&self, grahas: &[Graha]) -> bool {
        grahas.iter().all(|g| self.get(*g).is_some())
    }

    /// Present, unfaulted positions in graha order.
    pub fn positions(&self) -> impl Iterator<Item = &'a PlanetPosition> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    /// Grahas occupying `house`.
    pub fn occupants(&self, house: u8) -> impl Iterator<Item = Graha> + '_ {
        self.positions().filter(move |p| p.house == house).map(|p| p.graha)
    }

    /// House of `to` counted from the house of `from`, when both are present.
    pub fn relation(&self, from: Graha, to: Graha) -> Option<u8> {
        Some(relative_house(self.house_of(from)?, self.house_of(to)?))
    }

    /// Whether both grahas are present and share a sign.
    pub fn conjunct(&self, a: Graha, b: Graha) -> Option<Rashi> {
        let (pa, pb) = (self.get(a)?, self.get(b)?);
        (pa.sign == pb.sign).then_some(pa.sign)
    }
}

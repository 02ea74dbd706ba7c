//! Sign-based dignity classification.
//!
//! Feeds often carry only a sign per graha, so dignity here is decided from
//! the sign alone: exaltation and debilitation signs, own signs, then the
//! natural (naisargika) relationship with the sign's lord. Rahu and Ketu are
//! always Neutral.

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Dignity of a graha in a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Own,
    Exalted,
    Debilitated,
    Neutral,
    Friend,
    Enemy,
}

/// Exaltation sign for sapta grahas. Returns None for Rahu/Ketu.
///
/// Sun Aries, Moon Taurus, Mars Capricorn, Mercury Virgo, Jupiter Cancer,
/// Venus Pisces, Saturn Libra.
pub const fn exaltation_sign(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation sign: the sign opposite exaltation.
pub const fn debilitation_sign(graha: Graha) -> Option<Rashi> {
    match exaltation_sign(graha) {
        Some(r) => Some(r.nth_from(7)),
        None => None,
    }
}

/// Own signs for sapta grahas. Returns an empty slice for Rahu/Ketu.
pub fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaturalRelation {
    Friend,
    Enemy,
    Neutral,
}

/// Natural friendship of `graha` towards `other` (BPHS table).
/// Neutral for any pairing involving Rahu/Ketu and for a graha with itself.
pub const fn natural_relation(graha: Graha, other: Graha) -> NaturalRelation {
    use Graha::*;
    use NaturalRelation::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        (Chandra, Surya | Buddh) => Friend,

        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

/// Dignity of `graha` placed in `sign`.
///
/// Priority: exalted > debilitated > own sign > natural relation with the
/// sign lord.
pub fn dignity_in_sign(graha: Graha, sign: Rashi) -> Dignity {
    if graha.is_node() {
        return Dignity::Neutral;
    }
    if exaltation_sign(graha) == Some(sign) {
        return Dignity::Exalted;
    }
    if debilitation_sign(graha) == Some(sign) {
        return Dignity::Debilitated;
    }
    if own_signs(graha).contains(&sign) {
        return Dignity::Own;
    }
    match natural_relation(graha, rashi_lord(sign)) {
        NaturalRelation::Friend => Dignity::Friend,
        NaturalRelation::Enemy => Dignity::Enemy,
        NaturalRelation::Neutral => Dignity::Neutral,
    }
}

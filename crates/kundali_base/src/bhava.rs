//! Whole-sign house (bhava) mapping.
//!
//! Under whole-sign houses the house number is purely the sign offset from
//! the ascendant sign: the ascendant's sign is house 1, the next sign is
//! house 2, and so on. The same mapping serves D1 and every divisional chart.

use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Angular houses.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Difficult houses.
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

/// House (1-12) of `planet_sign` counted from `ascendant_sign`.
///
/// `((planet - ascendant + 12) mod 12) + 1`. Total over all 144 pairs.
pub const fn whole_sign_house(ascendant_sign: Rashi, planet_sign: Rashi) -> u8 {
    ((planet_sign.index() + 12 - ascendant_sign.index()) % 12) + 1
}

/// Inverse of [`whole_sign_house`]: the sign occupying `house`.
///
/// House numbers outside 1..=12 wrap.
pub const fn sign_of_house(ascendant_sign: Rashi, house: u8) -> Rashi {
    ascendant_sign.nth_from(((house + 11) % 12) + 1)
}

/// Lord of the sign on `house`.
pub const fn house_lord(ascendant_sign: Rashi, house: u8) -> Graha {
    rashi_lord(sign_of_house(ascendant_sign, house))
}

/// House of `to` counted from house `from` (both 1-12), same formula as
/// [`whole_sign_house`] applied to house numbers.
pub const fn relative_house(from: u8, to: u8) -> u8 {
    ((to + 12 - from % 12) % 12) + 1
}

/// True for houses 1, 4, 7, 10.
pub fn is_kendra(house: u8) -> bool {
    KENDRA_HOUSES.contains(&house)
}

/// True for houses 6, 8, 12.
pub fn is_dusthana(house: u8) -> bool {
    DUSTHANA_HOUSES.contains(&house)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn ascendant_is_first_house() {
        for asc in ALL_RASHIS {
            assert_eq!(whole_sign_house(asc, asc), 1);
        }
    }

    #[test]
    fn taurus_ascendant_examples() {
        assert_eq!(whole_sign_house(Rashi::Vrishabha, Rashi::Makara), 9);
        assert_eq!(whole_sign_house(Rashi::Vrishabha, Rashi::Tula), 6);
        assert_eq!(whole_sign_house(Rashi::Vrishabha, Rashi::Mesha), 12);
    }

    #[test]
    fn sign_of_house_inverts() {
        for asc in ALL_RASHIS {
            for sign in ALL_RASHIS {
                let h = whole_sign_house(asc, sign);
                assert_eq!(sign_of_house(asc, h), sign);
            }
        }
    }

    #[test]
    fn twelfth_lord_from_taurus_is_mars() {
        assert_eq!(sign_of_house(Rashi::Vrishabha, 12), Rashi::Mesha);
        assert_eq!(house_lord(Rashi::Vrishabha, 12), Graha::Mangal);
    }

    #[test]
    fn relative_house_from_moon() {
        assert_eq!(relative_house(10, 7), 10);
        assert_eq!(relative_house(3, 3), 1);
        assert_eq!(relative_house(12, 1), 2);
        assert_eq!(relative_house(1, 12), 12);
    }

    #[test]
    fn house_classes() {
        assert!(is_kendra(7));
        assert!(!is_kendra(5));
        assert!(is_dusthana(8));
        assert!(!is_dusthana(9));
    }
}

//! Localized finding labels and justifications.

use crate::dignity::Dignity;
use crate::graha::Graha;
use crate::locale::Locale;
use crate::rashi::Rashi;
use crate::util::{house_label, ordinal};

use super::Detector;

/// Display name of a detector's finding.
pub fn label(detector: Detector, locale: Locale) -> &'static str {
    use Detector::*;
    match (detector, locale) {
        (Gajakesari, Locale::En) => "Gajakesari Yoga",
        (Gajakesari, Locale::Hi) => "गजकेसरी योग",
        (Ruchaka, Locale::En) => "Ruchaka Yoga",
        (Ruchaka, Locale::Hi) => "रुचक योग",
        (Bhadra, Locale::En) => "Bhadra Yoga",
        (Bhadra, Locale::Hi) => "भद्र योग",
        (Hamsa, Locale::En) => "Hamsa Yoga",
        (Hamsa, Locale::Hi) => "हंस योग",
        (Malavya, Locale::En) => "Malavya Yoga",
        (Malavya, Locale::Hi) => "मालव्य योग",
        (Shasha, Locale::En) => "Shasha Yoga",
        (Shasha, Locale::Hi) => "शश योग",
        (VipareetaRajyoga, Locale::En) => "Vipareeta Rajyoga",
        (VipareetaRajyoga, Locale::Hi) => "विपरीत राजयोग",
        (BudhaAditya, Locale::En) => "Budha-Aditya Yoga",
        (BudhaAditya, Locale::Hi) => "बुधादित्य योग",
        (ChandraMangala, Locale::En) => "Chandra-Mangala Yoga",
        (ChandraMangala, Locale::Hi) => "चन्द्र-मंगल योग",
        (Kemadruma, Locale::En) => "Kemadruma Dosha",
        (Kemadruma, Locale::Hi) => "केमद्रुम दोष",
        (GuruChandal, Locale::En) => "Guru-Chandal Dosha",
        (GuruChandal, Locale::Hi) => "गुरु चांडाल दोष",
        (KaalSarp, Locale::En) => "Kaal Sarp Dosha",
        (KaalSarp, Locale::Hi) => "काल सर्प दोष",
        (MangalDosha, Locale::En) => "Mangal Dosha",
        (MangalDosha, Locale::Hi) => "मंगल दोष",
    }
}

pub fn gajakesari(locale: Locale, moon_house: u8, jupiter_house: u8, rel: u8) -> String {
    let (moon, jup) = (house_label(moon_house), house_label(jupiter_house));
    match locale {
        Locale::En => format!(
            "Jupiter in {jup} is {} from the Moon in {moon}",
            ordinal(rel)
        ),
        Locale::Hi => format!("गुरु ({jup}) चंद्र ({moon}) से {rel}वें भाव में है"),
    }
}

pub fn mahapurusha(
    locale: Locale,
    graha: Graha,
    sign: Rashi,
    house: u8,
    dignity: Dignity,
) -> String {
    let name = graha.label(locale);
    let sign = sign.label(locale);
    let house = house_label(house);
    match (locale, dignity) {
        (Locale::En, Dignity::Exalted) => format!("{name} exalted in {sign}, kendra {house}"),
        (Locale::En, _) => format!("{name} in own sign {sign}, kendra {house}"),
        (Locale::Hi, Dignity::Exalted) => format!("{name} {sign} में उच्च, केंद्र {house}"),
        (Locale::Hi, _) => format!("{name} स्वराशि {sign} में, केंद्र {house}"),
    }
}

pub fn lord_placed(locale: Locale, lord: Graha, owned_house: u8, placed_house: u8) -> String {
    let (owned, placed) = (house_label(owned_house), house_label(placed_house));
    match locale {
        Locale::En => format!(
            "{} (lord of {owned}) placed in {placed}",
            lord.english_name()
        ),
        Locale::Hi => format!("{} ({owned} का स्वामी) {placed} में स्थित", lord.hindi_name()),
    }
}

pub fn same_sign(locale: Locale, a: Graha, b: Graha, sign: Rashi) -> String {
    let (a, b, s) = (a.label(locale), b.label(locale), sign.label(locale));
    match locale {
        Locale::En => format!("{a} and {b} together in {s}"),
        Locale::Hi => format!("{a} और {b} एक साथ {s} में"),
    }
}

pub fn kemadruma(locale: Locale, moon_house: u8) -> String {
    let moon = house_label(moon_house);
    match locale {
        Locale::En => format!("no graha in the 2nd or 12th from the Moon in {moon}"),
        Locale::Hi => format!("चंद्र ({moon}) से दूसरे या बारहवें भाव में कोई ग्रह नहीं"),
    }
}

pub fn kaal_sarp(locale: Locale, from: Graha, from_house: u8, to: Graha, to_house: u8) -> String {
    let (fh, th) = (house_label(from_house), house_label(to_house));
    match locale {
        Locale::En => format!(
            "all grahas between {} in {fh} and {} in {th}",
            from.english_name(),
            to.english_name()
        ),
        Locale::Hi => format!(
            "सभी ग्रह {} ({fh}) और {} ({th}) के बीच",
            from.hindi_name(),
            to.hindi_name()
        ),
    }
}

pub fn mangal(locale: Locale, house: u8) -> String {
    let house = house_label(house);
    match locale {
        Locale::En => format!("Mars in {house} from the ascendant"),
        Locale::Hi => format!("मंगल लग्न से {house} में"),
    }
}

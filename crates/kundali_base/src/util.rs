//! Shared utility functions for jyotish calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// English ordinal for a small positive number: 1st, 2nd, 3rd, 4th, 11th, 12th.
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// House label as used in finding justifications, e.g. `H8th`.
pub fn house_label(house: u8) -> String {
    format!("H{}", ordinal(house))
}

/// Clamp an arbitrary integer into the 1-based 1..=12 range.
pub fn clamp_twelve(value: i64) -> u8 {
    value.clamp(1, 12) as u8
}

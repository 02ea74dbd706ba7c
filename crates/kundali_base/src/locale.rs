//! Output locales for labels and justifications.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Supported output languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

/// Both locales, in table order.
pub const ALL_LOCALES: [Locale; 2] = [Locale::En, Locale::Hi];

impl Locale {
    /// BCP-47 style language tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-in" | "en-us" | "english" => Ok(Self::En),
            "hi" | "hi-in" | "hindi" => Ok(Self::Hi),
            _ => Err(VedicError::InvalidInput("unknown locale")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("Hindi".parse::<Locale>().unwrap(), Locale::Hi);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Hi).unwrap(), "\"hi\"");
    }
}

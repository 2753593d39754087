//! 24-bit RGB colors.

use std::fmt;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// An opaque 24-bit color. Deserializes from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(FolioError::Config(format!("invalid color: {s}")));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| FolioError::Config(format!("invalid color: {s}")))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = FolioError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_with_hash() {
        assert_eq!(Rgb::from_hex("#14F195").unwrap(), Rgb::new(0x14, 0xf1, 0x95));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(Rgb::from_hex("22c55e").unwrap(), Rgb::new(0x22, 0xc5, 0x5e));
    }

    #[test]
    fn rejects_short_input() {
        assert!(Rgb::from_hex("#fff").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        let err = Rgb::from_hex("#zzzzzz").unwrap_err();
        assert!(format!("{err}").contains("invalid color"));
    }

    #[test]
    fn rejects_multibyte_input() {
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn display_is_lower_hex() {
        assert_eq!(Rgb::new(0x99, 0x45, 0xFF).to_string(), "#9945ff");
    }

    proptest! {
        #[test]
        fn hex_form_parses_back(r: u8, g: u8, b: u8) {
            let c = Rgb::new(r, g, b);
            prop_assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
        }
    }
}

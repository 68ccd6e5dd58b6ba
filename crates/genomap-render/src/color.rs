use std::fmt;
use std::str::FromStr;

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color '{0}' is not of the form #rrggbb")]
    InvalidHex(String),
}

/// An sRGB color, written as `#rrggbb` in plans and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError::InvalidHex(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Forward genes default to the blue used for genes elsewhere in the app.
pub const DEFAULT_FORWARD: Rgb = Rgb::new(0x60, 0xa5, 0xfa);
pub const DEFAULT_REVERSE: Rgb = Rgb::new(0xef, 0x6b, 0x6b);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorScheme {
    /// A fresh random color per feature. A seed makes the sequence repeatable.
    Random { seed: Option<u64> },
    /// One fixed color per strand.
    ByStrand { forward: Rgb, reverse: Rgb },
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Random { seed: None }
    }
}

impl ColorScheme {
    pub fn strand_defaults() -> Self {
        ColorScheme::ByStrand {
            forward: DEFAULT_FORWARD,
            reverse: DEFAULT_REVERSE,
        }
    }
}

/// Hands out colors according to a [`ColorScheme`].
pub struct ColorPicker {
    scheme: ColorScheme,
    rng: StdRng,
}

impl ColorPicker {
    pub fn new(scheme: ColorScheme) -> Self {
        let rng = match &scheme {
            ColorScheme::Random { seed: Some(seed) } => StdRng::seed_from_u64(*seed),
            ColorScheme::Random { seed: None } => StdRng::from_os_rng(),
            // unused for fixed colors
            ColorScheme::ByStrand { .. } => StdRng::seed_from_u64(0),
        };
        Self { scheme, rng }
    }

    pub fn next_color(&mut self, reverse: bool) -> Rgb {
        match &self.scheme {
            ColorScheme::Random { .. } => {
                Rgb::new(self.rng.random(), self.rng.random(), self.rng.random())
            }
            ColorScheme::ByStrand { forward, reverse: rev } => {
                if reverse {
                    *rev
                } else {
                    *forward
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_display_and_parse() {
        let c = Rgb::new(0x2d, 0xd4, 0xa8);
        assert_eq!(c.to_string(), "#2dd4a8");
        assert_eq!("#2DD4A8".parse::<Rgb>().unwrap(), c);
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        for bad in ["2dd4a8", "#2dd4a", "#2dd4a8ff", "#zzzzzz", "#é1234"] {
            assert_eq!(
                bad.parse::<Rgb>(),
                Err(ColorParseError::InvalidHex(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#ff0010\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(255, 0, 16));
        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }

    #[test]
    fn test_seeded_random_is_repeatable() {
        let draw = || {
            let mut picker = ColorPicker::new(ColorScheme::Random { seed: Some(42) });
            (0..5).map(|_| picker.next_color(false)).collect::<Vec<_>>()
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn test_by_strand_colors() {
        let mut picker = ColorPicker::new(ColorScheme::strand_defaults());
        assert_eq!(picker.next_color(false), DEFAULT_FORWARD);
        assert_eq!(picker.next_color(true), DEFAULT_REVERSE);
    }
}

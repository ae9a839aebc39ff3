use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

pub const DEFAULT_WATERMARK_COLOR: &str = "#FFFFFF";

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB`; the leading `#` is optional.
    ///
    /// Shorthand digits are doubled, so `#0AF` becomes `(0x00, 0xAA, 0xFF)`.
    pub fn from_hex(input: &str) -> DomainResult<Self> {
        let hex = input.trim_start_matches('#');

        let nibbles = hex
            .chars()
            .map(|c| c.to_digit(16).and_then(|digit| u8::try_from(digit).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| {
                DomainError::InvalidColorFormat(format!("'{input}' contains non-hex characters"))
            })?;

        match nibbles.as_slice() {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r_hi, r_lo, g_hi, g_lo, b_hi, b_lo] => Ok(Self::new(
                (r_hi << 4) | r_lo,
                (g_hi << 4) | g_lo,
                (b_hi << 4) | b_lo,
            )),
            _ => Err(DomainError::InvalidColorFormat(format!(
                "'{input}' must be #RGB or #RRGGBB, got {} hex digits",
                nibbles.len()
            ))),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Unparsed color as received from the client.
///
/// Parsing is deferred to compositing time so that a malformed color only
/// fails requests that actually draw text.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexColor(pub String);

impl HexColor {
    #[must_use]
    pub fn new(hex: String) -> Self {
        Self(hex)
    }

    pub fn to_rgb(&self) -> DomainResult<RgbColor> {
        RgbColor::from_hex(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self(DEFAULT_WATERMARK_COLOR.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#FF0000", RgbColor::new(255, 0, 0))]
    #[case("#00ff00", RgbColor::new(0, 255, 0))]
    #[case("0000FF", RgbColor::new(0, 0, 255))]
    #[case("#1a2B3c", RgbColor::new(0x1A, 0x2B, 0x3C))]
    #[case("#FFFFFF", RgbColor::WHITE)]
    #[case("#000000", RgbColor::BLACK)]
    fn parses_six_digit_hex(#[case] input: &str, #[case] expected: RgbColor) {
        assert_eq!(RgbColor::from_hex(input).unwrap(), expected);
    }

    #[rstest]
    #[case("#0AF", RgbColor::new(0x00, 0xAA, 0xFF))]
    #[case("#fff", RgbColor::WHITE)]
    #[case("ABC", RgbColor::new(0xAA, 0xBB, 0xCC))]
    fn doubles_shorthand_digits(#[case] input: &str, #[case] expected: RgbColor) {
        assert_eq!(RgbColor::from_hex(input).unwrap(), expected);
    }

    #[rstest]
    #[case("#FF00")]
    #[case("#FF000000")]
    #[case("#GGGGGG")]
    #[case("#12 456")]
    #[case("")]
    #[case("#")]
    #[case("red")]
    fn rejects_malformed_hex(#[case] input: &str) {
        let err = RgbColor::from_hex(input).unwrap_err();
        assert!(matches!(err, DomainError::InvalidColorFormat(_)));
    }

    #[test]
    fn every_six_digit_channel_value_round_trips() {
        for value in 0..=u8::MAX {
            let color = RgbColor::new(value, value.wrapping_add(85), value.wrapping_add(170));
            assert_eq!(RgbColor::from_hex(&color.to_hex()).unwrap(), color);
        }
    }

    #[test]
    fn hex_color_defaults_to_white() {
        assert_eq!(HexColor::default().to_rgb().unwrap(), RgbColor::WHITE);
    }
}

//! Colors and the light/dark palettes encoders paint with.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// Not a hex color and not one of the known names
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

/// An RGBA color.
///
/// Parses from `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` or one of the names
/// `black`, `white`, `red` and `transparent`. Displays as lowercase
/// `#rrggbb` (or `#rrggbbaa` when translucent), and `none` when fully
/// transparent, so it can be dropped straight into an SVG paint attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in `[r, g, b, a]` order, as raster encoders expect them.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            0 => f.write_str("none"),
            255 => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            a => write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }

        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::RED),
            "transparent" | "none" => Ok(Self::TRANSPARENT),
            _ => Err(ColorError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_hex(hex: &str) -> Result<Color, ColorError> {
    let mut digits = [0u8; 8];
    let mut len = 0;

    for c in hex.chars() {
        let value = c.to_digit(16).ok_or(ColorError::InvalidHex(c))? as u8;
        if len < digits.len() {
            digits[len] = value;
        }
        len += 1;
    }

    let pair = |i: usize| digits[i] * 16 + digits[i + 1];

    match len {
        3 => Ok(Color::rgb(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
        4 => Ok(Color::rgba(
            digits[0] * 17,
            digits[1] * 17,
            digits[2] * 17,
            digits[3] * 17,
        )),
        6 => Ok(Color::rgb(pair(0), pair(2), pair(4))),
        8 => Ok(Color::rgba(pair(0), pair(2), pair(4), pair(6))),
        _ => Err(ColorError::InvalidLength(len)),
    }
}

/// The colors an encoder may paint with.
///
/// `foreground` carries the encoded information, `background` fills shapes
/// that must contrast with it (the semaphore ring interior), and
/// `highlight` marks the hidden cells of the dot grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    pub highlight: Color,
}

impl Palette {
    /// Black on white.
    pub const fn light() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            highlight: Color::RED,
        }
    }

    /// White on black.
    pub const fn dark() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
            highlight: Color::RED,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// The two color schemes every encoding is rendered in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Folder name used for this theme's output.
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The built-in palette for this theme.
    pub const fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#F00".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("#ffffff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(
            "#11223344".parse::<Color>().unwrap(),
            Color::rgba(0x11, 0x22, 0x33, 0x44)
        );
        assert_eq!(
            "#0008".parse::<Color>().unwrap(),
            Color::rgba(0, 0, 0, 0x88)
        );
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!(
            "transparent".parse::<Color>().unwrap(),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Color>(), Err(ColorError::Empty));
        assert_eq!("#12345".parse::<Color>(), Err(ColorError::InvalidLength(5)));
        assert_eq!("#12g".parse::<Color>(), Err(ColorError::InvalidHex('g')));
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(ColorError::UnknownName(_))
        ));
    }

    #[test]
    fn displays_as_svg_paint() {
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert_eq!(Color::rgba(255, 0, 0, 128).to_string(), "#ff000080");
        assert_eq!(Color::TRANSPARENT.to_string(), "none");
    }

    #[test]
    fn themes_swap_foreground() {
        assert_eq!(Theme::Light.palette().foreground, Color::BLACK);
        assert_eq!(Theme::Dark.palette().foreground, Color::WHITE);
        assert_eq!(Theme::Dark.name(), "dark");
    }
}

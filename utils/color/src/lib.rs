//! # Color Module
//!
//! This module provides [`Color`], an immutable RGB color with an opacity,
//! parsed from hexadecimal text and rendered as `#RRGGBB`, `rgb(...)` or
//! `rgba(...)`.
//!
//! Hex input may be written with or without a leading `#`, in the short
//! (`#60A`) or long (`#6600AA`) form, in any case. Opacity is accepted as an
//! integer, a float, decimal text or a [`Decimal`], must lie in `[0, 1]`,
//! and is kept to two decimal places using round-half-to-even on the exact
//! decimal value.
//!
//! ```
//! use spectrum_color::Color;
//!
//! let color = Color::with_opacity("#60A", 0.8).unwrap();
//! assert_eq!(color.hex(), "#6600AA");
//! assert_eq!(color.to_string(), "rgba(102,0,170,0.8)");
//! assert_eq!(color, "#6600aa");
//! ```

mod decimal;
pub use decimal::{Decimal, DecimalParseError, Precision};
mod equality;
pub use equality::Equality;
mod error;
pub use error::{ColorError, ErrorKind, HexColorError, OpacityError};
mod opacity;
pub use opacity::{Opacity, OpacityValue};
mod parse;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "serde")]
mod repr;

use core::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use parse::parse_hex_color_runtime;

/// An RGB color with an opacity.
///
/// Equality ignores opacity and compares the canonical `#RRGGBB` form only;
/// see [`Equality`] for a comparison that takes opacity into account.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "repr::ColorRepr", into = "repr::ColorRepr")
)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    opacity: Opacity,
}

impl Color {
    /// Parses a hex color with full opacity.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Hex`] unless `hex` is 3 or 6 hexadecimal
    /// digits, optionally prefixed with `#`.
    pub fn new(hex: &str) -> Result<Self, ColorError> {
        let (red, green, blue) = parse_hex_color_runtime(hex)?;
        Ok(Self::from_rgb(red, green, blue))
    }

    /// Parses a hex color and an opacity.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Hex`] for malformed hex and
    /// [`ColorError::Opacity`] if the opacity does not parse, is not finite,
    /// or lies outside `[0, 1]`.
    pub fn with_opacity(hex: &str, opacity: impl Into<OpacityValue>) -> Result<Self, ColorError> {
        let color = Self::new(hex)?;
        let opacity = Opacity::try_from(opacity.into())?;
        Ok(color.replace_opacity(opacity))
    }

    /// Creates an opaque color from 8-bit components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: Opacity::OPAQUE,
        }
    }

    /// Returns a copy of this color with the provided opacity.
    #[must_use]
    pub const fn replace_opacity(mut self, opacity: Opacity) -> Self {
        self.opacity = opacity;
        self
    }

    /// Red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// The opacity, 1 unless one was given.
    #[must_use]
    pub const fn opacity(&self) -> Opacity {
        self.opacity
    }

    /// Packs the components as `0xRRGGBB`.
    #[must_use]
    pub const fn to_u32(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// `#RRGGBB` with uppercase digits.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:06X}", self.to_u32())
    }

    /// `rgb(R,G,B)`, ignoring opacity.
    #[must_use]
    pub fn rgb(&self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }

    /// `rgba(R,G,B,A)`, even when fully opaque.
    #[must_use]
    pub fn rgba(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.opacity
        )
    }
}

impl Display for Color {
    /// The hex form when fully opaque, the `rgba(...)` form otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opacity.is_opaque() {
            f.write_str(&self.hex())
        } else {
            f.write_str(&self.rgba())
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        Equality::Rgb.colors(self, other)
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_u32().hash(state);
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        Equality::Rgb.color_str(self, other)
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        Equality::Rgb.color_str(self, other)
    }
}

impl PartialEq<String> for Color {
    fn eq(&self, other: &String) -> bool {
        Equality::Rgb.color_str(self, other)
    }
}

impl PartialEq<Color> for str {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

impl PartialEq<Color> for &str {
    fn eq(&self, other: &Color) -> bool {
        other == *self
    }
}

impl PartialEq<Color> for String {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

#[cfg(test)]
mod tests;

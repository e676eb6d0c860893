use crate::Color;

/// How two colors, or a color and a string, are compared.
///
/// [`Color`]'s `PartialEq` impls use [`Equality::Rgb`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Equality {
    /// Compare the canonical `#RRGGBB` form and ignore opacity. Strings are
    /// parsed as hex colors first; a string that does not parse is unequal.
    #[default]
    Rgb,
    /// Compare the rendered form (`#RRGGBB` when opaque, `rgba(...)`
    /// otherwise) case-insensitively. Opacity matters, and a string must be
    /// written exactly as the color renders, `#` included.
    Rendered,
}

impl Equality {
    /// Compares two colors.
    #[must_use]
    pub fn colors(self, a: &Color, b: &Color) -> bool {
        match self {
            Self::Rgb => a.to_u32() == b.to_u32(),
            Self::Rendered => a.to_string().eq_ignore_ascii_case(&b.to_string()),
        }
    }

    /// Compares a color with a string.
    #[must_use]
    pub fn color_str(self, color: &Color, other: &str) -> bool {
        match self {
            Self::Rgb => Color::new(other).is_ok_and(|other| self.colors(color, &other)),
            Self::Rendered => color.to_string().eq_ignore_ascii_case(other),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Color, ColorError, OpacityValue};

/// Wire form of a [`Color`]: `{"hex": "#RRGGBB", "opacity": "0.5"}`.
///
/// `opacity` is written as text to keep it exact and may be read back as a
/// number or text. A missing `opacity` means 1; an explicit `null` is a
/// type error, as in [`Color::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRepr {
    hex: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    opacity: Option<Option<OpacityRepr>>,
}

// Runs only when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<OpacityRepr>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum OpacityRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<OpacityRepr> for OpacityValue {
    fn from(value: OpacityRepr) -> Self {
        match value {
            OpacityRepr::Int(value) => Self::Int(value),
            OpacityRepr::Float(value) => Self::Float(value),
            OpacityRepr::Text(value) => Self::Text(value),
        }
    }
}

impl From<Color> for ColorRepr {
    fn from(color: Color) -> Self {
        Self {
            hex: color.hex(),
            opacity: Some(Some(OpacityRepr::Text(color.opacity().to_string()))),
        }
    }
}

impl TryFrom<ColorRepr> for Color {
    type Error = ColorError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr.opacity {
            Some(Some(opacity)) => Self::with_opacity(&repr.hex, opacity),
            Some(None) => Err(ColorError::Type {
                expected: "a number or numeric string",
                found: "null",
            }),
            None => Self::new(&repr.hex),
        }
    }
}

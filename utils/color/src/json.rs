//! Construction from untyped JSON values.
//!
//! Form data and API payloads arrive without static types, so this is where
//! wrong argument types surface as [`ErrorKind::Type`](crate::ErrorKind)
//! errors instead of compile errors.

use serde_json::Value;

use crate::{Color, ColorError, Decimal, Equality, OpacityValue};

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<&Value> for OpacityValue {
    type Error = ColorError;

    /// Accepts numbers and strings.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => Ok(number.as_i64().map_or_else(
                || {
                    number.as_f64().map_or_else(
                        || Self::Decimal(number.to_string().parse().unwrap_or(Decimal::NAN)),
                        Self::Float,
                    )
                },
                Self::Int,
            )),
            Value::String(text) => Ok(Self::Text(text.clone())),
            other => Err(ColorError::Type {
                expected: "a number or numeric string",
                found: type_name(other),
            }),
        }
    }
}

impl Color {
    /// Builds a color from untyped values.
    ///
    /// `hex` must be a JSON string and `opacity`, when given, a number or a
    /// numeric string. An explicit `null` opacity is a type error; pass
    /// `None` to get the default.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Type`] for unsupported value types, otherwise
    /// the same errors as [`Color::with_opacity`].
    pub fn from_json(hex: &Value, opacity: Option<&Value>) -> Result<Self, ColorError> {
        let Value::String(hex) = hex else {
            return Err(ColorError::Type {
                expected: "a string",
                found: type_name(hex),
            });
        };
        match opacity {
            Some(opacity) => Self::with_opacity(hex, OpacityValue::try_from(opacity)?),
            None => Self::new(hex),
        }
    }
}

impl PartialEq<Value> for Color {
    /// Strings compare as hex colors; every other JSON type is unequal.
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::String(text) => Equality::Rgb.color_str(self, text),
            _ => false,
        }
    }
}

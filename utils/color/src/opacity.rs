use core::fmt::{self, Display};

use crate::{Decimal, OpacityError};

/// Opacity of a [`Color`](crate::Color), from 0 (transparent) to 1 (opaque),
/// kept to two decimal places.
///
/// Stored as whole hundredths, so `0.25` is `25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(100);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0);

    /// Creates an opacity from hundredths; `None` above 100.
    #[must_use]
    pub const fn from_hundredths(hundredths: u8) -> Option<Self> {
        if hundredths <= 100 {
            Some(Self(hundredths))
        } else {
            None
        }
    }

    /// The opacity in hundredths.
    #[must_use]
    pub const fn hundredths(self) -> u8 {
        self.0
    }

    /// Returns `true` when the opacity is exactly 1.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.0 == 100
    }

    /// The opacity as an exact decimal.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        self.to_string().parse().unwrap_or(Decimal::ZERO)
    }

    /// Validates `value` and rounds it to two decimal places, ties to even.
    ///
    /// # Errors
    ///
    /// Returns [`OpacityError::NonFinite`] for infinity and NaN and
    /// [`OpacityError::OutOfRange`] outside `[0, 1]`. The range check uses
    /// the unrounded value, so `1.004` is rejected.
    pub fn from_decimal(value: &Decimal) -> Result<Self, OpacityError> {
        if !value.is_finite() {
            return Err(OpacityError::NonFinite);
        }
        if *value < Decimal::ZERO || *value > Decimal::from(1) {
            return Err(OpacityError::OutOfRange);
        }
        value
            .round(2)
            .to_scaled_u64(2)
            .and_then(|hundredths| u8::try_from(hundredths).ok())
            .and_then(Self::from_hundredths)
            .ok_or(OpacityError::OutOfRange)
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl Display for Opacity {
    /// Shortest decimal form: `1`, `0`, `0.5`, `0.05`, `0.13`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            100 => f.write_str("1"),
            0 => f.write_str("0"),
            h if h % 10 == 0 => write!(f, "0.{}", h / 10),
            h => write!(f, "0.{h:02}"),
        }
    }
}

/// An opacity argument in one of the accepted representations.
///
/// Every variant goes through [`Decimal`] before validation, so floats are
/// rounded on their exact binary value and text on its written digits.
#[derive(Debug, Clone, PartialEq)]
pub enum OpacityValue {
    /// A whole number.
    Int(i64),
    /// A binary floating-point number.
    Float(f64),
    /// Decimal text such as `"0.25"`.
    Text(String),
    /// An exact decimal.
    Decimal(Decimal),
}

impl OpacityValue {
    /// Converts the value to an exact decimal without range checks.
    ///
    /// # Errors
    ///
    /// Returns [`OpacityError::Malformed`] if text does not parse.
    pub fn to_decimal(&self) -> Result<Decimal, OpacityError> {
        match self {
            Self::Int(value) => Ok(Decimal::from(*value)),
            Self::Float(value) => Ok(Decimal::from(*value)),
            Self::Text(text) => text.parse().map_err(|_| OpacityError::Malformed),
            Self::Decimal(value) => Ok(value.clone()),
        }
    }
}

impl TryFrom<OpacityValue> for Opacity {
    type Error = OpacityError;

    fn try_from(value: OpacityValue) -> Result<Self, Self::Error> {
        Self::from_decimal(&value.to_decimal()?)
    }
}

impl From<Opacity> for OpacityValue {
    fn from(value: Opacity) -> Self {
        Self::Decimal(value.to_decimal())
    }
}

macro_rules! opacity_value_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for OpacityValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

opacity_value_from!(Int: i8, i16, i32, i64, u8, u16, u32);
opacity_value_from!(Float: f32, f64);
opacity_value_from!(Text: String, &str);
opacity_value_from!(Decimal: Decimal);

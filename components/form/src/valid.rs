//! Validation utilities for form fields.

use core::{
    error::Error,
    fmt::{Debug, Display},
    ops::RangeInclusive,
};

use spectrum_color::Decimal;

use crate::Code;

/// A validation failure that can be turned into a user-facing message.
///
/// `limit` and `count` fill the `{limit}` and `{count}` placeholders of
/// the field's message template.
pub trait Rejection: Error {
    /// The reason code.
    fn code(&self) -> Code;

    /// The bound that was violated.
    fn limit(&self) -> Option<String> {
        None
    }

    /// The measured size of the rejected value.
    fn count(&self) -> Option<usize> {
        None
    }
}

/// Trait for validating values of type `T`.
///
/// Implementors of this trait provide a method to validate values
/// and return either success or a reason for validation failure.
pub trait Validator<T: ?Sized> {
    /// The error type returned when validation fails.
    type Err: Rejection;
    /// Validates the given value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to validate.
    ///
    /// # Errors
    ///
    /// Returns the reason the value was rejected.
    fn validate(&self, value: &T) -> Result<(), Self::Err>;
}

/// A length outside the allowed character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// Fewer characters than `limit`.
    TooShort {
        /// The minimum.
        limit: usize,
        /// Characters found.
        count: usize,
    },
    /// More characters than `limit`.
    TooLong {
        /// The maximum.
        limit: usize,
        /// Characters found.
        count: usize,
    },
}

impl Display for LengthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShort { limit, count } => {
                write!(f, "Text is too short: {count} < {limit}.")
            }
            Self::TooLong { limit, count } => write!(f, "Text is too long: {count} > {limit}."),
        }
    }
}

impl Error for LengthError {}

impl Rejection for LengthError {
    fn code(&self) -> Code {
        match self {
            Self::TooShort { .. } => Code::MinLength,
            Self::TooLong { .. } => Code::MaxLength,
        }
    }

    fn limit(&self) -> Option<String> {
        match self {
            Self::TooShort { limit, .. } | Self::TooLong { limit, .. } => Some(limit.to_string()),
        }
    }

    fn count(&self) -> Option<usize> {
        match self {
            Self::TooShort { count, .. } | Self::TooLong { count, .. } => Some(*count),
        }
    }
}

// Lengths count characters, not bytes.
impl Validator<str> for RangeInclusive<usize> {
    type Err = LengthError;
    fn validate(&self, value: &str) -> Result<(), Self::Err> {
        let count = value.chars().count();
        if count < *self.start() {
            Err(LengthError::TooShort {
                limit: *self.start(),
                count,
            })
        } else if count > *self.end() {
            Err(LengthError::TooLong {
                limit: *self.end(),
                count,
            })
        } else {
            Ok(())
        }
    }
}

/// An error indicating that a value is out of a specified range.
#[derive(Debug, Clone)]
pub enum OutOfRange<T> {
    /// Below the lower bound.
    Below(T),
    /// Above the upper bound.
    Above(T),
}

impl<T: Display> Display for OutOfRange<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Below(limit) => write!(f, "Value is below {limit}."),
            Self::Above(limit) => write!(f, "Value is above {limit}."),
        }
    }
}

impl<T: Display + Debug> Error for OutOfRange<T> {}

impl<T: Display + Debug> Rejection for OutOfRange<T> {
    fn code(&self) -> Code {
        match self {
            Self::Below(_) => Code::MinValue,
            Self::Above(_) => Code::MaxValue,
        }
    }

    fn limit(&self) -> Option<String> {
        match self {
            Self::Below(limit) | Self::Above(limit) => Some(limit.to_string()),
        }
    }
}

impl Validator<Decimal> for RangeInclusive<Decimal> {
    type Err = OutOfRange<Decimal>;
    fn validate(&self, value: &Decimal) -> Result<(), Self::Err> {
        if value < self.start() {
            Err(OutOfRange::Below(self.start().clone()))
        } else if value > self.end() {
            Err(OutOfRange::Above(self.end().clone()))
        } else {
            Ok(())
        }
    }
}

/// Digit limits of a fixed-point number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitLimits {
    /// Maximum digits in total.
    pub max_digits: u64,
    /// Maximum digits after the decimal point.
    pub decimal_places: u64,
}

/// A number with more digits than [`DigitLimits`] allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitsError {
    /// Too many digits in total.
    MaxDigits(u64),
    /// Too many decimal places.
    MaxDecimalPlaces(u64),
    /// Too many digits before the decimal point.
    MaxWholeDigits(u64),
    /// Infinity or NaN.
    NotFinite,
}

impl Display for DigitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MaxDigits(limit) => write!(f, "More than {limit} digits."),
            Self::MaxDecimalPlaces(limit) => write!(f, "More than {limit} decimal places."),
            Self::MaxWholeDigits(limit) => {
                write!(f, "More than {limit} digits before the decimal point.")
            }
            Self::NotFinite => f.write_str("Value is not a finite number."),
        }
    }
}

impl Error for DigitsError {}

impl Rejection for DigitsError {
    fn code(&self) -> Code {
        match self {
            Self::MaxDigits(_) => Code::MaxDigits,
            Self::MaxDecimalPlaces(_) => Code::MaxDecimalPlaces,
            Self::MaxWholeDigits(_) => Code::MaxWholeDigits,
            Self::NotFinite => Code::Invalid,
        }
    }

    fn limit(&self) -> Option<String> {
        match self {
            Self::MaxDigits(limit) | Self::MaxDecimalPlaces(limit) | Self::MaxWholeDigits(limit) => {
                Some(limit.to_string())
            }
            Self::NotFinite => None,
        }
    }
}

impl Validator<Decimal> for DigitLimits {
    type Err = DigitsError;
    fn validate(&self, value: &Decimal) -> Result<(), Self::Err> {
        let precision = value.precision().ok_or(DigitsError::NotFinite)?;
        let max_whole_digits = self.max_digits.saturating_sub(self.decimal_places);
        if precision.digits > self.max_digits {
            Err(DigitsError::MaxDigits(self.max_digits))
        } else if precision.decimal_places > self.decimal_places {
            Err(DigitsError::MaxDecimalPlaces(self.decimal_places))
        } else if precision.whole_digits() > max_whole_digits {
            Err(DigitsError::MaxWholeDigits(max_whole_digits))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn length_counts_characters() {
        let range = 4_usize..=7;
        assert_eq!(
            range.validate("#ab"),
            Err(LengthError::TooShort { limit: 4, count: 3 })
        );
        assert_eq!(
            range.validate("#aabbcc0"),
            Err(LengthError::TooLong { limit: 7, count: 8 })
        );
        assert!(range.validate("#fff").is_ok());
        assert!(range.validate("ééé").is_err());
    }

    #[test]
    fn decimal_range_reports_bound() {
        let range = Decimal::ZERO..=Decimal::from(1);
        let err = range.validate(&dec("1.5")).unwrap_err();
        assert_eq!(err.code(), Code::MaxValue);
        assert_eq!(err.limit().as_deref(), Some("1"));
        assert_eq!(range.validate(&dec("-0.1")).unwrap_err().code(), Code::MinValue);
        assert!(range.validate(&dec("0.50")).is_ok());
    }

    #[test]
    fn digit_limits() {
        let limits = DigitLimits {
            max_digits: 3,
            decimal_places: 2,
        };
        assert!(limits.validate(&dec("0.25")).is_ok());
        assert!(limits.validate(&dec("1.00")).is_ok());
        assert_eq!(limits.validate(&dec("0.125")), Err(DigitsError::MaxDecimalPlaces(2)));
        assert_eq!(limits.validate(&dec("1.125")), Err(DigitsError::MaxDigits(3)));
        assert_eq!(limits.validate(&dec("12")), Err(DigitsError::MaxWholeDigits(1)));
        assert_eq!(limits.validate(&Decimal::NAN), Err(DigitsError::NotFinite));
    }
}

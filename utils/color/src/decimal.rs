//! Exact base-10 numbers.
//!
//! Opacity has to be rounded on its decimal digits, not on a binary
//! approximation, so every accepted input (integers, floats, text) is first
//! turned into a [`Decimal`] and all range checks and rounding happen there.

use core::{
    cmp::Ordering,
    fmt::{self, Display, Write},
    str::FromStr,
};

use thiserror::Error;

/// An exact decimal number, or one of the special values infinity and NaN.
///
/// A finite value is `coefficient × 10^exponent`. The coefficient keeps its
/// trailing zeros (`0.50` and `0.5` are stored differently) but comparisons
/// are numeric, so `0.50 == 0.5`.
#[derive(Debug, Clone)]
pub struct Decimal {
    negative: bool,
    value: Value,
}

#[derive(Debug, Clone)]
enum Value {
    Finite {
        /// Coefficient digits (0-9), most significant first, no leading
        /// zeros. Empty for zero.
        digits: Vec<u8>,
        exponent: i64,
    },
    Infinite,
    NaN,
}

/// Error returned when text is not a decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid decimal literal")]
pub struct DecimalParseError;

/// Digit counts of a finite decimal, as a fixed-point field counts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Total number of digits.
    pub digits: u64,
    /// Digits after the decimal point.
    pub decimal_places: u64,
}

impl Precision {
    /// Digits before the decimal point.
    #[must_use]
    pub const fn whole_digits(&self) -> u64 {
        self.digits.saturating_sub(self.decimal_places)
    }
}

impl Decimal {
    /// Positive infinity.
    pub const INFINITY: Self = Self {
        negative: false,
        value: Value::Infinite,
    };

    /// Not a number.
    pub const NAN: Self = Self {
        negative: false,
        value: Value::NaN,
    };

    /// Zero.
    pub const ZERO: Self = Self {
        negative: false,
        value: Value::Finite {
            digits: Vec::new(),
            exponent: 0,
        },
    };

    fn finite(negative: bool, digits: impl IntoIterator<Item = u8>, exponent: i64) -> Self {
        let digits: Vec<u8> = digits.into_iter().skip_while(|&d| d == 0).collect();
        Self {
            negative,
            value: Value::Finite { digits, exponent },
        }
    }

    /// Returns `true` unless the value is infinite or NaN.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self.value, Value::Finite { .. })
    }

    /// Returns `true` if the value is NaN.
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self.value, Value::NaN)
    }

    /// Returns `true` for a finite zero of either sign.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(&self.value, Value::Finite { digits, .. } if digits.is_empty())
    }

    /// Returns `true` if the sign bit is set, including for `-0`.
    #[must_use]
    pub const fn is_sign_negative(&self) -> bool {
        self.negative
    }

    /// Digit counts of a finite value; `None` for infinity and NaN.
    ///
    /// Zero counts as one digit whatever its positive exponent, and a negative exponent longer than the
    /// coefficient counts the implied leading zeros (`0.005` has three
    /// digits, all of them decimal places).
    #[must_use]
    pub fn precision(&self) -> Option<Precision> {
        let Value::Finite { digits, exponent } = &self.value else {
            return None;
        };
        let len = digits.len().max(1) as u64;
        let precision = if *exponent >= 0 {
            // `0e5` is still a single zero digit.
            let zeros = if digits.is_empty() { 0 } else { exponent.unsigned_abs() };
            Precision {
                digits: len.saturating_add(zeros),
                decimal_places: 0,
            }
        } else if exponent.unsigned_abs() > len {
            Precision {
                digits: exponent.unsigned_abs(),
                decimal_places: exponent.unsigned_abs(),
            }
        } else {
            Precision {
                digits: len,
                decimal_places: exponent.unsigned_abs(),
            }
        };
        Some(precision)
    }

    /// Rounds to at most `places` fractional digits, ties to even.
    ///
    /// Values that already fit are returned unchanged; infinity and NaN pass
    /// through.
    #[must_use]
    pub fn round(&self, places: u32) -> Self {
        let Value::Finite { digits, exponent } = &self.value else {
            return self.clone();
        };
        let target = -i64::from(places);
        if *exponent >= target {
            return self.clone();
        }

        let drop = target.saturating_sub(*exponent).unsigned_abs();
        let len = digits.len() as u64;
        let (mut kept, first, rest_nonzero) = if drop > len {
            // every coefficient digit sits below the first dropped position
            (Vec::new(), 0, !digits.is_empty())
        } else {
            let split = usize::try_from(len - drop).unwrap_or(0);
            let (kept, discarded) = digits.split_at(split);
            let rest_nonzero = discarded[1..].iter().any(|&d| d != 0);
            (kept.to_vec(), discarded[0], rest_nonzero)
        };

        let last_odd = kept.last().is_some_and(|d| d % 2 == 1);
        if first > 5 || (first == 5 && (rest_nonzero || last_odd)) {
            increment(&mut kept);
        }
        Self::finite(self.negative, kept, target)
    }

    /// The value scaled by `10^places` as an integer, if that is exact and
    /// fits in a `u64`. Negative values other than `-0` give `None`.
    #[must_use]
    pub fn to_scaled_u64(&self, places: u32) -> Option<u64> {
        let Value::Finite { digits, exponent } = &self.value else {
            return None;
        };
        if digits.is_empty() {
            return Some(0);
        }
        if self.negative {
            return None;
        }
        let shift = exponent.checked_add(i64::from(places))?;
        let shift = u32::try_from(shift).ok()?;
        let coefficient = digits.iter().try_fold(0_u64, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u64::from(d))
        })?;
        coefficient.checked_mul(10_u64.checked_pow(shift)?)
    }

    /// Exponent of the most significant digit; `None` for zero.
    fn adjusted(&self) -> Option<i64> {
        match &self.value {
            Value::Finite { digits, exponent } if !digits.is_empty() => {
                Some(exponent.saturating_add(digits.len() as i64 - 1))
            }
            _ => None,
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (Value::Infinite, Value::Infinite) => Ordering::Equal,
            (Value::Infinite, _) => Ordering::Greater,
            (_, Value::Infinite) => Ordering::Less,
            (Value::Finite { digits: a, .. }, Value::Finite { digits: b, .. }) => {
                match (self.adjusted(), other.adjusted()) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                    (Some(x), Some(y)) => x.cmp(&y).then_with(|| {
                        let len = a.len().max(b.len());
                        let digit = |ds: &[u8], i: usize| ds.get(i).copied().unwrap_or(0);
                        (0..len)
                            .map(|i| digit(a, i).cmp(&digit(b, i)))
                            .find(|o| o.is_ne())
                            .unwrap_or(Ordering::Equal)
                    }),
                }
            }
            _ => Ordering::Equal,
        }
    }
}

fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        // zeros compare equal whatever their sign
        let self_negative = self.negative && !self.is_zero();
        let other_negative = other.negative && !other.is_zero();
        let ordering = match (self_negative, other_negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        };
        Some(ordering)
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    /// Parses decimal text.
    ///
    /// Surrounding whitespace is trimmed and underscores are ignored
    /// anywhere, so `"_0.3__"` reads as `0.3`. Accepts an optional sign,
    /// digits with an optional point, an optional `e`/`E` exponent, and the
    /// words `inf`, `infinity` and `nan` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
        let (negative, body) = match cleaned.as_bytes().first() {
            Some(b'-') => (true, &cleaned[1..]),
            Some(b'+') => (false, &cleaned[1..]),
            _ => (false, cleaned.as_str()),
        };

        if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
            return Ok(Self {
                negative,
                value: Value::Infinite,
            });
        }
        if body.eq_ignore_ascii_case("nan") {
            return Ok(Self {
                negative,
                value: Value::NaN,
            });
        }

        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(at) => (&body[..at], parse_exponent(&body[at + 1..])?),
            None => (body, 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(DecimalParseError);
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(DecimalParseError);
        }

        let exponent = exponent.saturating_sub(fraction.len() as i64);
        let digits = whole.bytes().chain(fraction.bytes()).map(|b| b - b'0');
        Ok(Self::finite(negative, digits, exponent))
    }
}

fn parse_exponent(text: &str) -> Result<i64, DecimalParseError> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecimalParseError);
    }
    let magnitude = digits.bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Ok(if negative { -magnitude } else { magnitude })
}

impl Display for Decimal {
    /// Formats like a decimal context's scientific string: plain notation
    /// for ordinary magnitudes, `1E+5` style otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_char('-')?;
        }
        let (digits, exponent) = match &self.value {
            Value::Infinite => return f.write_str("Infinity"),
            Value::NaN => return f.write_str("NaN"),
            Value::Finite { digits, exponent } => (digits, *exponent),
        };

        let coefficient: String = if digits.is_empty() {
            "0".to_owned()
        } else {
            digits.iter().map(|&d| char::from(b'0' + d)).collect()
        };
        let len = coefficient.len() as i64;
        let adjusted = exponent.saturating_add(len - 1);

        if exponent <= 0 && adjusted >= -6 {
            if exponent == 0 {
                return f.write_str(&coefficient);
            }
            let point = len + exponent;
            if point > 0 {
                let (whole, fraction) = coefficient.split_at(point.unsigned_abs() as usize);
                write!(f, "{whole}.{fraction}")
            } else {
                let zeros = "0".repeat(point.unsigned_abs() as usize);
                write!(f, "0.{zeros}{coefficient}")
            }
        } else {
            let (head, tail) = coefficient.split_at(1);
            f.write_str(head)?;
            if !tail.is_empty() {
                write!(f, ".{tail}")?;
            }
            write!(f, "E{adjusted:+}")
        }
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        let digits = value.unsigned_abs().to_string();
        Self::finite(value < 0, digits.bytes().map(|b| b - b'0'), 0)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Decimal {
                fn from(value: $ty) -> Self {
                    Self::from(i64::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, u8, u16, u32);

impl From<f64> for Decimal {
    /// Converts the exact binary value of `value`, so `0.1` becomes
    /// `0.1000000000000000055511151231257827021181583404541015625`.
    fn from(value: f64) -> Self {
        let negative = value.is_sign_negative();
        if value.is_nan() {
            return Self {
                negative,
                value: Value::NaN,
            };
        }
        if value.is_infinite() {
            return Self {
                negative,
                value: Value::Infinite,
            };
        }

        // an f64 has at most 1074 fractional digits, so this expansion is exact
        let text = format!("{:.1074}", value.abs());
        let mut digits: Vec<u8> = text
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        let mut exponent: i64 = -1074;
        while digits.last() == Some(&0) {
            digits.pop();
            exponent += 1;
        }
        if digits.iter().all(|&d| d == 0) {
            exponent = 0;
        }
        Self::finite(negative, digits, exponent)
    }
}

impl From<f32> for Decimal {
    fn from(value: f32) -> Self {
        Self::from(f64::from(value))
    }
}

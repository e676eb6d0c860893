//! The two sub-fields behind a color input: hex text and opacity.

use core::ops::RangeInclusive;

use serde_json::Value;
use spectrum_color::Decimal;

use crate::{
    Code, ErrorMessages, ValidationError, ValidationErrors,
    valid::{DigitLimits, Validator},
};

/// Returns `true` for values a form treats as "nothing submitted".
pub(crate) fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Text input holding the hex part, `#fff` to `#ffffff`.
#[derive(Debug, Clone)]
pub struct HexField {
    length: RangeInclusive<usize>,
    messages: ErrorMessages,
}

impl Default for HexField {
    fn default() -> Self {
        Self::new(4, 7)
    }
}

impl HexField {
    /// Creates a field accepting `min_length..=max_length` characters.
    #[must_use]
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            length: min_length..=max_length,
            messages: ErrorMessages::with_defaults(&[
                (Code::Invalid, "Enter a valid value."),
                (Code::Incomplete, "Hex value required."),
                (
                    Code::MinLength,
                    "Ensure hex value has at least {limit} characters (it has {count}).",
                ),
                (
                    Code::MaxLength,
                    "Ensure hex value has at most {limit} characters (it has {count}).",
                ),
            ]),
        }
    }

    /// Mutable access to the message templates.
    pub fn messages_mut(&mut self) -> &mut ErrorMessages {
        &mut self.messages
    }

    /// The `incomplete` error for when this input alone was left empty.
    #[must_use]
    pub fn incomplete(&self) -> ValidationError {
        self.messages.error(Code::Incomplete)
    }

    /// Trims and length-checks a raw value.
    ///
    /// Returns `Ok(None)` when nothing usable was submitted. Numbers are
    /// taken as their text.
    ///
    /// # Errors
    ///
    /// `invalid` for booleans, arrays and objects; `min_length` and
    /// `max_length` for text of the wrong size.
    pub fn clean(&self, raw: Option<&Value>) -> Result<Option<String>, ValidationError> {
        if is_empty(raw) {
            return Ok(None);
        }
        let text = match raw {
            Some(Value::String(text)) => text.trim().to_owned(),
            Some(Value::Number(number)) => number.to_string(),
            _ => return Err(self.messages.error(Code::Invalid)),
        };
        if text.is_empty() {
            return Ok(None);
        }
        self.length
            .validate(text.as_str())
            .map_err(|rejection| self.messages.reject(&rejection))?;
        Ok(Some(text))
    }
}

/// Number input holding the opacity, `0` to `1` with two decimal places.
#[derive(Debug, Clone)]
pub struct OpacityField {
    range: RangeInclusive<Decimal>,
    digits: DigitLimits,
    messages: ErrorMessages,
}

impl Default for OpacityField {
    fn default() -> Self {
        Self::new(DigitLimits {
            max_digits: 3,
            decimal_places: 2,
        })
    }
}

impl OpacityField {
    /// Creates a field bounded to `[0, 1]` with the given digit limits.
    #[must_use]
    pub fn new(digits: DigitLimits) -> Self {
        Self {
            range: Decimal::ZERO..=Decimal::from(1),
            digits,
            messages: ErrorMessages::with_defaults(&[
                (Code::Invalid, "Enter a number."),
                (Code::Incomplete, "Opacity required."),
                (
                    Code::MinValue,
                    "Ensure opacity is greater than or equal to {limit}.",
                ),
                (Code::MaxValue, "Ensure opacity is less than or equal to {limit}."),
                (
                    Code::MaxDigits,
                    "Ensure that there are no more than {limit} digits in total.",
                ),
                (
                    Code::MaxDecimalPlaces,
                    "Ensure that there are no more than {limit} decimal places.",
                ),
                (
                    Code::MaxWholeDigits,
                    "Ensure that there are no more than {limit} digits before the decimal point.",
                ),
            ]),
        }
    }

    /// Mutable access to the message templates.
    pub fn messages_mut(&mut self) -> &mut ErrorMessages {
        &mut self.messages
    }

    /// The `incomplete` error for when this input alone was left empty.
    #[must_use]
    pub fn incomplete(&self) -> ValidationError {
        self.messages.error(Code::Incomplete)
    }

    /// Parses and bounds-checks a raw value.
    ///
    /// Returns `Ok(None)` when nothing usable was submitted.
    ///
    /// # Errors
    ///
    /// `invalid` for anything that is not a finite number. Otherwise the
    /// range and the digit limits are both checked and every failure is
    /// returned: `min_value` or `max_value`, then `max_digits`,
    /// `max_decimal_places` or `max_whole_digits`.
    pub fn clean(&self, raw: Option<&Value>) -> Result<Option<Decimal>, ValidationErrors> {
        if is_empty(raw) {
            return Ok(None);
        }
        let text = match raw {
            Some(Value::String(text)) => text.trim().to_owned(),
            Some(Value::Number(number)) => number.to_string(),
            _ => return Err(self.messages.error(Code::Invalid).into()),
        };
        if text.is_empty() {
            return Ok(None);
        }
        let value: Decimal = text
            .parse()
            .map_err(|_| self.messages.error(Code::Invalid))?;
        if !value.is_finite() {
            return Err(self.messages.error(Code::Invalid).into());
        }
        let errors: Vec<_> = [
            self.range
                .validate(&value)
                .map_err(|rejection| self.messages.reject(&rejection)),
            self.digits
                .validate(&value)
                .map_err(|rejection| self.messages.reject(&rejection)),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();
        if errors.is_empty() {
            Ok(Some(value))
        } else {
            Err(ValidationErrors::new(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn hex_trims_and_measures() {
        let field = HexField::default();
        assert_eq!(field.clean(Some(&json!("  #fff "))), Ok(Some("#fff".to_owned())));
        assert_eq!(field.clean(Some(&json!("   "))), Ok(None));
        assert_eq!(field.clean(None), Ok(None));
        assert_eq!(field.clean(Some(&json!(123_456))), Ok(Some("123456".to_owned())));

        let err = field.clean(Some(&json!("#ff"))).unwrap_err();
        assert_eq!(err.code(), Code::MinLength);
        assert_eq!(
            err.message(),
            "Ensure hex value has at least 4 characters (it has 3)."
        );
        let err = field.clean(Some(&json!("#ffffff0"))).unwrap_err();
        assert_eq!(
            err.message(),
            "Ensure hex value has at most 7 characters (it has 8)."
        );
        assert_eq!(field.clean(Some(&json!(["#fff"]))).unwrap_err().code(), Code::Invalid);
        assert_eq!(field.clean(Some(&json!([]))), Ok(None));
        assert_eq!(field.clean(Some(&json!({}))), Ok(None));
    }

    #[test]
    fn opacity_parses_and_bounds() {
        let field = OpacityField::default();
        let dec = |text: &str| text.parse::<Decimal>().unwrap();
        assert_eq!(field.clean(Some(&json!("0.25"))), Ok(Some(dec("0.25"))));
        assert_eq!(field.clean(Some(&json!(0.5))), Ok(Some(dec("0.5"))));
        assert_eq!(field.clean(Some(&json!(1))), Ok(Some(dec("1"))));
        assert_eq!(field.clean(Some(&json!(""))), Ok(None));

        let message = |raw: Value| field.clean(Some(&raw)).unwrap_err().to_string();
        assert_eq!(message(json!("half")), "Enter a number.");
        assert_eq!(message(json!("Infinity")), "Enter a number.");
        assert_eq!(message(json!(true)), "Enter a number.");
        assert_eq!(
            message(json!("-0.1")),
            "Ensure opacity is greater than or equal to 0."
        );
        assert_eq!(message(json!(1.5)), "Ensure opacity is less than or equal to 1.");
        assert_eq!(
            message(json!("0.125")),
            "Ensure that there are no more than 2 decimal places."
        );
    }

    #[test]
    fn opacity_reports_every_failed_check() {
        let field = OpacityField::default();
        let codes = |raw: Value| field.clean(Some(&raw)).unwrap_err().codes().collect::<Vec<_>>();
        assert_eq!(codes(json!("-0.125")), [Code::MinValue, Code::MaxDecimalPlaces]);
        assert_eq!(codes(json!("12.345")), [Code::MaxValue, Code::MaxDigits]);
        assert_eq!(codes(json!(12)), [Code::MaxValue, Code::MaxWholeDigits]);

        let err = field.clean(Some(&json!("-0.125"))).unwrap_err();
        let messages: Vec<_> = err.errors().iter().map(ValidationError::message).collect();
        assert_eq!(
            messages,
            [
                "Ensure opacity is greater than or equal to 0.",
                "Ensure that there are no more than 2 decimal places.",
            ]
        );
    }

    #[test]
    fn messages_can_be_overridden() {
        let mut field = HexField::default();
        field
            .messages_mut()
            .set(Code::MinLength, "Too short: {count}/{limit}");
        let err = field.clean(Some(&json!("#f"))).unwrap_err();
        assert_eq!(err.message(), "Too short: 2/4");
    }

    #[test]
    fn empty_values() {
        assert!(is_empty(None));
        assert!(is_empty(Some(&json!(null))));
        assert!(is_empty(Some(&json!(""))));
        assert!(is_empty(Some(&json!([]))));
        assert!(!is_empty(Some(&json!(" "))));
        assert!(!is_empty(Some(&json!(0))));
    }
}

//! Validation errors reported to form users.

use core::fmt::{self, Display};
use std::collections::BTreeMap;

use thiserror::Error;

use crate::valid::Rejection;

/// Machine-readable reason attached to every [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Code {
    /// Nothing was submitted for a required field.
    Required,
    /// A sub-value had an unusable type or could not be read.
    Invalid,
    /// One input of a partly filled field was left empty.
    Incomplete,
    /// The color could not be built.
    InvalidColor,
    /// The opacity was missing.
    InvalidOpacity,
    /// Text shorter than allowed.
    MinLength,
    /// Text longer than allowed.
    MaxLength,
    /// Number below the lower bound.
    MinValue,
    /// Number above the upper bound.
    MaxValue,
    /// Too many digits in total.
    MaxDigits,
    /// Too many digits after the decimal point.
    MaxDecimalPlaces,
    /// Too many digits before the decimal point.
    MaxWholeDigits,
}

impl Code {
    /// The snake-case tag, e.g. `"invalid_color"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Invalid => "invalid",
            Self::Incomplete => "incomplete",
            Self::InvalidColor => "invalid_color",
            Self::InvalidOpacity => "invalid_opacity",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::MinValue => "min_value",
            Self::MaxValue => "max_value",
            Self::MaxDigits => "max_digits",
            Self::MaxDecimalPlaces => "max_decimal_places",
            Self::MaxWholeDigits => "max_whole_digits",
        }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-facing validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    code: Code,
    message: String,
}

impl ValidationError {
    /// Creates an error with an already rendered message.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The reason code.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every failure found while cleaning a field. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// The individual errors in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// The codes of all errors.
    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        self.0.iter().map(ValidationError::code)
    }

    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl core::error::Error for ValidationErrors {}

/// Message templates of one field, keyed by [`Code`].
///
/// Templates may contain `{limit}` and `{count}`, filled from the
/// [`Rejection`] being reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessages(BTreeMap<Code, String>);

impl ErrorMessages {
    pub(crate) fn with_defaults(defaults: &[(Code, &str)]) -> Self {
        Self(
            defaults
                .iter()
                .map(|&(code, message)| (code, message.to_owned()))
                .collect(),
        )
    }

    /// Replaces the template for `code`.
    pub fn set(&mut self, code: Code, template: impl Into<String>) {
        self.0.insert(code, template.into());
    }

    /// Applies every override in `overrides`.
    pub fn extend<'a>(&mut self, overrides: impl IntoIterator<Item = (&'a Code, &'a String)>) {
        for (code, template) in overrides {
            self.set(*code, template.clone());
        }
    }

    /// The template for `code`, if any.
    #[must_use]
    pub fn get(&self, code: Code) -> Option<&str> {
        self.0.get(&code).map(String::as_str)
    }

    /// Builds an error for `code` with no placeholders filled.
    #[must_use]
    pub fn error(&self, code: Code) -> ValidationError {
        ValidationError::new(code, self.get(code).unwrap_or(code.as_str()))
    }

    /// Builds an error for a rejection, filling its placeholders.
    #[must_use]
    pub fn reject(&self, rejection: &impl Rejection) -> ValidationError {
        let code = rejection.code();
        let mut message = self.get(code).unwrap_or(code.as_str()).to_owned();
        if let Some(limit) = rejection.limit() {
            message = message.replace("{limit}", &limit);
        }
        if let Some(count) = rejection.count() {
            message = message.replace("{count}", &count.to_string());
        }
        ValidationError::new(code, message)
    }
}

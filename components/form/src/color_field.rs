//! The composite color field.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use spectrum_color::{Color, Decimal};

use crate::{
    Code, ColorWidget, ErrorMessages, HexField, OpacityField, ValidationError, ValidationErrors,
    field::is_empty, valid::DigitLimits,
};

/// Settings for a [`ColorField`].
///
/// Every field has a default, so a config file only needs the keys it
/// changes. The three message maps override templates of the composite
/// field, the hex input and the opacity input respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ColorFieldConfig {
    /// Reject a submission where both inputs are empty.
    pub required: bool,
    /// Report an input left empty in a partly filled submission with that
    /// input's `incomplete` message, instead of `invalid_color` or
    /// `invalid_opacity`.
    pub report_incomplete: bool,
    /// Shortest accepted hex text, `#` included.
    pub min_length: usize,
    /// Longest accepted hex text, `#` included.
    pub max_length: usize,
    /// Maximum digits of the opacity.
    pub max_digits: u64,
    /// Maximum decimal places of the opacity.
    pub decimal_places: u64,
    /// Templates for `required`, `invalid_color` and `invalid_opacity`.
    pub messages: BTreeMap<Code, String>,
    /// Templates for the hex input.
    pub hex_messages: BTreeMap<Code, String>,
    /// Templates for the opacity input.
    pub opacity_messages: BTreeMap<Code, String>,
}

impl Default for ColorFieldConfig {
    fn default() -> Self {
        Self {
            required: false,
            report_incomplete: false,
            min_length: 4,
            max_length: 7,
            max_digits: 3,
            decimal_places: 2,
            messages: BTreeMap::new(),
            hex_messages: BTreeMap::new(),
            opacity_messages: BTreeMap::new(),
        }
    }
}

/// A form field made of a hex input and an opacity input that cleans to an
/// optional [`Color`].
#[derive(Debug, Clone)]
pub struct ColorField {
    required: bool,
    report_incomplete: bool,
    hex: HexField,
    opacity: OpacityField,
    messages: ErrorMessages,
}

impl Default for ColorField {
    fn default() -> Self {
        Self::from_config(&ColorFieldConfig::default())
    }
}

impl ColorField {
    /// Creates an optional field with the default inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a field from settings.
    #[must_use]
    pub fn from_config(config: &ColorFieldConfig) -> Self {
        let mut hex = HexField::new(config.min_length, config.max_length);
        hex.messages_mut().extend(&config.hex_messages);

        let mut opacity = OpacityField::new(DigitLimits {
            max_digits: config.max_digits,
            decimal_places: config.decimal_places,
        });
        opacity.messages_mut().extend(&config.opacity_messages);

        let mut messages = ErrorMessages::with_defaults(&[
            (Code::Required, "This field is required."),
            (Code::InvalidColor, "Enter a valid color."),
            (Code::InvalidOpacity, "Enter a valid opacity."),
        ]);
        messages.extend(&config.messages);

        Self {
            required: config.required,
            report_incomplete: config.report_incomplete,
            hex,
            opacity,
            messages,
        }
    }

    /// Sets whether an empty submission is an error.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets whether an empty input next to a filled one is reported as
    /// `incomplete`.
    #[must_use]
    pub const fn report_incomplete(mut self, report_incomplete: bool) -> Self {
        self.report_incomplete = report_incomplete;
        self
    }

    /// Cleans both raw sub-values into an optional color.
    ///
    /// Both inputs empty gives `Ok(None)`, or a `required` error when the
    /// field is required. Otherwise each input is cleaned, all of their
    /// errors are reported together, and the cleaned values go through
    /// [`ColorField::compress`]. With `report_incomplete`, an empty input is
    /// not cleaned and reports its `incomplete` message instead.
    ///
    /// # Errors
    ///
    /// Returns every sub-field error, or the single error from `compress`.
    pub fn clean(
        &self,
        hex: Option<&Value>,
        opacity: Option<&Value>,
    ) -> Result<Option<Color>, ValidationErrors> {
        if is_empty(hex) && is_empty(opacity) {
            if self.required {
                let error = self.messages.error(Code::Required);
                tracing::debug!(code = %error.code(), "color field is empty");
                return Err(error.into());
            }
            return Ok(None);
        }

        let mut errors = Vec::new();
        let hex = if self.report_incomplete && is_empty(hex) {
            errors.push(self.hex.incomplete());
            None
        } else {
            self.hex.clean(hex).unwrap_or_else(|error| {
                errors.push(error);
                None
            })
        };
        let opacity = if self.report_incomplete && is_empty(opacity) {
            errors.push(self.opacity.incomplete());
            None
        } else {
            self.opacity.clean(opacity).unwrap_or_else(|found| {
                errors.extend(found);
                None
            })
        };
        if !errors.is_empty() {
            let errors = ValidationErrors::new(errors);
            tracing::debug!(
                codes = ?errors.codes().collect::<Vec<_>>(),
                "color field inputs rejected"
            );
            return Err(errors);
        }

        self.compress(hex.as_deref(), opacity.as_ref())
            .map(Some)
            .map_err(ValidationErrors::from)
    }

    /// Reads both inputs of `widget` from submitted form data and cleans them.
    ///
    /// # Errors
    ///
    /// Same as [`ColorField::clean`].
    pub fn clean_form(
        &self,
        widget: &ColorWidget,
        data: &Map<String, Value>,
    ) -> Result<Option<Color>, ValidationErrors> {
        let (hex, opacity) = widget.value_from_data(data);
        self.clean(hex, opacity)
    }

    /// Combines cleaned sub-values into a color.
    ///
    /// # Errors
    ///
    /// `invalid_color` when the hex is missing or the color cannot be built,
    /// `invalid_opacity` when the opacity is missing. A missing value never
    /// reaches the color constructor.
    pub fn compress(
        &self,
        hex: Option<&str>,
        opacity: Option<&Decimal>,
    ) -> Result<Color, ValidationError> {
        let Some(hex) = hex else {
            return Err(self.reject(Code::InvalidColor));
        };
        let Some(opacity) = opacity else {
            return Err(self.reject(Code::InvalidOpacity));
        };
        Color::with_opacity(hex, opacity.clone()).map_err(|error| {
            tracing::debug!(%error, kind = ?error.kind(), "color constructor rejected input");
            self.messages.error(Code::InvalidColor)
        })
    }

    fn reject(&self, code: Code) -> ValidationError {
        tracing::debug!(%code, "color field value missing");
        self.messages.error(code)
    }
}

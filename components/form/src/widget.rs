//! Naming and data extraction for the two inputs of a color field.

use serde_json::{Map, Value};
use spectrum_color::Color;

/// The pair of inputs, `<name>_0` for the hex and `<name>_1` for the
/// opacity, that a [`ColorField`](crate::ColorField) is submitted through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorWidget {
    name: String,
}

impl ColorWidget {
    /// Creates a widget for the form field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The form field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the hex input.
    #[must_use]
    pub fn hex_name(&self) -> String {
        format!("{}_0", self.name)
    }

    /// Name of the opacity input.
    #[must_use]
    pub fn opacity_name(&self) -> String {
        format!("{}_1", self.name)
    }

    /// Picks the raw hex and opacity values out of submitted data.
    #[must_use]
    pub fn value_from_data<'a>(
        &self,
        data: &'a Map<String, Value>,
    ) -> (Option<&'a Value>, Option<&'a Value>) {
        (data.get(&self.hex_name()), data.get(&self.opacity_name()))
    }

    /// Splits a color into the initial text of the hex and opacity inputs.
    ///
    /// No color gives two empty inputs.
    #[must_use]
    pub fn decompress(value: Option<&Color>) -> (String, String) {
        value.map_or_else(
            || (String::new(), String::new()),
            |color| (color.hex(), color.opacity().to_string()),
        )
    }
}

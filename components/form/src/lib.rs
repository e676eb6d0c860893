//! # Spectrum Form
//!
//! A form field for [`Color`](spectrum_color::Color) values, submitted as
//! two inputs: hex text (`#fff` to `#ffffff`) and an opacity between 0 and 1
//! with at most two decimal places.
//!
//! [`ColorField::clean`] takes the raw values of both inputs and returns
//! `Ok(None)` when nothing was entered, the parsed color, or every
//! [`ValidationError`] found along the way. Errors carry a [`Code`] such as
//! `invalid_color` and a rendered message.
//!
//! ```
//! use serde_json::json;
//! use spectrum_form::{Code, ColorField};
//!
//! let field = ColorField::new();
//! let color = field.clean(Some(&json!("#60A")), Some(&json!("0.8"))).unwrap();
//! assert_eq!(color.unwrap().to_string(), "rgba(102,0,170,0.8)");
//!
//! let err = field.clean(Some(&json!("#60A")), None).unwrap_err();
//! assert_eq!(err.codes().collect::<Vec<_>>(), [Code::InvalidOpacity]);
//! ```

mod color_field;
pub use color_field::{ColorField, ColorFieldConfig};
mod error;
pub use error::{Code, ErrorMessages, ValidationError, ValidationErrors};
mod field;
pub use field::{HexField, OpacityField};
pub mod valid;
mod widget;
pub use widget::ColorWidget;

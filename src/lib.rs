#![doc = include_str!("../README.md")]

pub mod logging;

#[doc(inline)]
pub use spectrum_color as color;
#[doc(inline)]
pub use spectrum_form as form;

pub use spectrum_color::{Color, ColorError, Decimal, Equality, ErrorKind, Opacity, OpacityValue};
pub use spectrum_form::{
    Code, ColorField, ColorFieldConfig, ColorWidget, ValidationError, ValidationErrors,
};

pub mod prelude {
    //! The color type and the form field, for a single `use`.
    //!
    //! ```rust
    //! use spectrum::prelude::*;
    //!
    //! let color: Color = "#fff".parse().unwrap();
    //! assert_eq!(color.rgb(), "rgb(255,255,255)");
    //! ```
    pub use spectrum_color::{Color, Equality, Opacity};
    pub use spectrum_form::{ColorField, ColorWidget};
}

use thiserror::Error;

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexColorError {
    /// The string does not hold 3 or 6 hexadecimal digits after the
    /// optional `#`. Carries the number of bytes found.
    #[error("expected 3 or 6 hexadecimal digits, found {0}")]
    InvalidLength(usize),
    /// A non-hexadecimal character was encountered at the provided byte index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

/// Errors that can occur when reading an opacity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpacityError {
    /// The text is not a decimal number.
    #[error("opacity is not a number")]
    Malformed,
    /// The value is infinite or NaN.
    #[error("opacity must be a finite number")]
    NonFinite,
    /// The value lies outside `[0, 1]`.
    #[error("opacity must be between 0 and 1")]
    OutOfRange,
}

/// The two broad classes of construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument had an unsupported type.
    Type,
    /// An argument had the right type but an unusable value.
    Value,
}

/// Error returned when a [`Color`](crate::Color) cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// An argument had an unsupported type.
    #[error("expected {expected}, found {found}")]
    Type {
        /// Description of the accepted types.
        expected: &'static str,
        /// Name of the type that was supplied.
        found: &'static str,
    },
    /// The hex argument is malformed.
    #[error("invalid hex color: {0}")]
    Hex(#[from] HexColorError),
    /// The opacity argument is malformed or out of range.
    #[error("invalid opacity: {0}")]
    Opacity(#[from] OpacityError),
}

impl ColorError {
    /// Returns whether this is a type or a value failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Hex(_) | Self::Opacity(_) => ErrorKind::Value,
        }
    }
}

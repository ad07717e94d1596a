//! Utility module with colorlit's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// A malformed color literal.
///
/// Parsing stops at the first grammar violation and reports it with one of
/// the variants below. All of them are syntax errors; the variant merely names
/// the expectation that failed, which helps with error messages but carries no
/// position. The enumeration only has unit variants so that it remains cheap
/// to copy and straight-forward to expose to Python.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SyntaxError {
    /// A literal that is empty or contains only white space.
    #[error("color literal should not be empty")]
    Empty,

    /// A literal with a character that cannot start any token. For example,
    /// `?` and `rgb(1 2 3;)` contain such characters.
    #[error("color literal should contain only numbers, names, `#`, `(`, `)`, `,`, `/`, and `%`")]
    UnexpectedCharacter,

    /// A literal that does not start with `#` or one of the `rgb()`, `rgba()`,
    /// `hsl()`, and `hsla()` functions.
    #[error("color literal should start with `#`, `rgb(`, `rgba(`, `hsl(`, or `hsla(`")]
    UnknownFormat,

    /// A hashed hexadecimal literal with the wrong number of digits. For
    /// example, `#` and `#ff` have too few digits.
    #[error("hashed hexadecimal color should have 3, 4, 6, or 8 digits")]
    BadHexLength,

    /// A hashed hexadecimal literal with a non-hexadecimal digit. For example,
    /// `#efg` has a malformed third digit.
    #[error("hashed hexadecimal color should contain only hexadecimal digits")]
    MalformedHex,

    /// A number without digits. For example, `rgb(+ 1 2)` starts with a lone
    /// sign.
    #[error("color component should be a number with at least one digit")]
    MalformedNumber,

    /// A dimension with a unit other than `deg`, `rad`, `grad`, or `turn`.
    #[error("angle should use `deg`, `rad`, `grad`, or `turn` as unit")]
    UnknownUnit,

    /// A color function name without opening parenthesis. For example, `rgb`
    /// is missing everything but the name.
    #[error("color function should include an opening parenthesis but has none")]
    NoOpeningParenthesis,

    /// A color function without closing parenthesis. For example, `hsl(1 2 3`
    /// is missing the closing parenthesis.
    #[error("color function should include a closing parenthesis but has none")]
    NoClosingParenthesis,

    /// A color function with fewer than three components. For example,
    /// `rgb()` has none and `rgb(1, 2)` has two.
    #[error("color function should have 3 components but is missing one")]
    MissingComponent,

    /// A component of the wrong kind for its position. For example, RGB
    /// channels must not be angles and `hsl(0 1deg 2)` has an angle for
    /// saturation.
    #[error("color component has the wrong kind for its position")]
    MalformedComponent,

    /// A color function that mixes comma-separated and space-separated
    /// syntax. For example, `rgb(1, 2 3)` switches after the second
    /// component and `rgb(1 2 3, 0.5)` uses a comma as alpha divider.
    #[error("color function should separate components with commas or spaces but not both")]
    MixedSeparators,

    /// A color function with components after the alpha. For example,
    /// `rgb(1 2 3 4)` has one component too many.
    #[error("color function should have at most 4 components but has more")]
    TooManyComponents,

    /// A literal followed by more text. For example, `#123 #456` has a
    /// second literal.
    #[error("color literal should end after the color but has more text")]
    TrailingCharacters,
}

#[cfg(feature = "pyffi")]
impl From<SyntaxError> for PyErr {
    fn from(value: SyntaxError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

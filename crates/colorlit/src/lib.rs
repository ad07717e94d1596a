//! # Color Literals
//!
//! Colorlit parses the color literals found in style sheets and theme files
//! and writes them back out in canonical form.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Colorlit's main abstractions are:
//!
//!   * [`parse_color`] turns a **color literal** into a [`Color`]. It accepts
//!     hashed hexadecimal notation with 3, 4, 6, or 8 digits as well as the
//!     `rgb()`, `rgba()`, `hsl()`, and `hsla()` functions in both legacy,
//!     comma-separated and modern, space-separated syntax. Parsing is
//!     case-insensitive and ignores leading and trailing white space.
//!   * [`Color`] distinguishes between the two **color models**, [`Rgb`] and
//!     [`Hsl`], and preserves the model a literal was written in.
//!   * [`Rgb`] is a 24-bit color with alpha. It formats as `rgb(R G B)` or
//!     `rgb(R G B/A)` and, with [`Rgb::format_hex`], as `#rrggbb` or
//!     `#rrggbbaa`.
//!   * [`Hsl`] combines hue in degrees with saturation and lightness in
//!     percent, plus alpha. It formats as `hsl(H S% L%)` or `hsl(H S% L%/A)`.
//!   * [`SyntaxError`](error::SyntaxError) names the **reason a literal was
//!     rejected**.
//!
//! Formatting is canonical: Numbers are rounded to integers, alpha is rounded
//! to three decimals and omitted when opaque. Parsing a formatted color
//! yields an equal color again.
//!
//! ```
//! # use colorlit::{parse_color, error::SyntaxError};
//! let color = parse_color("  HSLA(0.5turn, 40%, 30%, 50%) ")?;
//! assert_eq!(color.format(), "hsl(180 40% 30%/0.5)");
//! assert_eq!(color.to_rgb().format_hex(), "#2e6b6b80");
//!
//! let color = parse_color("#1234")?;
//! assert_eq!(color.to_string(), "rgb(17 34 51/0.267)");
//! assert_eq!(format!("{:.1}", color), "rgb(17 34 51/0.3)");
//! # Ok::<(), SyntaxError>(())
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! Colorlit supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!   - **`pyffi`** controls colorlit's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Parsing reports its outcome through [tracing](https://docs.rs/tracing)
//! events, at the trace level for accepted and at the debug level for
//! rejected literals. Without a subscriber, these events cost next to
//! nothing.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod error;
mod object;

pub use object::{Color, Hsl, Rgb};

use error::SyntaxError;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Parse the color literal.
///
/// This function recognizes hashed hexadecimal colors with 3, 4, 6, or 8
/// digits as well as the `rgb()`, `rgba()`, `hsl()`, and `hsla()` functions.
/// RGB channels may be numbers `0..=255` or percentages. Hues may be numbers,
/// percentages of a full turn, or angles with units `deg`, `rad`, `grad`, or
/// `turn`. Saturation and lightness may be numbers or percentages. Alpha may
/// be a number `0..=1` or a percentage. Any component may also be `none`.
/// Out-of-range values are clamped, hues are wrapped.
///
/// ```
/// # use colorlit::{parse_color, error::SyntaxError, Color, Rgb};
/// assert_eq!(parse_color("rgb(6.66%,13.33%,20%)")?, Color::Rgb(Rgb::new(17, 34, 51)));
/// assert_eq!(parse_color("hsl(-100 0% 0%)")?.format(), "hsl(260 0% 0%)");
/// assert_eq!(parse_color("rgb(1 2, 3)"), Err(SyntaxError::MixedSeparators));
/// # Ok::<(), SyntaxError>(())
/// ```
pub fn parse_color(text: &str) -> Result<Color, SyntaxError> {
    match core::parse(text) {
        Ok(color) => {
            tracing::trace!(input = text, %color, "parsed color literal");
            Ok(color)
        }
        Err(error) => {
            tracing::debug!(input = text, %error, "rejected color literal");
            Err(error)
        }
    }
}

/// Parse the color literal. <i class=python-only>Python only!</i>
///
/// This function returns either an `Rgb` or an `Hsl` instance.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "parse_color")]
pub fn py_parse_color(py: Python<'_>, text: &str) -> PyResult<PyObject> {
    let color = match parse_color(text)? {
        Color::Rgb(c) => Bound::new(py, c)?.into_any(),
        Color::Hsl(c) => Bound::new(py, c)?.into_any(),
    };
    Ok(color.unbind())
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colorlit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_parse_color, m)?)?;
    m.add_class::<Rgb>()?;
    m.add_class::<Hsl>()?;
    Ok(())
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::parse_color;
    use crate::error::SyntaxError;

    fn check_format(cases: &[(&str, &str)]) -> Result<(), SyntaxError> {
        for &(literal, expected) in cases {
            assert_eq!(
                parse_color(literal)?.format(),
                expected,
                "literal {:?}",
                literal
            );
        }
        Ok(())
    }

    #[test]
    fn test_validate() {
        for literal in ["?", "#", "#ff", "#ff f", "rgb", "rgb()"] {
            assert!(parse_color(literal).is_err(), "literal {:?}", literal);
        }
    }

    #[test]
    fn test_angle() -> Result<(), SyntaxError> {
        check_format(&[
            ("hsl(+100.0 0% 0%)", "hsl(100 0% 0%)"),
            ("hsl(+460.0 0% 0%)", "hsl(100 0% 0%)"),
            ("hsl(-100.0 0% 0%)", "hsl(260 0% 0%)"),
            ("hsl(-460.0 0% 0%)", "hsl(260 0% 0%)"),
            // Percent of a full turn
            ("hsl(+25.00% 0% 0%)", "hsl(90 0% 0%)"),
            ("hsl(+50.00% 0% 0%)", "hsl(180 0% 0%)"),
            ("hsl(+100.00% 0% 0%)", "hsl(360 0% 0%)"),
            ("hsl(-50.0% 0% 0%)", "hsl(180 0% 0%)"),
            ("hsl(-100.00% 0% 0%)", "hsl(0 0% 0%)"),
            // Degrees
            ("hsl(+180.00deg 0% 0%)", "hsl(180 0% 0%)"),
            ("hsl(+360.00deg 0% 0%)", "hsl(360 0% 0%)"),
            ("hsl(-180.00deg 0% 0%)", "hsl(180 0% 0%)"),
            ("hsl(-360.00deg 0% 0%)", "hsl(0 0% 0%)"),
            // Radians, gradians, turns
            ("hsl(+3.141592653rad 0% 0%)", "hsl(180 0% 0%)"),
            ("hsl(-3.141592653rad 0% 0%)", "hsl(180 0% 0%)"),
            ("hsl(100grad 0% 0%)", "hsl(90 0% 0%)"),
            ("hsl(0.25turn 0% 0%)", "hsl(90 0% 0%)"),
            ("hsl(90DEG 0% 0%)", "hsl(90 0% 0%)"),
        ])
    }

    #[test]
    fn test_percent() -> Result<(), SyntaxError> {
        check_format(&[
            ("hsl(0 +123.456% -123.456%)", "hsl(0 100% 0%)"),
            ("hsl(0 123.456 -123.456)", "hsl(0 100% 0%)"),
            ("rgb(-10% 110% 50%)", "rgb(0 255 128)"),
        ])
    }

    #[test]
    fn test_scientific_notation() -> Result<(), SyntaxError> {
        check_format(&[
            ("hsl(+1e2 0% 0%)", "hsl(100 0% 0%)"),
            ("hsl(+1E2 0% 0%)", "hsl(100 0% 0%)"),
            ("hsl(-1.000e2 0% 0%)", "hsl(260 0% 0%)"),
            ("hsl(-1.000E2 0% 0%)", "hsl(260 0% 0%)"),
            ("hsl(+1E+2 0% 0%)", "hsl(100 0% 0%)"),
            ("hsl(+1000E-1 0% 0%)", "hsl(100 0% 0%)"),
        ])
    }

    #[test]
    fn test_hex() -> Result<(), SyntaxError> {
        for (literal, expected) in [
            ("#123", "#112233"),
            ("#1234", "#11223344"),
            ("#112233", "#112233"),
            ("#11223344", "#11223344"),
            ("#ABCDEF", "#abcdef"),
            ("#123f", "#112233"),
        ] {
            assert_eq!(
                parse_color(literal)?.to_rgb().format_hex(),
                expected,
                "literal {:?}",
                literal
            );
        }
        Ok(())
    }

    #[test]
    fn test_rgb() -> Result<(), SyntaxError> {
        check_format(&[
            ("rgb(none none none)", "rgb(0 0 0)"),
            ("rgb(none none none/none)", "rgb(0 0 0)"),
            ("rgb(17 34 51)", "rgb(17 34 51)"),
            ("rgb(17 34 51/0.5)", "rgb(17 34 51/0.5)"),
            ("rgba(17 34 51/0.5)", "rgb(17 34 51/0.5)"),
            ("rgb(6.66% 13.33% 20%)", "rgb(17 34 51)"),
            ("rgb(6.66% 13.33% 20%/50%)", "rgb(17 34 51/0.5)"),
            ("rgba(6.66% 13.33% 20%/50%)", "rgb(17 34 51/0.5)"),
            ("rgb(17 34 51/0)", "rgb(17 34 51/0)"),
            ("rgb(17 34 51/1)", "rgb(17 34 51)"),
            ("rgb(17 34 51/-1)", "rgb(17 34 51/0)"),
            ("rgb(17 34 51/0.12345)", "rgb(17 34 51/0.123)"),
        ])
    }

    #[test]
    fn test_legacy_rgb() -> Result<(), SyntaxError> {
        check_format(&[
            ("rgb(17,34,51)", "rgb(17 34 51)"),
            ("rgb(17,34,51,0.5)", "rgb(17 34 51/0.5)"),
            ("rgba(17,34,51,0.5)", "rgb(17 34 51/0.5)"),
            ("rgb(6.66%,13.33%,20%)", "rgb(17 34 51)"),
            ("rgb(6.66%,13.33%,20%,50%)", "rgb(17 34 51/0.5)"),
            ("rgba(6.66%,13.33%,20%,50%)", "rgb(17 34 51/0.5)"),
            ("rgb(none, none, none)", "rgb(0 0 0)"),
            ("rgb(none, none, none, none)", "rgb(0 0 0)"),
            ("rgba(17, none, 51, 0.5)", "rgb(17 0 51/0.5)"),
        ])
    }

    #[test]
    fn test_hsl() -> Result<(), SyntaxError> {
        check_format(&[
            ("hsl(none none none)", "hsl(0 0% 0%)"),
            ("hsl(none none none/none)", "hsl(0 0% 0%)"),
            ("hsl(180 10 20)", "hsl(180 10% 20%)"),
            ("hsl(180 10 20/0.5)", "hsl(180 10% 20%/0.5)"),
            ("hsla(180 10 20/0.5)", "hsl(180 10% 20%/0.5)"),
            ("hsl(180 10% 20%)", "hsl(180 10% 20%)"),
            ("hsl(180 10% 20%/0.5)", "hsl(180 10% 20%/0.5)"),
            ("hsla(180 10% 20%/0.5)", "hsl(180 10% 20%/0.5)"),
        ])
    }

    #[test]
    fn test_legacy_hsl() -> Result<(), SyntaxError> {
        check_format(&[
            ("hsl(180,40%,30%)", "hsl(180 40% 30%)"),
            ("hsl(180,40%,30%,0.5)", "hsl(180 40% 30%/0.5)"),
            ("hsla(180,40%,30%,0.5)", "hsl(180 40% 30%/0.5)"),
            ("hsl(none, 10%, none)", "hsl(0 10% 0%)"),
            ("hsla(none, none, none, none)", "hsl(0 0% 0%)"),
        ])
    }

    #[test]
    fn test_whitespace() -> Result<(), SyntaxError> {
        assert_eq!(parse_color("  #123  ")?.to_rgb().format(), "rgb(17 34 51)");
        check_format(&[
            ("  rgb  (  1  2  3  )  ", "rgb(1 2 3)"),
            ("  rgb  (  1 , 2 , 3  )  ", "rgb(1 2 3)"),
            ("  hsl  (  1  2%  3%  )  ", "hsl(1 2% 3%)"),
            ("  hsl  (  1 , 2% , 3%  )  ", "hsl(1 2% 3%)"),
            ("\trgb(1 2 3 / 0.5)\n", "rgb(1 2 3/0.5)"),
        ])
    }

    #[test]
    fn test_round_trip() -> Result<(), SyntaxError> {
        for literal in [
            "#123",
            "#11223344",
            "#fff0",
            "rgb(6.66% 13.33% 20%/33.3333%)",
            "rgba(255, 0, 127.5, 0.0005)",
            "hsl(+3.141592653rad 12.5% 99.5%)",
            "hsla(359.6, 40%, 30%, 0.9996)",
            "hsl(-460 50 50/2)",
            "hsl(none none none/none)",
        ] {
            let color = parse_color(literal)?;
            let reparsed = parse_color(&color.format())?;
            assert_eq!(reparsed, color, "literal {:?}", literal);
            assert_eq!(reparsed.format(), color.format(), "literal {:?}", literal);
        }
        Ok(())
    }
}

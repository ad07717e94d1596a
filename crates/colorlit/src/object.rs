use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_alpha, clamp_percent, format_hex, format_hsl, format_rgb, hsl_to_rgb, normalize_hue,
    rgb_to_hsl, to_eq_alpha, to_eq_hsl,
};
use crate::error::SyntaxError;
use crate::Float;

/// A 24-bit RGB color with alpha.
///
/// The red, green, and blue channels are `u8`, while alpha is a [`Float`]
/// `0..=1`. Constructors clamp alpha, so every value is in range once created.
/// Instances are immutable.
///
/// ```
/// # use colorlit::Rgb;
/// let sea_foam = Rgb::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// assert_eq!(sea_foam.to_string(), "rgb(182 235 212)");
/// assert_eq!(sea_foam.format_hex(), "#b6ebd4");
/// ```
///
/// # Equality Testing and Hashing
///
/// Alpha is compared and hashed at the resolution of its canonical format,
/// i.e., rounded to three decimals. As a result, a color and the color parsed
/// from its formatted string are equal.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorlit"))]
#[derive(Copy, Clone, Debug)]
pub struct Rgb {
    rgb: [u8; 3],
    alpha: Float,
}

impl Rgb {
    /// Create a new opaque RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: 1.0,
        }
    }

    /// Create a new RGB color with the given alpha, which is clamped to
    /// `0..=1`.
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: Float) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: clamp_alpha(alpha),
        }
    }

    /// Get the red channel.
    pub const fn r(&self) -> u8 {
        self.rgb[0]
    }

    /// Get the green channel.
    pub const fn g(&self) -> u8 {
        self.rgb[1]
    }

    /// Get the blue channel.
    pub const fn b(&self) -> u8 {
        self.rgb[2]
    }

    /// Get the alpha.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Format this color in canonical `rgb()` notation.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Format this color in hashed hexadecimal notation.
    ///
    /// The result always has two digits per coordinate and includes alpha
    /// only if the color is translucent, even if the color was parsed from a
    /// three or four digit literal.
    ///
    /// ```
    /// # use colorlit::{parse_color, error::SyntaxError};
    /// assert_eq!(parse_color("#123")?.to_rgb().format_hex(), "#112233");
    /// assert_eq!(parse_color("#1234")?.to_rgb().format_hex(), "#11223344");
    /// # Ok::<(), SyntaxError>(())
    /// ```
    pub fn format_hex(&self) -> String {
        format_hex(&self.rgb, self.alpha)
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        let [h, s, l] = rgb_to_hsl(&self.rgb);
        Hsl::with_alpha(h, s, l, self.alpha)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new RGB color. <i class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (r, g, b, alpha=1.0))]
    pub fn py_new(r: u8, g: u8, b: u8, alpha: Float) -> Self {
        Self::with_alpha(r, g, b, alpha)
    }

    /// Access this color's channels. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [u8; 3] {
        self.rgb
    }

    /// Get the alpha. <i class=python-only>Python only!</i>
    #[getter(alpha)]
    pub fn py_alpha(&self) -> Float {
        self.alpha
    }

    /// Format this color in hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "format_hex")]
    pub fn py_format_hex(&self) -> String {
        self.format_hex()
    }

    /// Convert this color to HSL. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hsl")]
    pub fn py_to_hsl(&self) -> Hsl {
        self.to_hsl()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!(
            "Rgb({}, {}, {}, {})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }

    /// Format this color in canonical notation. <i class=python-only>Python
    /// only!</i>
    pub fn __str__(&self) -> String {
        self.to_string()
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.rgb
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.rgb[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && to_eq_alpha(self.alpha) == to_eq_alpha(other.alpha)
    }
}

impl Eq for Rgb {}

impl Hash for Rgb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
        to_eq_alpha(self.alpha).hash(state);
    }
}

impl std::fmt::Display for Rgb {
    /// Format this color as `rgb(R G B)` or, if translucent, as `rgb(R G
    /// B/A)`. The formatter's precision determines the number of decimals
    /// for alpha, which defaults to 3.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_rgb(&self.rgb, self.alpha, f)
    }
}

// ====================================================================================================================

/// An HSL color with alpha.
///
/// Hue is in degrees `0..=360`, saturation and lightness are percentages
/// `0..=100`, and alpha is `0..=1`. Constructors wrap hue and clamp the other
/// coordinates, so every value is in range once created. A hue of exactly 360
/// is left alone. Instances are immutable.
///
/// ```
/// # use colorlit::Hsl;
/// let teal = Hsl::new(-180.0, 40.0, 130.0);
/// assert_eq!(teal.h(), 180.0);
/// assert_eq!(teal.l(), 100.0);
/// assert_eq!(teal.to_string(), "hsl(180 40% 100%)");
/// ```
///
/// # Equality Testing and Hashing
///
/// Like [`Rgb`], this struct compares and hashes coordinates at the resolution
/// of its canonical format. Hue, saturation, and lightness are rounded to
/// integers and alpha to three decimals.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "colorlit"))]
#[derive(Copy, Clone, Debug)]
pub struct Hsl {
    hsl: [Float; 3],
    alpha: Float,
}

impl Hsl {
    /// Create a new opaque HSL color.
    pub fn new(h: Float, s: Float, l: Float) -> Self {
        Self::with_alpha(h, s, l, 1.0)
    }

    /// Create a new HSL color with the given alpha.
    pub fn with_alpha(h: Float, s: Float, l: Float, alpha: Float) -> Self {
        Self {
            hsl: [normalize_hue(h), clamp_percent(s), clamp_percent(l)],
            alpha: clamp_alpha(alpha),
        }
    }

    /// Get the hue in degrees.
    pub const fn h(&self) -> Float {
        self.hsl[0]
    }

    /// Get the saturation as percentage.
    pub const fn s(&self) -> Float {
        self.hsl[1]
    }

    /// Get the lightness as percentage.
    pub const fn l(&self) -> Float {
        self.hsl[2]
    }

    /// Get the alpha.
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Format this color in canonical `hsl()` notation.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = hsl_to_rgb(&self.hsl);
        Rgb::with_alpha(r, g, b, self.alpha)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Hsl {
    /// Create a new HSL color. <i class=python-only>Python only!</i>
    #[new]
    #[pyo3(signature = (h, s, l, alpha=1.0))]
    pub fn py_new(h: Float, s: Float, l: Float, alpha: Float) -> Self {
        Self::with_alpha(h, s, l, alpha)
    }

    /// Access this color's coordinates. <i class=python-only>Python only!</i>
    pub fn coordinates(&self) -> [Float; 3] {
        self.hsl
    }

    /// Get the alpha. <i class=python-only>Python only!</i>
    #[getter(alpha)]
    pub fn py_alpha(&self) -> Float {
        self.alpha
    }

    /// Convert this color to RGB. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_rgb")]
    pub fn py_to_rgb(&self) -> Rgb {
        self.to_rgb()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!(
            "Hsl({}, {}, {}, {})",
            self.hsl[0], self.hsl[1], self.hsl[2], self.alpha
        )
    }

    /// Format this color in canonical notation. <i class=python-only>Python
    /// only!</i>
    pub fn __str__(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        to_eq_hsl(&self.hsl) == to_eq_hsl(&other.hsl)
            && to_eq_alpha(self.alpha) == to_eq_alpha(other.alpha)
    }
}

impl Eq for Hsl {}

impl Hash for Hsl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        to_eq_hsl(&self.hsl).hash(state);
        to_eq_alpha(self.alpha).hash(state);
    }
}

impl std::fmt::Display for Hsl {
    /// Format this color as `hsl(H S% L%)` or, if translucent, as `hsl(H S%
    /// L%/A)`. The formatter's precision determines the number of decimals
    /// for alpha, which defaults to 3.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hsl(&self.hsl, self.alpha, f)
    }
}

// ====================================================================================================================

/// A color parsed from a literal.
///
/// A color is either [`Rgb`] or [`Hsl`], depending on the literal it was
/// parsed from. Hashed hexadecimal literals and the `rgb()`/`rgba()` functions
/// produce RGB colors, the `hsl()`/`hsla()` functions HSL colors.
///
/// ```
/// # use colorlit::{Color, error::SyntaxError};
/// # use std::str::FromStr;
/// let color = Color::from_str("hsla(180, 40%, 30%, 0.5)")?;
/// assert_eq!(color.to_string(), "hsl(180 40% 30%/0.5)");
/// assert_eq!(color.to_rgb().to_string(), "rgb(46 107 107/0.5)");
/// # Ok::<(), SyntaxError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
}

impl Color {
    /// Format this color in canonical notation.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Get this color's alpha.
    pub fn alpha(&self) -> Float {
        match *self {
            Self::Rgb(ref c) => c.alpha(),
            Self::Hsl(ref c) => c.alpha(),
        }
    }

    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb(c) => c,
            Self::Hsl(ref c) => c.to_rgb(),
        }
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        match *self {
            Self::Rgb(ref c) => c.to_hsl(),
            Self::Hsl(c) => c,
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl FromStr for Color {
    type Err = SyntaxError;

    /// Instantiate a color from its string representation.
    ///
    /// See [`parse_color`](crate::parse_color) for the accepted notations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = SyntaxError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = SyntaxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl std::fmt::Display for Color {
    /// Format this color in canonical notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Rgb(ref c) => std::fmt::Display::fmt(c, f),
            Self::Hsl(ref c) => std::fmt::Display::fmt(c, f),
        }
    }
}

// ====================================================================================================================

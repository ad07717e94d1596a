//! Evaluation of color components into normalized quantities.
//!
//! Every function in this module is pure. Each one accepts the components
//! valid for its position and rejects the others with
//! [`SyntaxError::MalformedComponent`]. Channels, saturation, lightness, and
//! alpha saturate at their bounds, whereas hue wraps around.

use crate::error::SyntaxError;
use crate::Float;

/// A parsed but not yet evaluated color component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Component {
    /// A number without unit.
    Number(Float),
    /// A percentage, still scaled `0..=100`.
    Percentage(Float),
    /// An angle, already converted to degrees but not yet wrapped.
    Angle(Float),
    /// The `none` keyword.
    None,
}

/// The units for angles besides bare numbers and percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AngleUnit {
    Degree,
    Radian,
    Gradian,
    Turn,
}

const ANGLE_UNITS: [(&str, AngleUnit); 4] = [
    ("deg", AngleUnit::Degree),
    ("rad", AngleUnit::Radian),
    ("grad", AngleUnit::Gradian),
    ("turn", AngleUnit::Turn),
];

impl AngleUnit {
    /// Look up the angle unit with the given lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        ANGLE_UNITS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, unit)| *unit)
    }

    /// Determine how many degrees one of this unit is.
    pub fn degrees_per_unit(&self) -> Float {
        match *self {
            Self::Degree => 1.0,
            Self::Radian => (180.0 / std::f64::consts::PI) as Float,
            Self::Gradian => 0.9,
            Self::Turn => 360.0,
        }
    }

    /// Convert the given quantity in this unit to degrees.
    #[inline]
    pub fn to_degrees(&self, value: Float) -> Float {
        value * self.degrees_per_unit()
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Wrap the hue into `0..=360`.
///
/// Hues already in range are left alone, which preserves a full turn of
/// exactly 360 degrees. All other hues are reduced with the Euclidean
/// remainder, which also turns negative hues positive. Non-finite hues
/// become zero.
pub(crate) fn normalize_hue(degrees: Float) -> Float {
    if !degrees.is_finite() {
        0.0
    } else if (0.0..=360.0).contains(&degrees) {
        degrees
    } else {
        // Adding zero turns a negative zero positive.
        degrees.rem_euclid(360.0) + 0.0
    }
}

/// Clamp a channel to `0..=255` after rounding to the nearest integer.
/// Not-a-number becomes zero.
#[inline]
pub(crate) fn clamp_channel(value: Float) -> u8 {
    // Float to integer casts saturate and map NaN to zero.
    value.round().clamp(0.0, 255.0) as u8
}

/// Clamp a percentage to `0..=100`. Not-a-number becomes zero.
#[inline]
pub(crate) fn clamp_percent(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Clamp an alpha to `0..=1`. Not-a-number becomes zero.
#[inline]
pub(crate) fn clamp_alpha(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Evaluate an RGB channel. Numbers are channel values, percentages scale
/// `0..=255`, and `none` is zero.
pub(crate) fn to_channel(component: Component) -> Result<u8, SyntaxError> {
    match component {
        Component::Number(n) => Ok(clamp_channel(n)),
        Component::Percentage(p) => Ok(clamp_channel(p / 100.0 * 255.0)),
        Component::None => Ok(0),
        Component::Angle(_) => Err(SyntaxError::MalformedComponent),
    }
}

/// Evaluate a hue in degrees. Numbers are degrees, percentages are fractions
/// of a full turn, and `none` is zero.
pub(crate) fn to_hue(component: Component) -> Result<Float, SyntaxError> {
    let degrees = match component {
        Component::Number(n) | Component::Angle(n) => n,
        Component::Percentage(p) => p / 100.0 * 360.0,
        Component::None => 0.0,
    };

    Ok(normalize_hue(degrees))
}

/// Evaluate saturation or lightness as percentage. Numbers and percentages
/// are the same and `none` is zero.
pub(crate) fn to_percent(component: Component) -> Result<Float, SyntaxError> {
    match component {
        Component::Number(n) | Component::Percentage(n) => Ok(clamp_percent(n)),
        Component::None => Ok(0.0),
        Component::Angle(_) => Err(SyntaxError::MalformedComponent),
    }
}

/// Evaluate an alpha. Numbers are alphas, percentages scale `0..=1`, and
/// `none` leaves the color opaque.
pub(crate) fn to_alpha(component: Component) -> Result<Float, SyntaxError> {
    match component {
        Component::Number(n) => Ok(clamp_alpha(n)),
        Component::Percentage(p) => Ok(clamp_alpha(p / 100.0)),
        Component::None => Ok(1.0),
        Component::Angle(_) => Err(SyntaxError::MalformedComponent),
    }
}

// ====================================================================================================================

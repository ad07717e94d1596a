use std::fmt::{Formatter, Result};

use super::{is_opaque, to_eq_hsl, ALPHA_PRECISION};
use crate::Float;

/// The largest number of decimals for alpha. It keeps the scale factor
/// finite for any formatter precision.
const MAX_ALPHA_PRECISION: usize = 15;

/// Format the alpha clause including its `/` divider, unless the alpha is
/// opaque at the effective precision.
///
/// This function respects the formatter's precision, defaulting to
/// [`ALPHA_PRECISION`] and capped at [`MAX_ALPHA_PRECISION`] digits past the
/// decimal. CSS mandates no trailing zeros, which rounding avoids for the
/// most part. If the fractional part is zero, the alpha is formatted with an
/// explicit precision of zero.
fn format_alpha(alpha: Float, f: &mut Formatter<'_>) -> Result {
    let precision = f
        .precision()
        .unwrap_or(ALPHA_PRECISION)
        .min(MAX_ALPHA_PRECISION);
    let factor = (10.0 as Float).powi(precision as i32);
    let a = (alpha * factor).round() / factor;
    if 1.0 <= a {
        return Ok(());
    }

    if a == a.trunc() {
        f.write_fmt(format_args!("/{:.0}", a))
    } else {
        f.write_fmt(format_args!("/{}", a))
    }
}

/// Format the 24-bit RGB color with alpha in canonical form, e.g.,
/// `rgb(17 34 51)` or `rgb(17 34 51/0.5)`.
pub(crate) fn format_rgb(rgb: &[u8; 3], alpha: Float, f: &mut Formatter<'_>) -> Result {
    let [r, g, b] = *rgb;
    f.write_fmt(format_args!("rgb({} {} {}", r, g, b))?;
    format_alpha(alpha, f)?;
    f.write_str(")")
}

/// Format the HSL color with alpha in canonical form, e.g., `hsl(180 10%
/// 20%)` or `hsl(180 10% 20%/0.5)`. Hue, saturation, and lightness are
/// rounded to integers.
pub(crate) fn format_hsl(hsl: &[Float; 3], alpha: Float, f: &mut Formatter<'_>) -> Result {
    let [h, s, l] = to_eq_hsl(hsl);
    f.write_fmt(format_args!("hsl({} {}% {}%", h, s, l))?;
    format_alpha(alpha, f)?;
    f.write_str(")")
}

/// Format the 24-bit RGB color with alpha in hashed hexadecimal notation.
///
/// The result always uses two digits per coordinate, i.e., `#rrggbb` for
/// opaque colors and `#rrggbbaa` for all others. Opacity is determined at
/// the same resolution as for the canonical `rgb()` form, so an alpha that
/// is translucent there but rounds to `ff` as a byte still gets its `ff`.
pub(crate) fn format_hex(rgb: &[u8; 3], alpha: Float) -> String {
    let [r, g, b] = *rgb;
    let a = (alpha * 255.0).round() as u8;
    if is_opaque(alpha) {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

use super::clamp_channel;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to unit range.
#[inline]
pub(crate) fn from_24bit(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert unit range RGB coordinates to 24-bit representation, rounding to
/// the nearest integer and clamping to `0x00..=0xff`.
#[inline]
pub(crate) fn to_24bit(rgb: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *rgb;
    [
        clamp_channel(r * 255.0),
        clamp_channel(g * 255.0),
        clamp_channel(b * 255.0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB coordinates to HSL coordinates.
///
/// The resulting hue is in degrees `0..360`, whereas saturation and lightness
/// are percentages `0..=100`. Achromatic colors have zero hue and saturation.
pub(crate) fn rgb_to_hsl(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;
    let chroma = max - min;

    if chroma == 0.0 {
        return [0.0, 0.0, lightness * 100.0];
    }

    let saturation = chroma / (1.0 - (2.0 * lightness - 1.0).abs());
    let sector = if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    [sector * 60.0, saturation * 100.0, lightness * 100.0]
}

/// Convert HSL coordinates to 24-bit RGB coordinates.
///
/// This function expects the hue in degrees and saturation as well as
/// lightness as percentages. It determines chroma from saturation and
/// lightness, places the color in one of six 60º hue sectors, and then
/// lifts all three channels by the same amount to match lightness.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    let [hue, saturation, lightness] = *hsl;
    let saturation = saturation / 100.0;
    let lightness = lightness / 100.0;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    to_24bit(&[r + m, g + m, b + m])
}

// ====================================================================================================================

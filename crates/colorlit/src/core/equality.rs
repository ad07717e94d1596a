use crate::Float;

/// The number of decimals that alpha values retain in canonical form.
pub(crate) const ALPHA_PRECISION: usize = 3;

const ALPHA_SCALE: Float = 1_000.0;

/// Normalize the alpha for equality testing and hashing.
///
/// This function scales the alpha by 10<sup>[`ALPHA_PRECISION`]</sup> and
/// rounds the result, which drops exactly the digits that canonical formatting
/// drops, too. That way, reparsing a formatted color produces an equal color.
#[inline]
pub(crate) fn to_eq_alpha(alpha: Float) -> u16 {
    (alpha * ALPHA_SCALE).round() as u16
}

/// Determine whether the alpha is opaque at canonical resolution.
#[inline]
pub(crate) fn is_opaque(alpha: Float) -> bool {
    to_eq_alpha(alpha) == ALPHA_SCALE as u16
}

/// Normalize HSL coordinates for equality testing, hashing, and formatting by
/// rounding each to the nearest integer. Since hue has been wrapped and the
/// other coordinates have been clamped, the conversion to `u16` is lossless.
#[inline]
pub(crate) fn to_eq_hsl(hsl: &[Float; 3]) -> [u16; 3] {
    let [h, s, l] = *hsl;
    [h.round() as u16, s.round() as u16, l.round() as u16]
}

#[cfg(test)]
mod test {
    use super::{is_opaque, to_eq_alpha, to_eq_hsl};

    #[test]
    fn test_alpha() {
        assert_eq!(to_eq_alpha(0.5), 500);
        assert_eq!(to_eq_alpha(68.0 / 255.0), 267);
        assert_eq!(to_eq_alpha(0.267), 267);
        assert_eq!(to_eq_alpha(0.0), 0);
        assert!(is_opaque(1.0));
        assert!(is_opaque(0.9996));
        assert!(!is_opaque(0.999));
    }

    #[test]
    fn test_hsl() {
        assert_eq!(to_eq_hsl(&[179.99999997, 10.4, 19.5]), [180, 10, 20]);
        assert_eq!(to_eq_hsl(&[-0.0, 0.0, 100.0]), [0, 0, 100]);
        assert_eq!(to_eq_hsl(&[359.6, 100.0, 0.0]), [360, 100, 0]);
    }
}

mod conversion;
mod equality;
mod parse;
mod scan;
mod string;
mod unit;

// conversion
pub(crate) use conversion::{hsl_to_rgb, rgb_to_hsl};

// equality
pub(crate) use equality::{is_opaque, to_eq_alpha, to_eq_hsl, ALPHA_PRECISION};

// parse
pub(crate) use parse::parse;

// string
pub(crate) use string::{format_hex, format_hsl, format_rgb};

// unit
pub(crate) use unit::{clamp_alpha, clamp_channel, clamp_percent, normalize_hue};

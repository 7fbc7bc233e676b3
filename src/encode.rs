//! Quantization of sRGB colors and their `#RRGGBB` encoding.
//!
//! Channels are clamped to \[0, 1\] (out-of-gamut excursions of a
//! perceptual interpolation are clipped silently), multiplied by 255
//! and rounded half away from zero, so that 127.5 becomes 128.

use rgb::RGB8;

use crate::error::{Result, SpecDefect};

/// Quantize a color of gamma-encoded sRGB to 8 bits per channel.
/// NaN channels give 0.
#[inline]
pub fn quantize(c: [f64; 3]) -> RGB8 {
    #[inline]
    fn channel(x: f64) -> u8 { (x.clamp(0., 1.) * 255.).round() as u8 }
    RGB8 { r: channel(c[0]), g: channel(c[1]), b: channel(c[2]) }
}

/// The `#RRGGBB` form of `c`, with uppercase digits.
pub fn hex(c: RGB8) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
}

/// Quantize and encode sRGB colors.
///
/// # Example
///
/// ```
/// let hex = color_ramp::encode(&[[0., 0.5, 1.], [1.2, -0.3, 0.04]]);
/// assert_eq!(hex, ["#0080FF", "#FF000A"]);
/// ```
pub fn encode(colors: &[[f64; 3]]) -> Vec<String> {
    colors.iter().map(|&c| hex(quantize(c))).collect()
}

/// Parse `#RRGGBB` (the `#` is optional, digits in either case).
pub fn parse_hex(s: &str) -> Result<RGB8> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SpecDefect::MalformedHex(s.to_string()).into())
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i .. i + 2], 16)
        .map_err(|_| SpecDefect::MalformedHex(s.to_string()));
    Ok(RGB8 { r: channel(0)?, g: channel(2)?, b: channel(4)? })
}

/// Parse `#RRGGBB` into sRGB channels in \[0, 1\].
pub fn srgb_of_hex(s: &str) -> Result<[f64; 3]> {
    let c = parse_hex(s)?;
    Ok([c.r as f64 / 255., c.g as f64 / 255., c.b as f64 / 255.])
}

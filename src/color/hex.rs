//! `#RRGGBB` text form of colors, as exchanged with the preset store.

use crate::color::Rgb;

/// Error returned when a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color `{0}`, expected #RRGGBB")]
pub struct ColorParseError(pub String);

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Parse a `#RRGGBB` string. The leading `#` is optional and hex digits are
/// case-insensitive.
pub fn parse_hex(value: &str) -> Result<Rgb, ColorParseError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError(value.to_string()));
    }
    u32::from_str_radix(digits, 16)
        .map(rgb_from_u32)
        .map_err(|_| ColorParseError(value.to_string()))
}

/// Format a color as upper-case `#RRGGBB`
pub fn to_hex(color: Rgb) -> String {
    format!("#{:06X}", rgb_to_u32(color))
}

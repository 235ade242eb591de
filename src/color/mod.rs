mod hex;
mod mix;

pub use hex::{ColorParseError, parse_hex, rgb_from_u32, rgb_to_u32, to_hex};
pub use mix::{lerp_channel, lerp_colors};
use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

//! Exact integer blending shared by the preview and the emitted firmware.
//!
//! Both targets compute `(a * (den - num) + b * num) / den` with truncating
//! division. Any change here must be mirrored in `firmware::source`.

use crate::color::Rgb;

/// Blend two channels, `num / den` of the way from `a` to `b`.
///
/// `den == 0` is treated as 1 and `num` is clamped to `den`, so the result is
/// always between `a` and `b`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn lerp_channel(a: u8, b: u8, num: u32, den: u32) -> u8 {
    let den = if den == 0 { 1 } else { den };
    let num = if num > den { den } else { num };
    let mixed = (a as u64) * ((den - num) as u64) + (b as u64) * (num as u64);
    (mixed / den as u64) as u8
}

/// Blend two RGB colors channel by channel with [`lerp_channel`]
#[inline]
pub const fn lerp_colors(a: Rgb, b: Rgb, num: u32, den: u32) -> Rgb {
    Rgb {
        r: lerp_channel(a.r, b.r, num, den),
        g: lerp_channel(a.g, b.g, num, den),
        b: lerp_channel(a.b, b.b, num, den),
    }
}

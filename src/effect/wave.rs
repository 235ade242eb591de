//! Traveling wave effect

use super::Effect;
use crate::color::{Rgb, lerp_colors};

/// A window of `width` LEDs that fades from `head` to `tail` and moves one
/// LED per tick.
///
/// For LED `i` at phase `p` on a strip of `n` LEDs, `relative = (i - p) mod n`.
/// Inside the window (`relative < width`) the LED blends from `head` at the
/// leading edge towards `tail`; outside it shows `tail`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveEffect {
    head: Rgb,
    tail: Rgb,
    width: u16,
}

impl WaveEffect {
    /// Zero width is clamped to one LED
    pub fn new(head: Rgb, tail: Rgb, width: u16) -> Self {
        Self {
            head,
            tail,
            width: width.max(1),
        }
    }
}

impl Effect for WaveEffect {
    const ANIMATED: bool = true;

    fn render(&self, phase: usize, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        let phase = phase % len;
        let width = usize::from(self.width);
        let den = u32::from(self.width);

        for (i, led) in leds.iter_mut().enumerate() {
            let relative = (i + len - phase) % len;
            *led = if relative < width {
                let num = u32::try_from(relative).unwrap_or(den);
                lerp_colors(self.head, self.tail, num, den)
            } else {
                self.tail
            };
        }
    }
}

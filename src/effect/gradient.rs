//! Two-color linear gradient

use super::Effect;
use crate::color::{Rgb, lerp_colors};

/// Linear gradient from `start` on the first LED to `end` on the last.
///
/// LED `i` of `n` gets `start * (1 - t) + end * t` with `t = i / max(1, n - 1)`,
/// truncated per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientEffect {
    start: Rgb,
    end: Rgb,
}

impl GradientEffect {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }
}

impl Effect for GradientEffect {
    fn render(&self, _phase: usize, leds: &mut [Rgb]) {
        let last = u32::try_from(leds.len().saturating_sub(1)).unwrap_or(u32::MAX);
        let den = last.max(1);

        for (i, led) in leds.iter_mut().enumerate() {
            let num = u32::try_from(i).unwrap_or(u32::MAX);
            *led = lerp_colors(self.start, self.end, num, den);
        }
    }
}

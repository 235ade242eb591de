//! Solid color fill effect

use super::Effect;
use crate::color::Rgb;

/// Fills all LEDs with one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidEffect {
    color: Rgb,
}

impl SolidEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Effect for SolidEffect {
    fn render(&self, _phase: usize, leds: &mut [Rgb]) {
        leds.fill(self.color);
    }
}

//! Caller-owned animation state for the preview.
//!
//! The synthesizer is stateless; whoever drives the preview keeps one
//! `AnimationState` per running effect and threads it through every tick.

use crate::color::BLACK;
use crate::model::{EffectKind, EffectModel};
use crate::synth::{FrameBuffer, synthesize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    phase: usize,
    blink_on: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            phase: 0,
            blink_on: true,
        }
    }

    pub const fn phase(&self) -> usize {
        self.phase
    }

    pub const fn blink_on(&self) -> bool {
        self.blink_on
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Model to render for the current blink state.
    ///
    /// During the off half of a blink a solid effect shows black and a
    /// gradient runs in the opposite direction. Other models are returned
    /// unchanged.
    pub fn resolve(&self, model: &EffectModel) -> EffectModel {
        if !model.blink() || self.blink_on {
            return model.clone();
        }
        match model.kind() {
            EffectKind::Solid => model.with_colors(BLACK, model.color2()),
            EffectKind::Gradient => model.with_colors(model.color2(), model.color1()),
            _ => model.clone(),
        }
    }

    /// Frame for the current state
    pub fn frame(&self, model: &EffectModel, strip_length: usize) -> FrameBuffer {
        synthesize(&self.resolve(model), self.phase, strip_length)
    }

    /// Advance one animation tick.
    ///
    /// A wave moves one LED forward, the way the firmware loop advances its
    /// phase counter. A blinking solid or gradient toggles its blink state.
    pub fn advance(&mut self, model: &EffectModel, strip_length: usize) {
        match model.kind() {
            EffectKind::Wave => {
                self.phase = if strip_length == 0 {
                    0
                } else {
                    (self.phase + 1) % strip_length
                };
            }
            EffectKind::Solid | EffectKind::Gradient if model.blink() => {
                self.blink_on = !self.blink_on;
            }
            _ => {}
        }
    }
}

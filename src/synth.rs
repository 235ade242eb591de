//! Frame synthesis for the live preview.

use crate::color::Rgb;
use crate::effect::EffectSlot;
use crate::model::EffectModel;

/// One frame of LED colors, index 0 first
pub type FrameBuffer = Vec<Rgb>;

/// Render `model` at `phase` for a strip of `strip_length` LEDs.
///
/// Pure and total: the result has `strip_length` entries (a zero length is
/// clamped to one LED, like the emitted firmware) and unknown kinds render as
/// black. Blink
/// and phase are owned by the caller, see [`crate::animation::AnimationState`].
pub fn synthesize(model: &EffectModel, phase: usize, strip_length: usize) -> FrameBuffer {
    let mut frame = vec![Rgb::default(); strip_length.max(1)];
    render_into(model, phase, &mut frame);
    frame
}

/// Render `model` into an existing buffer, overwriting every entry
pub fn render_into(model: &EffectModel, phase: usize, leds: &mut [Rgb]) {
    EffectSlot::from_model(model).render(phase, leds);
}

//! Effect renderers with compile-time known variants
//!
//! Each effect kind implements the `Effect` trait and is dispatched through
//! the `EffectSlot` enum, so rendering a frame needs no allocation beyond
//! the frame itself.

mod gradient;
mod solid;
mod wave;

pub use gradient::GradientEffect;
pub use solid::SolidEffect;
pub use wave::WaveEffect;

use crate::color::{BLACK, Rgb};
use crate::model::{EffectKind, EffectModel};

pub trait Effect {
    /// Whether the output depends on the phase
    const ANIMATED: bool = false;

    /// Render a single frame at the given phase
    fn render(&self, phase: usize, leds: &mut [Rgb]);
}

/// Effect slot - enum containing all renderable effects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectSlot {
    /// Whole strip in one color
    Solid(SolidEffect),
    /// Linear blend from the first to the last LED
    Gradient(GradientEffect),
    /// Window of blended color traveling along the strip
    Wave(WaveEffect),
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Solid(SolidEffect::new(BLACK))
    }
}

impl EffectSlot {
    /// Build the renderer for a model.
    ///
    /// Unknown kinds render as solid black so the preview always shows a
    /// full frame.
    pub fn from_model(model: &EffectModel) -> Self {
        match model.kind() {
            EffectKind::Solid => Self::Solid(SolidEffect::new(model.color1())),
            EffectKind::Gradient => {
                Self::Gradient(GradientEffect::new(model.color1(), model.color2()))
            }
            EffectKind::Wave => Self::Wave(WaveEffect::new(
                model.color1(),
                model.color2(),
                model.wave_width(),
            )),
            EffectKind::Other(name) => {
                log::trace!("effect: unknown kind `{}`, rendering black", name);
                Self::default()
            }
        }
    }

    /// Render the current effect
    pub fn render(&self, phase: usize, leds: &mut [Rgb]) {
        match self {
            Self::Solid(effect) => effect.render(phase, leds),
            Self::Gradient(effect) => effect.render(phase, leds),
            Self::Wave(effect) => effect.render(phase, leds),
        }
    }

    /// Returns if the effect moves with the phase
    pub fn is_animated(&self) -> bool {
        match self {
            Self::Solid(_) => SolidEffect::ANIMATED,
            Self::Gradient(_) => GradientEffect::ANIMATED,
            Self::Wave(_) => WaveEffect::ANIMATED,
        }
    }
}

use crate::color::Rgb;
use crate::model::{
    DEFAULT_COLOR2, EffectKind, EffectModel, ModelError, SpeedTier, default_wave_width,
    validate_slot,
};

/// Builder for [`EffectModel`]
///
/// Optional fields fall back to their defaults in [`EffectModelBuilder::build`]:
/// blue second color, medium speed, a quarter of the strip as wave width and
/// no blinking.
#[derive(Debug, Clone)]
pub struct EffectModelBuilder {
    kind: EffectKind,
    color1: Rgb,
    color2: Option<Rgb>,
    speed: Option<SpeedTier>,
    wave_width: Option<u16>,
    blink: Option<bool>,
    slot_id: Option<i64>,
    label: Option<String>,
}

impl EffectModelBuilder {
    pub const fn new(kind: EffectKind, color1: Rgb) -> Self {
        Self {
            kind,
            color1,
            color2: None,
            speed: None,
            wave_width: None,
            blink: None,
            slot_id: None,
            label: None,
        }
    }

    #[must_use]
    pub const fn color2(mut self, color: Rgb) -> Self {
        self.color2 = Some(color);
        self
    }

    #[must_use]
    pub const fn speed(mut self, speed: SpeedTier) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub const fn wave_width(mut self, width: u16) -> Self {
        self.wave_width = Some(width);
        self
    }

    #[must_use]
    pub const fn blink(mut self, blink: bool) -> Self {
        self.blink = Some(blink);
        self
    }

    #[must_use]
    pub const fn slot_id(mut self, slot_id: i64) -> Self {
        self.slot_id = Some(slot_id);
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Fill in defaults for a strip of `strip_length` LEDs and validate.
    ///
    /// The kind is taken as given, including [`EffectKind::Other`]; rejecting
    /// unknown kinds is the job of the wire boundary and the emitter.
    pub fn build(self, strip_length: usize) -> Result<EffectModel, ModelError> {
        let slot_id = self.slot_id.map(validate_slot).transpose()?;

        Ok(EffectModel {
            kind: self.kind,
            color1: self.color1,
            color2: self.color2.unwrap_or(DEFAULT_COLOR2),
            speed: self.speed.unwrap_or_default(),
            wave_width: self
                .wave_width
                .unwrap_or_else(|| default_wave_width(strip_length)),
            blink: self.blink.unwrap_or(false),
            slot_id,
            label: self.label,
        })
    }
}

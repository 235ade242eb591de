//! Effect model: the validated description of one lighting effect.
//!
//! Models are built once at the boundary, either from an
//! [`EffectDocument`] (wire form) or through [`EffectModelBuilder`], and are
//! read-only afterwards. Renderers take them by reference.

mod builder;
mod document;
mod error;
mod kind;
mod speed;

pub use builder::EffectModelBuilder;
pub use document::EffectDocument;
pub use error::ModelError;
pub use kind::EffectKind;
pub(crate) use kind::{KIND_CODE_GRADIENT, KIND_CODE_SOLID, KIND_CODE_WAVE};
pub use speed::SpeedTier;

use crate::color::{BLACK, BLUE, Rgb};

/// Number of calendar slots a model can belong to
pub const SLOT_COUNT: usize = 12;

/// Default second color when none is given
pub const DEFAULT_COLOR2: Rgb = BLUE;

/// Default wave width for a strip: a quarter of its length
#[allow(clippy::cast_possible_truncation)]
pub const fn default_wave_width(strip_length: usize) -> u16 {
    let width = strip_length / 4;
    if width > u16::MAX as usize {
        u16::MAX
    } else {
        width as u16
    }
}

/// Check that a slot id is within `1..=SLOT_COUNT`
pub fn validate_slot(slot_id: i64) -> Result<u8, ModelError> {
    u8::try_from(slot_id)
        .ok()
        .filter(|slot| (1..=SLOT_COUNT).contains(&usize::from(*slot)))
        .ok_or(ModelError::SlotOutOfRange(slot_id))
}

/// Immutable description of one effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectModel {
    pub(crate) kind: EffectKind,
    pub(crate) color1: Rgb,
    pub(crate) color2: Rgb,
    pub(crate) speed: SpeedTier,
    pub(crate) wave_width: u16,
    pub(crate) blink: bool,
    pub(crate) slot_id: Option<u8>,
    pub(crate) label: Option<String>,
}

impl EffectModel {
    /// Start building a model from its required fields
    pub fn builder(kind: EffectKind, color1: Rgb) -> EffectModelBuilder {
        EffectModelBuilder::new(kind, color1)
    }

    /// Solid black, medium speed. Emitted when there is nothing else to run.
    pub fn inert() -> Self {
        Self {
            kind: EffectKind::Solid,
            color1: BLACK,
            color2: BLACK,
            speed: SpeedTier::default(),
            wave_width: 0,
            blink: false,
            slot_id: None,
            label: None,
        }
    }

    pub fn kind(&self) -> &EffectKind {
        &self.kind
    }

    pub const fn color1(&self) -> Rgb {
        self.color1
    }

    pub const fn color2(&self) -> Rgb {
        self.color2
    }

    pub const fn speed(&self) -> SpeedTier {
        self.speed
    }

    /// Tick period of the effect in milliseconds
    pub const fn period_ms(&self) -> u16 {
        self.speed.period_ms()
    }

    /// Wave width as stored. Renderers clamp zero to one.
    pub const fn wave_width(&self) -> u16 {
        self.wave_width
    }

    pub const fn blink(&self) -> bool {
        self.blink
    }

    pub const fn slot_id(&self) -> Option<u8> {
        self.slot_id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Copy of this model with both colors replaced.
    ///
    /// Used by callers that resolve blink state before rendering.
    #[must_use]
    pub fn with_colors(&self, color1: Rgb, color2: Rgb) -> Self {
        Self {
            color1,
            color2,
            ..self.clone()
        }
    }

    /// Copy of this model owned by the given slot
    pub(crate) fn with_slot(&self, slot_id: u8) -> Self {
        Self {
            slot_id: Some(slot_id),
            ..self.clone()
        }
    }
}

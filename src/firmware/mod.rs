//! Firmware emission
//!
//! Translates a list of effect models into a self-contained `FastLED` sketch
//! that plays them with integer-only arithmetic. The sketch computes exactly
//! the frames [`crate::synth::synthesize`] produces for the same model and
//! phase.

mod descriptor;
mod simulator;
mod source;

pub use descriptor::{DescriptorTable, EffectDescriptor, MAX_EFFECTS};
pub use simulator::FirmwareSimulator;

use crate::config::{ConfigError, FirmwareConfig, ForgeConfig};
use crate::model::EffectModel;

/// Size of the firmware's command line buffer, terminator included
pub const COMMAND_CAPACITY: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("unknown effect kind `{kind}` in row {index}")]
    UnknownEffectKind { index: usize, kind: String },

    #[error("{0} effects exceed the {max} rows the selector can address", max = MAX_EFFECTS)]
    TooManyEffects(usize),

    #[error("invalid firmware config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to format firmware source")]
    Format(#[from] core::fmt::Error),
}

/// Emits firmware source for one strip configuration
#[derive(Debug, Clone)]
pub struct FirmwareEmitter {
    strip_length: u16,
    config: FirmwareConfig,
}

impl FirmwareEmitter {
    /// Create an emitter for a strip of `total_leds` LEDs.
    ///
    /// A zero-length strip is clamped to one LED.
    pub fn new(total_leds: u16, config: FirmwareConfig) -> Self {
        if total_leds == 0 {
            log::warn!("firmware: strip length 0 clamped to 1");
        }
        Self {
            strip_length: total_leds.max(1),
            config,
        }
    }

    pub fn from_config(config: &ForgeConfig) -> Self {
        Self::new(config.total_leds, config.firmware.clone())
    }

    pub const fn strip_length(&self) -> u16 {
        self.strip_length
    }

    /// Build the descriptor table the sketch is generated from
    pub fn table(&self, models: &[EffectModel]) -> Result<DescriptorTable, EmitError> {
        DescriptorTable::from_models(models)
    }

    /// Emit the sketch for `models`, in order.
    ///
    /// An empty list emits a single inert solid black effect. Fails without
    /// producing any text if a model has an unknown kind.
    pub fn emit(&self, models: &[EffectModel]) -> Result<String, EmitError> {
        self.config.validate()?;
        let table = self.table(models)?;
        log::debug!(
            "firmware: emitting {} effect rows for {} leds on {} ports",
            table.len(),
            self.strip_length,
            self.config.data_pins.len()
        );
        Ok(source::render(&table, self.strip_length, &self.config)?)
    }

    /// Host-side interpreter of the sketch emitted for `models`
    pub fn simulator(&self, models: &[EffectModel]) -> Result<FirmwareSimulator, EmitError> {
        Ok(FirmwareSimulator::new(self.table(models)?, self.strip_length))
    }
}

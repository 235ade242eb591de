pub mod animation;
pub mod bounds;
pub mod color;
pub mod config;
pub mod control;
pub mod effect;
pub mod firmware;
pub mod frame_scheduler;
pub mod model;
pub mod monitor;
pub mod preset;
pub mod synth;

mod json_file;

pub use animation::AnimationState;
pub use bounds::{LedSpan, LetterSpans};
pub use config::{ConfigError, FirmwareConfig, ForgeConfig, MonitorConfig};
pub use effect::EffectSlot;
pub use firmware::{DescriptorTable, EffectDescriptor, EmitError, FirmwareEmitter, FirmwareSimulator};
pub use frame_scheduler::{FrameResult, PreviewScheduler};
pub use model::{EffectDocument, EffectKind, EffectModel, EffectModelBuilder, ModelError, SpeedTier};
pub use monitor::{ConnectivityMonitor, MonitorControl, MonitorEvent, PortProbe, ProbeError};
pub use preset::{Preset, PresetError, PresetStore};
pub use synth::{FrameBuffer, synthesize};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED output
///
/// Implement this trait to show preview frames on a widget, a terminal or
/// real hardware. The preview scheduler is generic over it.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

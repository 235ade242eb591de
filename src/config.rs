//! Application configuration
//!
//! Stored as JSON next to the presets. Every level has defaults, so a partial
//! file (or none at all) yields a usable configuration.

use std::path::Path;

use embassy_time::Duration;
use serde::{Deserialize, Serialize};

use crate::bounds::{LedSpan, LetterSpans};
use crate::json_file::{read_json, write_json};

pub const DEFAULT_TOTAL_LEDS: u16 = 70;
pub const DEFAULT_DATA_PINS: [u8; 6] = [2, 3, 4, 5, 6, 7];
pub const DEFAULT_CHIPSET: &str = "WS2812B";
pub const DEFAULT_COLOR_ORDER: &str = "GRB";
pub const DEFAULT_BAUD_RATE: u32 = 9600;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Letters of the sign and the LEDs behind each, in strip order
const DEFAULT_LETTERS: [(&str, u16, u16); 8] = [
    ("P", 0, 6),
    ("H", 7, 13),
    ("O", 14, 20),
    ("N", 21, 27),
    ("E", 28, 34),
    ("A", 35, 41),
    ("I", 42, 48),
    ("D", 49, 55),
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("strip must have at least one LED")]
    EmptyStrip,

    #[error("no data pins configured")]
    NoDataPins,

    #[error("letter `{letter}` span {start}..={end} exceeds a strip of {total_leds} LEDs")]
    SpanOutOfRange {
        letter: String,
        start: u16,
        end: u16,
        total_leds: u16,
    },

    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Number of LEDs on the strip (and on every output port)
    pub total_leds: u16,
    /// LEDs behind each letter of the sign in strip order, used by the
    /// preview overlay
    pub letters: LetterSpans,
    pub firmware: FirmwareConfig,
    pub monitor: MonitorConfig,
}

/// Settings baked into the emitted firmware
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirmwareConfig {
    /// One data pin per physical output port
    pub data_pins: Vec<u8>,
    /// `FastLED` chipset identifier
    pub chipset: String,
    /// `FastLED` color order identifier
    pub color_order: String,
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Baud rate of the control channel
    pub baud_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub poll_interval_ms: u64,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            total_leds: DEFAULT_TOTAL_LEDS,
            letters: DEFAULT_LETTERS
                .iter()
                .map(|&(letter, start, end)| (letter.to_string(), LedSpan::new(start, end)))
                .collect(),
            firmware: FirmwareConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            data_pins: DEFAULT_DATA_PINS.to_vec(),
            chipset: DEFAULT_CHIPSET.to_string(),
            color_order: DEFAULT_COLOR_ORDER.to_string(),
            brightness: u8::MAX,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl ForgeConfig {
    /// Parse a config document. Letter keys are normalised to upper case.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.normalize_letters();
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load the config file. A missing or empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("config: loading from {:?}", path);
        let Some(mut config) = read_json::<Self, ConfigError>(path)? else {
            log::info!("config: {:?} not found, using defaults", path);
            return Ok(Self::default());
        };
        config.normalize_letters();
        Ok(config)
    }

    /// Like [`ForgeConfig::load`], but falls back to the defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("config: {}, using defaults", e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        log::info!("config: saving to {:?}", path);
        write_json::<Self, ConfigError>(self, path)
    }

    /// Strip length as used by the renderers
    pub fn strip_length(&self) -> usize {
        usize::from(self.total_leds)
    }

    /// Check the config can drive both the preview and the firmware
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_leds == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        for (letter, span) in self.letters.iter() {
            if !span.fits(self.strip_length()) {
                return Err(ConfigError::SpanOutOfRange {
                    letter: letter.to_string(),
                    start: span.start,
                    end: span.end,
                    total_leds: self.total_leds,
                });
            }
        }
        self.firmware.validate()
    }

    fn normalize_letters(&mut self) {
        let letters = core::mem::take(&mut self.letters);
        self.letters = letters
            .iter()
            .map(|(letter, span)| (letter.to_uppercase(), span))
            .collect();
    }
}

impl FirmwareConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_pins.is_empty() {
            return Err(ConfigError::NoDataPins);
        }
        for ident in [&self.chipset, &self.color_order] {
            if !is_identifier(ident) {
                return Err(ConfigError::InvalidIdentifier(ident.clone()));
            }
        }
        Ok(())
    }
}

/// C identifier check, so config values can be pasted into template
/// arguments verbatim
fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

use core::fmt;

use embassy_time::Duration;

const SPEED_NAME_SLOW: &str = "slow";
const SPEED_NAME_MEDIUM: &str = "medium";
const SPEED_NAME_FAST: &str = "fast";
const SPEED_NAME_TURBO: &str = "turbo";

const LEGACY_NAME_SLOW: &str = "lento";
const LEGACY_NAME_MEDIUM: &str = "médio";
const LEGACY_NAME_FAST: &str = "rápido";

const PERIOD_MS_SLOW: u16 = 300;
const PERIOD_MS_MEDIUM: u16 = 150;
const PERIOD_MS_FAST: u16 = 70;
const PERIOD_MS_TURBO: u16 = 30;

/// Animation speed, mapped to a fixed tick period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedTier {
    Slow,
    #[default]
    Medium,
    Fast,
    Turbo,
}

impl SpeedTier {
    pub const ALL: [Self; 4] = [Self::Slow, Self::Medium, Self::Fast, Self::Turbo];

    /// Tick period in milliseconds
    pub const fn period_ms(self) -> u16 {
        match self {
            Self::Slow => PERIOD_MS_SLOW,
            Self::Medium => PERIOD_MS_MEDIUM,
            Self::Fast => PERIOD_MS_FAST,
            Self::Turbo => PERIOD_MS_TURBO,
        }
    }

    #[allow(clippy::cast_lossless)]
    pub const fn period(self) -> Duration {
        Duration::from_millis(self.period_ms() as u64)
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            SPEED_NAME_SLOW | LEGACY_NAME_SLOW => Some(Self::Slow),
            SPEED_NAME_MEDIUM | LEGACY_NAME_MEDIUM => Some(Self::Medium),
            SPEED_NAME_FAST | LEGACY_NAME_FAST => Some(Self::Fast),
            SPEED_NAME_TURBO => Some(Self::Turbo),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slow => SPEED_NAME_SLOW,
            Self::Medium => SPEED_NAME_MEDIUM,
            Self::Fast => SPEED_NAME_FAST,
            Self::Turbo => SPEED_NAME_TURBO,
        }
    }
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use core::fmt;

const KIND_NAME_SOLID: &str = "solid";
const KIND_NAME_GRADIENT: &str = "gradient";
const KIND_NAME_WAVE: &str = "wave";

// Labels used by presets saved before the wire names were normalised
const LEGACY_NAME_SOLID: &str = "cor sólida";
const LEGACY_NAME_GRADIENT: &str = "gradiente";
const LEGACY_NAME_WAVE: &str = "onda";

pub(crate) const KIND_CODE_SOLID: u8 = 0;
pub(crate) const KIND_CODE_GRADIENT: u8 = 1;
pub(crate) const KIND_CODE_WAVE: u8 = 2;

/// Kind of lighting effect.
///
/// `Other` keeps an unrecognised name so that each renderer can apply its
/// own policy: the preview falls back to black, the emitter refuses it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EffectKind {
    #[default]
    Solid,
    Gradient,
    Wave,
    Other(String),
}

impl EffectKind {
    /// Parse a kind name, keeping unknown names as [`EffectKind::Other`]
    pub fn parse(name: &str) -> Self {
        Self::parse_known(name).unwrap_or_else(|| Self::Other(name.trim().to_string()))
    }

    /// Parse a kind name, returning `None` for unknown names
    pub fn parse_known(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            KIND_NAME_SOLID | LEGACY_NAME_SOLID => Some(Self::Solid),
            KIND_NAME_GRADIENT | LEGACY_NAME_GRADIENT => Some(Self::Gradient),
            KIND_NAME_WAVE | LEGACY_NAME_WAVE => Some(Self::Wave),
            _ => None,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            KIND_CODE_SOLID => Self::Solid,
            KIND_CODE_GRADIENT => Self::Gradient,
            KIND_CODE_WAVE => Self::Wave,
            _ => return None,
        })
    }

    /// Numeric code used in the firmware descriptor table
    pub const fn code(&self) -> Option<u8> {
        match self {
            Self::Solid => Some(KIND_CODE_SOLID),
            Self::Gradient => Some(KIND_CODE_GRADIENT),
            Self::Wave => Some(KIND_CODE_WAVE),
            Self::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Solid => KIND_NAME_SOLID,
            Self::Gradient => KIND_NAME_GRADIENT,
            Self::Wave => KIND_NAME_WAVE,
            Self::Other(name) => name,
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

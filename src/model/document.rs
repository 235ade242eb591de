//! Wire form of an effect model.
//!
//! ```json
//! {"kind": "wave", "color1": "#FF0000", "color2": "#0000FF",
//!  "speed": "fast", "wave_width": 8, "blink": false, "slot_id": 3}
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{parse_hex, to_hex};
use crate::model::{EffectKind, EffectModel, EffectModelBuilder, ModelError, SpeedTier};

/// Loosely typed effect mapping as stored by the preset store.
///
/// Every field is optional here; [`EffectDocument::into_model`] decides what
/// is required. Keys of presets written by the first version of the editor
/// are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectDocument {
    #[serde(alias = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color2: Option<String>,

    #[serde(alias = "velocidade", skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    /// Signed so that negative widths reach the clamp instead of failing
    /// deserialization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wave_width: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blink: Option<bool>,

    #[serde(alias = "mes", skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<i64>,

    #[serde(alias = "nome_mes", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl EffectDocument {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Canonical document for a model
    pub fn from_model(model: &EffectModel) -> Self {
        Self {
            kind: Some(model.kind().as_str().to_string()),
            color1: Some(to_hex(model.color1())),
            color2: Some(to_hex(model.color2())),
            speed: Some(model.speed().as_str().to_string()),
            wave_width: Some(i64::from(model.wave_width())),
            blink: Some(model.blink()),
            slot_id: model.slot_id().map(i64::from),
            label: model.label().map(str::to_string),
        }
    }

    /// Validate the document and build a model for a strip of
    /// `strip_length` LEDs.
    ///
    /// `kind` and `color1` are required; an unknown kind is rejected.
    pub fn into_model(self, strip_length: usize) -> Result<EffectModel, ModelError> {
        let kind_name = self.kind.ok_or(ModelError::MissingField("kind"))?;
        let Some(kind) = EffectKind::parse_known(&kind_name) else {
            return Err(ModelError::UnknownKind(kind_name));
        };

        let color1 = self.color1.ok_or(ModelError::MissingField("color1"))?;
        let color1 = parse_hex(&color1).map_err(|source| ModelError::InvalidColor {
            field: "color1",
            source,
        })?;

        let mut builder = EffectModelBuilder::new(kind, color1);

        if let Some(color2) = self.color2 {
            let color2 = parse_hex(&color2).map_err(|source| ModelError::InvalidColor {
                field: "color2",
                source,
            })?;
            builder = builder.color2(color2);
        }
        if let Some(speed) = self.speed {
            let tier = SpeedTier::parse(&speed).ok_or(ModelError::UnknownSpeed(speed))?;
            builder = builder.speed(tier);
        }
        if let Some(width) = self.wave_width {
            builder = builder.wave_width(clamp_wave_width(width));
        }
        if let Some(blink) = self.blink {
            builder = builder.blink(blink);
        }
        if let Some(slot_id) = self.slot_id {
            builder = builder.slot_id(slot_id);
        }
        if let Some(label) = self.label {
            builder = builder.label(label);
        }

        builder.build(strip_length)
    }
}

/// Negative widths become zero, which renderers then treat as one
fn clamp_wave_width(width: i64) -> u16 {
    u16::try_from(width.max(0)).unwrap_or(u16::MAX)
}

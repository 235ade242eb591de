use crate::color::Rgb;
use crate::firmware::EmitError;
use crate::model::{EffectModel, SLOT_COUNT};
use crate::preset::MONTHS;

/// Rows addressable by the sketch's `uint8_t` selector
pub const MAX_EFFECTS: usize = 256;

const DEFAULT_ROW_NAME: &str = "Default";

/// One row of the sketch's effect table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectDescriptor {
    pub name: String,
    pub kind_code: u8,
    pub color1: Rgb,
    pub color2: Rgb,
    pub period_ms: u16,
    pub wave_width: u16,
}

impl EffectDescriptor {
    fn from_model(index: usize, model: &EffectModel) -> Result<Self, EmitError> {
        let kind_code = model
            .kind()
            .code()
            .ok_or_else(|| EmitError::UnknownEffectKind {
                index,
                kind: model.kind().as_str().to_string(),
            })?;

        Ok(Self {
            name: row_name(index, model),
            kind_code,
            color1: model.color1(),
            color2: model.color2(),
            period_ms: model.period_ms(),
            wave_width: model.wave_width(),
        })
    }

    fn inert() -> Self {
        let model = EffectModel::inert();
        Self {
            name: DEFAULT_ROW_NAME.to_string(),
            kind_code: model.kind().code().unwrap_or_default(),
            color1: model.color1(),
            color2: model.color2(),
            period_ms: model.period_ms(),
            wave_width: model.wave_width(),
        }
    }

    /// Wave width as the sketch uses it
    pub fn effective_wave_width(&self) -> u16 {
        self.wave_width.max(1)
    }
}

/// Label, else the owning slot's month, else the row position
fn row_name(index: usize, model: &EffectModel) -> String {
    if let Some(label) = model.label() {
        return label.to_string();
    }
    model
        .slot_id()
        .map(usize::from)
        .filter(|slot| (1..=SLOT_COUNT).contains(slot))
        .map(|slot| MONTHS[slot - 1].to_string())
        .unwrap_or_else(|| format!("Effect {}", index))
}

/// Ordered effect table, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorTable {
    rows: Vec<EffectDescriptor>,
}

impl DescriptorTable {
    /// One row per model in input order, or a single inert row for an empty
    /// list
    pub fn from_models(models: &[EffectModel]) -> Result<Self, EmitError> {
        if models.len() > MAX_EFFECTS {
            return Err(EmitError::TooManyEffects(models.len()));
        }
        if models.is_empty() {
            log::warn!("firmware: no effects given, emitting inert default row");
            return Ok(Self {
                rows: vec![EffectDescriptor::inert()],
            });
        }

        let rows = models
            .iter()
            .enumerate()
            .map(|(index, model)| EffectDescriptor::from_model(index, model))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[EffectDescriptor] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&EffectDescriptor> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Never true: an empty model list yields the inert row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

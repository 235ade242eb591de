//! Calendar-keyed preset storage.
//!
//! Twelve slots, one per month. At most one slot carries the active marker;
//! the store is the only place that sets it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{BLUE, RED};
use crate::json_file::{read_json, write_json};
use crate::model::{
    EffectDocument, EffectKind, EffectModel, ModelError, SLOT_COUNT, SpeedTier, default_wave_width,
};

/// Month names, indexed by `slot_id - 1`
pub const MONTHS: [&str; SLOT_COUNT] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("slot {0} is outside 1..=12")]
    SlotOutOfRange(i64),

    #[error("invalid preset: {0}")]
    InvalidModel(#[from] ModelError),

    #[error("slot {0} appears more than once")]
    DuplicateSlot(i64),

    #[error("failed to parse presets: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read or write presets: {0}")]
    Io(#[from] std::io::Error),
}

/// One stored slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub model: EffectModel,
    pub active: bool,
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PresetFile {
    #[serde(default)]
    presets: Vec<PresetEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PresetEntry {
    #[serde(flatten)]
    document: EffectDocument,
    #[serde(default, alias = "ativo")]
    active: bool,
    #[serde(default, alias = "descricao", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// The twelve slots and the strip length their models were built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetStore {
    slots: [Preset; SLOT_COUNT],
    strip_length: usize,
}

impl PresetStore {
    /// Every slot solid red over blue at medium speed, slot 1 active
    pub fn with_defaults(strip_length: usize) -> Self {
        let mut slots: [Preset; SLOT_COUNT] =
            core::array::from_fn(|index| default_preset(index, strip_length));
        slots[0].active = true;
        Self {
            slots,
            strip_length,
        }
    }

    pub const fn strip_length(&self) -> usize {
        self.strip_length
    }

    pub fn get(&self, slot_id: u8) -> Option<&Preset> {
        slot_index(slot_id).map(|index| &self.slots[index])
    }

    /// Store a copy of `model` in the slot and make the slot active
    pub fn update(&mut self, slot_id: u8, model: &EffectModel) -> Result<(), PresetError> {
        let index = slot_index(slot_id).ok_or(PresetError::SlotOutOfRange(i64::from(slot_id)))?;
        self.slots[index].model = model.with_slot(slot_id);
        self.activate(index);
        log::info!("presets: slot {} updated", slot_id);
        Ok(())
    }

    pub fn set_description(
        &mut self,
        slot_id: u8,
        description: Option<String>,
    ) -> Result<(), PresetError> {
        let index = slot_index(slot_id).ok_or(PresetError::SlotOutOfRange(i64::from(slot_id)))?;
        self.slots[index].description = description;
        Ok(())
    }

    /// Make `slot_id` the only active slot
    pub fn set_active(&mut self, slot_id: u8) -> Result<(), PresetError> {
        let index = slot_index(slot_id).ok_or(PresetError::SlotOutOfRange(i64::from(slot_id)))?;
        self.activate(index);
        Ok(())
    }

    /// Active slot id, slot 1 when none is marked
    pub fn active_slot(&self) -> u8 {
        (1u8..)
            .zip(&self.slots)
            .find_map(|(slot_id, preset)| preset.active.then_some(slot_id))
            .unwrap_or(1)
    }

    pub fn active(&self) -> &Preset {
        let index = slot_index(self.active_slot()).unwrap_or_default();
        &self.slots[index]
    }

    /// Slots in calendar order, paired with their ids
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Preset)> {
        (1u8..).zip(self.slots.iter())
    }

    /// Models of all slots in calendar order, ready for emission
    pub fn models(&self) -> Vec<EffectModel> {
        self.slots.iter().map(|preset| preset.model.clone()).collect()
    }

    /// Parse a preset document for a strip of `strip_length` LEDs.
    ///
    /// Entries without a slot id take their position. Slots missing from the
    /// document get defaults.
    pub fn from_json(json: &str, strip_length: usize) -> Result<Self, PresetError> {
        let file: PresetFile = serde_json::from_str(json)?;
        Self::from_file(file, strip_length)
    }

    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(&self.to_file())?)
    }

    /// Load presets from disk. A missing or empty file yields the defaults.
    pub fn load(path: &Path, strip_length: usize) -> Result<Self, PresetError> {
        log::info!("presets: loading from {:?}", path);
        match read_json::<PresetFile, PresetError>(path)? {
            Some(file) => Self::from_file(file, strip_length),
            None => {
                log::info!("presets: {:?} not found, using defaults", path);
                Ok(Self::with_defaults(strip_length))
            }
        }
    }

    /// Like [`PresetStore::load`], but falls back to the defaults on any error
    pub fn load_or_default(path: &Path, strip_length: usize) -> Self {
        Self::load(path, strip_length).unwrap_or_else(|e| {
            log::warn!("presets: {}, using defaults", e);
            Self::with_defaults(strip_length)
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), PresetError> {
        log::info!("presets: saving to {:?}", path);
        write_json::<PresetFile, PresetError>(&self.to_file(), path)
    }

    fn activate(&mut self, index: usize) {
        for (i, preset) in self.slots.iter_mut().enumerate() {
            preset.active = i == index;
        }
    }

    fn from_file(file: PresetFile, strip_length: usize) -> Result<Self, PresetError> {
        let mut loaded: [Option<Preset>; SLOT_COUNT] = Default::default();
        let mut has_active = false;

        for (position, entry) in (1i64..).zip(file.presets) {
            let mut document = entry.document;
            let slot_id = *document.slot_id.get_or_insert(position);
            let index = slot_id
                .checked_sub(1)
                .and_then(|index| usize::try_from(index).ok())
                .filter(|&index| index < SLOT_COUNT)
                .ok_or(PresetError::SlotOutOfRange(slot_id))?;
            if loaded[index].is_some() {
                return Err(PresetError::DuplicateSlot(slot_id));
            }

            let model = document.into_model(strip_length)?;
            let active = if entry.active && has_active {
                log::warn!("presets: slot {} also marked active, ignoring", slot_id);
                false
            } else {
                entry.active
            };
            has_active |= active;

            loaded[index] = Some(Preset {
                model,
                active,
                description: entry.description,
            });
        }

        let mut index = 0;
        let slots = loaded.map(|preset| {
            let preset = preset.unwrap_or_else(|| default_preset(index, strip_length));
            index += 1;
            preset
        });

        Ok(Self {
            slots,
            strip_length,
        })
    }

    fn to_file(&self) -> PresetFile {
        PresetFile {
            presets: self
                .slots
                .iter()
                .map(|preset| PresetEntry {
                    document: EffectDocument::from_model(&preset.model),
                    active: preset.active,
                    description: preset.description.clone(),
                })
                .collect(),
        }
    }
}

fn slot_index(slot_id: u8) -> Option<usize> {
    let index = usize::from(slot_id).checked_sub(1)?;
    (index < SLOT_COUNT).then_some(index)
}

#[allow(clippy::cast_possible_truncation)]
fn default_preset(index: usize, strip_length: usize) -> Preset {
    Preset {
        model: EffectModel {
            kind: EffectKind::Solid,
            color1: RED,
            color2: BLUE,
            speed: SpeedTier::Medium,
            wave_width: default_wave_width(strip_length),
            blink: false,
            slot_id: Some(index as u8 + 1),
            label: Some(MONTHS[index].to_string()),
        },
        active: false,
        description: None,
    }
}

//! Host-side interpreter of the emitted sketch.
//!
//! Runs the same descriptor table with the same state variables and integer
//! routines as the generated C, so frames, timing and command handling can be
//! checked without hardware.

use heapless::Vec as LineBuffer;

use crate::color::{Rgb, lerp_colors};
use crate::control::{accept_selection, parse_select_line};
use crate::firmware::{COMMAND_CAPACITY, DescriptorTable, EffectDescriptor};
use crate::model::{KIND_CODE_GRADIENT, KIND_CODE_SOLID, KIND_CODE_WAVE};

const COMMAND_LINE_MAX: usize = COMMAND_CAPACITY - 1;

/// State of one running sketch
#[derive(Debug, Clone)]
pub struct FirmwareSimulator {
    table: DescriptorTable,
    strip_length: u16,
    current_effect: usize,
    last_update: u32,
    phase: u16,
    command: LineBuffer<u8, COMMAND_LINE_MAX>,
    command_overflow: bool,
    leds: Vec<Rgb>,
}

impl FirmwareSimulator {
    pub fn new(table: DescriptorTable, strip_length: u16) -> Self {
        let strip_length = strip_length.max(1);
        Self {
            table,
            strip_length,
            current_effect: 0,
            last_update: 0,
            phase: 0,
            command: LineBuffer::new(),
            command_overflow: false,
            leds: vec![Rgb::default(); usize::from(strip_length)],
        }
    }

    /// Last frame written to the strip
    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    pub const fn current_effect(&self) -> usize {
        self.current_effect
    }

    pub const fn phase(&self) -> u16 {
        self.phase
    }

    pub const fn table(&self) -> &DescriptorTable {
        &self.table
    }

    /// One pass of `loop()` at `now_ms` on the `millis()` clock, without
    /// serial input. Returns whether a frame was rendered.
    pub fn tick(&mut self, now_ms: u32) -> bool {
        let Some(effect) = self.table.get(self.current_effect).cloned() else {
            return false;
        };
        if now_ms.wrapping_sub(self.last_update) < u32::from(effect.period_ms) {
            return false;
        }
        self.last_update = now_ms;

        match effect.kind_code {
            KIND_CODE_SOLID => self.render_solid(&effect),
            KIND_CODE_GRADIENT => self.render_gradient(&effect),
            KIND_CODE_WAVE => self.render_wave(&effect),
            _ => {}
        }
        true
    }

    /// Bytes arriving on the control channel
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if byte == b'\n' || byte == b'\r' {
                if !self.command_overflow && !self.command.is_empty() {
                    self.select_effect();
                }
                self.command.clear();
                self.command_overflow = false;
            } else if self.command.push(byte).is_err() {
                self.command_overflow = true;
            }
        }
    }

    fn select_effect(&mut self) {
        let selected = core::str::from_utf8(&self.command)
            .ok()
            .and_then(parse_select_line)
            .and_then(|value| accept_selection(value, self.table.len()));

        if let Some(index) = selected {
            self.current_effect = index;
            self.phase = 0;
        }
    }

    fn render_solid(&mut self, effect: &EffectDescriptor) {
        self.leds.fill(effect.color1);
    }

    fn render_gradient(&mut self, effect: &EffectDescriptor) {
        let den = if self.strip_length > 1 {
            u32::from(self.strip_length) - 1
        } else {
            1
        };
        for (i, led) in (0u32..).zip(self.leds.iter_mut()) {
            *led = lerp_colors(effect.color1, effect.color2, i, den);
        }
    }

    fn render_wave(&mut self, effect: &EffectDescriptor) {
        let width = u32::from(effect.effective_wave_width());
        let len = u32::from(self.strip_length);
        let phase = u32::from(self.phase);
        for (i, led) in (0u32..).zip(self.leds.iter_mut()) {
            let relative = (i + len - phase) % len;
            *led = if relative < width {
                lerp_colors(effect.color1, effect.color2, relative, width)
            } else {
                effect.color2
            };
        }
        self.phase = (self.phase + 1) % self.strip_length;
    }
}

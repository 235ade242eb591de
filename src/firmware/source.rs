//! `FastLED` sketch text.
//!
//! The render routines below are the C twin of `effect::{solid, gradient,
//! wave}` and `color::lerp_channel`; the two must change together.

use core::fmt::{self, Write};

use crate::config::FirmwareConfig;
use crate::firmware::{COMMAND_CAPACITY, DescriptorTable, EffectDescriptor};
use crate::model::{KIND_CODE_GRADIENT, KIND_CODE_SOLID, KIND_CODE_WAVE};

const PRELUDE: &str = r#"// Generated by myrtio-light-forge. Do not edit by hand.
#include <FastLED.h>
#include <stdlib.h>
"#;

const EFFECT_STRUCT: &str = r#"struct Effect {
    const char* name;
    uint8_t kind;
    uint8_t r1, g1, b1;
    uint8_t r2, g2, b2;
    uint16_t period_ms;
    uint16_t wave_width;
};
"#;

const STATE_AND_RENDERERS: &str = r#"
#define NUM_EFFECTS (sizeof(effects) / sizeof(effects[0]))

uint8_t current_effect = 0;
uint32_t last_update = 0;
uint16_t phase = 0;

char command[COMMAND_CAPACITY];
uint8_t command_len = 0;
bool command_overflow = false;

// (a * (den - num) + b * num) / den, truncated
uint8_t lerp_channel(uint8_t a, uint8_t b, uint32_t num, uint32_t den) {
    if (den == 0) den = 1;
    if (num > den) num = den;
    return (uint8_t)(((uint32_t)a * (den - num) + (uint32_t)b * num) / den);
}

void write_pixel(uint16_t i, uint8_t r, uint8_t g, uint8_t b) {
    for (uint8_t port = 0; port < NUM_PORTS; port++) {
        leds[port][i] = CRGB(r, g, b);
    }
}

void render_solid(const Effect& effect) {
    for (uint16_t i = 0; i < NUM_LEDS; i++) {
        write_pixel(i, effect.r1, effect.g1, effect.b1);
    }
}

void render_gradient(const Effect& effect) {
    uint32_t den = NUM_LEDS > 1 ? NUM_LEDS - 1 : 1;
    for (uint16_t i = 0; i < NUM_LEDS; i++) {
        write_pixel(i,
                    lerp_channel(effect.r1, effect.r2, i, den),
                    lerp_channel(effect.g1, effect.g2, i, den),
                    lerp_channel(effect.b1, effect.b2, i, den));
    }
}

void render_wave(const Effect& effect) {
    uint32_t width = effect.wave_width > 0 ? effect.wave_width : 1;
    for (uint16_t i = 0; i < NUM_LEDS; i++) {
        uint32_t relative = ((uint32_t)i + NUM_LEDS - phase) % NUM_LEDS;
        if (relative < width) {
            write_pixel(i,
                        lerp_channel(effect.r1, effect.r2, relative, width),
                        lerp_channel(effect.g1, effect.g2, relative, width),
                        lerp_channel(effect.b1, effect.b2, relative, width));
        } else {
            write_pixel(i, effect.r2, effect.g2, effect.b2);
        }
    }
    phase = (phase + 1) % NUM_LEDS;
}
"#;

const COMMAND_HANDLING: &str = r#"
void select_effect(const char* line) {
    char* end;
    long value = strtol(line, &end, 10);
    if (end == line || *end != '\0') return;
    if (value < 0 || value >= (long)NUM_EFFECTS) return;
    current_effect = (uint8_t)value;
    phase = 0;
}

void poll_command() {
    while (Serial.available() > 0) {
        char c = (char)Serial.read();
        if (c == '\n' || c == '\r') {
            if (!command_overflow && command_len > 0) {
                command[command_len] = '\0';
                select_effect(command);
            }
            command_len = 0;
            command_overflow = false;
        } else if (command_len < COMMAND_CAPACITY - 1) {
            command[command_len++] = c;
        } else {
            command_overflow = true;
        }
    }
}
"#;

const LOOP: &str = r#"
void loop() {
    poll_command();
    apply_effect(effects[current_effect]);
}
"#;

/// Render the complete sketch
pub(super) fn render(
    table: &DescriptorTable,
    strip_length: u16,
    config: &FirmwareConfig,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    out.push_str(PRELUDE);
    write_geometry(&mut out, table, strip_length, config)?;
    out.push('\n');
    out.push_str(EFFECT_STRUCT);
    out.push('\n');
    write_table(&mut out, table)?;
    out.push_str(STATE_AND_RENDERERS);
    write_apply(&mut out)?;
    out.push_str(COMMAND_HANDLING);
    write_setup(&mut out, config)?;
    out.push_str(LOOP);
    Ok(out)
}

fn write_geometry(
    out: &mut String,
    table: &DescriptorTable,
    strip_length: u16,
    config: &FirmwareConfig,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "// {} effects", table.len())?;
    writeln!(out, "#define NUM_LEDS {}", strip_length)?;
    writeln!(out, "#define NUM_PORTS {}", config.data_pins.len())?;
    writeln!(out, "#define COMMAND_CAPACITY {}", COMMAND_CAPACITY)?;
    writeln!(out)?;
    let pins = config
        .data_pins
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "const uint8_t DATA_PINS[NUM_PORTS] = {{{}}};", pins)?;
    writeln!(out)?;
    writeln!(out, "CRGB leds[NUM_PORTS][NUM_LEDS];")
}

fn write_table(out: &mut String, table: &DescriptorTable) -> fmt::Result {
    writeln!(
        out,
        "// name, kind ({} solid, {} gradient, {} wave), r1, g1, b1, r2, g2, b2, period_ms, wave_width",
        KIND_CODE_SOLID, KIND_CODE_GRADIENT, KIND_CODE_WAVE
    )?;
    writeln!(out, "const Effect effects[] = {{")?;
    for row in table.rows() {
        write_row(out, row)?;
    }
    writeln!(out, "}};")
}

fn write_row(out: &mut String, row: &EffectDescriptor) -> fmt::Result {
    write!(out, "    {{")?;
    write_c_string(out, &row.name)?;
    writeln!(
        out,
        ", {}, {}, {}, {}, {}, {}, {}, {}, {}}},",
        row.kind_code,
        row.color1.r,
        row.color1.g,
        row.color1.b,
        row.color2.r,
        row.color2.g,
        row.color2.b,
        row.period_ms,
        row.wave_width
    )
}

fn write_apply(out: &mut String) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "void apply_effect(const Effect& effect) {{")?;
    writeln!(out, "    uint32_t now = millis();")?;
    writeln!(out, "    if (now - last_update < effect.period_ms) return;")?;
    writeln!(out, "    last_update = now;")?;
    writeln!(out)?;
    writeln!(out, "    switch (effect.kind) {{")?;
    for (code, routine) in [
        (KIND_CODE_SOLID, "render_solid"),
        (KIND_CODE_GRADIENT, "render_gradient"),
        (KIND_CODE_WAVE, "render_wave"),
    ] {
        writeln!(out, "        case {}:", code)?;
        writeln!(out, "            {}(effect);", routine)?;
        writeln!(out, "            break;")?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "    FastLED.show();")?;
    writeln!(out, "}}")
}

fn write_setup(out: &mut String, config: &FirmwareConfig) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "void setup() {{")?;
    for (port, pin) in config.data_pins.iter().enumerate() {
        writeln!(
            out,
            "    FastLED.addLeds<{}, {}, {}>(leds[{}], NUM_LEDS);",
            config.chipset, pin, config.color_order, port
        )?;
    }
    writeln!(out, "    FastLED.setBrightness({});", config.brightness)?;
    writeln!(out, "    Serial.begin({});", config.baud_rate)?;
    writeln!(out, "}}")
}

/// Quote `value` as a C string literal
fn write_c_string(out: &mut String, value: &str) -> fmt::Result {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => write!(out, "\\x{:02x}\"\"", u32::from(c))?,
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(())
}

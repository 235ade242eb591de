use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Rgb;

/// Inclusive range of LEDs, e.g. the LEDs behind one letter of the sign.
///
/// Serialized as a `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u16, u16)", into = "(u16, u16)")]
pub struct LedSpan {
    pub start: u16,
    pub end: u16,
}

impl LedSpan {
    /// Span from `start` to `end`, swapped if given backwards
    pub const fn new(start: u16, end: u16) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Get the number of LEDs in the span
    #[allow(clippy::cast_lossless)]
    pub const fn count(self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Length of the first half of the span, rounded up. The letter
    /// overlay is centered on this LED.
    pub const fn center(self) -> usize {
        center_of_len(self.count())
    }

    /// Whether the span lies within a strip of `strip_length` LEDs
    #[allow(clippy::cast_lossless)]
    pub const fn fits(self, strip_length: usize) -> bool {
        (self.end as usize) < strip_length
    }

    /// Get the LEDs of a frame covered by the span
    pub fn slice(self, frame: &[Rgb]) -> Option<&[Rgb]> {
        frame.get(usize::from(self.start)..=usize::from(self.end))
    }
}

impl From<(u16, u16)> for LedSpan {
    fn from((start, end): (u16, u16)) -> Self {
        Self::new(start, end)
    }
}

impl From<LedSpan> for (u16, u16) {
    fn from(span: LedSpan) -> Self {
        (span.start, span.end)
    }
}

/// Get the center of a run of `count` elements
pub const fn center_of_len(count: usize) -> usize {
    let mut center_len = count / 2;
    if !count.is_multiple_of(2) {
        center_len += 1;
    }

    if center_len <= count {
        return center_len;
    }
    count
}

/// Named spans in the order they appear on the strip.
///
/// Serialized as a JSON object; key order is kept in both directions. A
/// repeated name replaces the earlier span in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSpans(Vec<(String, LedSpan)>);

impl LetterSpans {
    pub fn get(&self, letter: &str) -> Option<LedSpan> {
        self.0
            .iter()
            .find(|(name, _)| name == letter)
            .map(|&(_, span)| span)
    }

    /// Add a span, or replace the span of an existing name
    pub fn insert(&mut self, letter: impl Into<String>, span: LedSpan) {
        let letter = letter.into();
        match self.0.iter_mut().find(|(name, _)| *name == letter) {
            Some((_, existing)) => *existing = span,
            None => self.0.push((letter, span)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LedSpan)> {
        self.0.iter().map(|(name, span)| (name.as_str(), *span))
    }

    /// Names in strip order
    pub fn letters(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, LedSpan)> for LetterSpans {
    fn from_iter<I: IntoIterator<Item = (String, LedSpan)>>(iter: I) -> Self {
        let mut spans = Self::default();
        for (letter, span) in iter {
            spans.insert(letter, span);
        }
        spans
    }
}

impl Serialize for LetterSpans {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (letter, span) in &self.0 {
            map.serialize_entry(letter, span)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LetterSpans {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpansVisitor;

        impl<'de> Visitor<'de> for SpansVisitor {
            type Value = LetterSpans;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of letter to [start, end]")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut spans = LetterSpans::default();
                while let Some((letter, span)) = access.next_entry::<String, LedSpan>()? {
                    spans.insert(letter, span);
                }
                Ok(spans)
            }
        }

        deserializer.deserialize_map(SpansVisitor)
    }
}

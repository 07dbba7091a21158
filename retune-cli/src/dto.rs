use std::collections::BTreeMap;

use retune::offset::OffsetMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum RetuneDto {
    Offsets(OffsetsDto),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OffsetsDto {
    pub name: String,
    pub period_in_cents: f64,
    pub items: Vec<OffsetItemDto>,
}

impl OffsetsDto {
    /// Collects the offsets of all nominals with a MIDI number in `range`.
    pub fn from_offset_map(
        name: &str,
        offset_map: &OffsetMap,
        range: impl Fn(i32) -> bool,
    ) -> Self {
        let items = offset_map
            .iter()
            .filter(|&(nominal, _)| range(nominal))
            .map(|(nominal, offsets)| OffsetItemDto {
                nominal_midi_number: nominal,
                natural_offset_in_cents: offsets.natural(),
                accidental_offsets_in_cents: offsets
                    .accidentals()
                    .map(|(accidental, offset)| (accidental.name().to_owned(), offset))
                    .collect(),
            })
            .collect();

        Self {
            name: name.to_owned(),
            period_in_cents: offset_map.period(),
            items,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OffsetItemDto {
    pub nominal_midi_number: i32,
    pub natural_offset_in_cents: f64,
    /// Offsets relative to the natural offset.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accidental_offsets_in_cents: BTreeMap<String, f64>,
}

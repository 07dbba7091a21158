//! Offsets of notated pitches from 12-EDO.

use crate::accidental::AccidentalType;
use crate::definition::{ScaleDefinition, ScaleDegreeEntry, NO_ACCIDENTAL_NAME};
use crate::error::{LookupError, TuningError};
use crate::nominal::{self, NUM_KEYBOARD_NOMINALS};
use crate::spelling::Spelling;
use std::collections::BTreeMap;

/// Absolute pitch values in cents of one period, indexed by nominal.
type ScalaMap = BTreeMap<i32, BTreeMap<AccidentalType, f64>>;

/// Offsets in cents for every nominal of the keyboard.
///
/// # Examples
///
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// # use retune::accidental::AccidentalType;
/// # use retune::definition::{self, ScaleDefinition};
/// # use retune::offset::OffsetMap;
/// let quarter_comma_meantone = ScaleDefinition::new([
///     definition::degree([("NONE", "2")]),
///     definition::degree([("NONE", "193.157")]),
///     definition::degree([("NONE", "386.314"), ("FLAT", "310.265")]),
///     definition::degree([("NONE", "503.422")]),
///     definition::degree([("NONE", "696.579")]),
///     definition::degree([("NONE", "889.735")]),
///     definition::degree([("NONE", "1082.892")]),
/// ]);
///
/// let offset_map = OffsetMap::build(&quarter_comma_meantone).unwrap();
///
/// // E4
/// assert_approx_eq!(offset_map.offset_of(64, 18, AccidentalType::NoAccidental).unwrap(), -13.686);
/// // Eb4
/// assert_approx_eq!(offset_map.offset_of(63, 11, AccidentalType::NoAccidental).unwrap(), 10.265);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetMap {
    period: f64,
    nominals: BTreeMap<i32, NominalOffsets>,
}

/// Offsets of a single nominal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NominalOffsets {
    natural: f64,
    accidentals: BTreeMap<AccidentalType, f64>,
}

impl NominalOffsets {
    /// Deviation of the natural nominal from 12-EDO.
    pub fn natural(&self) -> f64 {
        self.natural
    }

    /// Deviation of the altered nominal from the natural nominal.
    pub fn accidental(&self, accidental: AccidentalType) -> Option<f64> {
        self.accidentals.get(&accidental).copied()
    }

    pub fn accidentals(&self) -> impl Iterator<Item = (AccidentalType, f64)> + '_ {
        self.accidentals
            .iter()
            .map(|(&accidental, &offset)| (accidental, offset))
    }
}

impl OffsetMap {
    pub fn build(definition: &ScaleDefinition) -> Result<Self, TuningError> {
        let degrees = definition.degrees()?;
        let num_degrees = degrees.len();
        let period = degrees[0][NO_ACCIDENTAL_NAME].as_cents()?;
        let root = definition.tuning_root(num_degrees)?;
        let scala_map = create_scala_map(degrees)?;

        // Align the root degree with the root key
        let num_nominals_below_root = nominal::num_nominals_below(root.midi_number());
        let first_nominal_index =
            (root.degree() as i32 - num_nominals_below_root).rem_euclid(num_degrees as i32) as usize;
        let num_periods_below_root =
            (first_nominal_index + num_nominals_below_root as usize) / num_degrees;
        let root_degree = root.degree() % num_degrees;
        let scala_value_at_root = match root_degree {
            0 => 0.0,
            _ => natural_value(&scala_map, nominal::nominal_for(root_degree)),
        };
        let root_offset = f64::from(root.midi_number()) * 100.0
            - (period * num_periods_below_root as f64 + scala_value_at_root);

        let mut nominals = BTreeMap::new();
        let mut period_offset = 0.0;
        for slot in 0..NUM_KEYBOARD_NOMINALS {
            let nominal_index = (first_nominal_index + slot) % num_degrees;
            let nominal = nominal::nominal_for(nominal_index);
            let midi_nominal = nominal::nominal_for(slot);

            let mut nominal_scala_value = natural_value(&scala_map, nominal);
            if nominal_index == 0 {
                nominal_scala_value = 0.0;
                if slot > 0 {
                    period_offset += period;
                }
            }

            let natural = period_offset + nominal_scala_value - f64::from(midi_nominal) * 100.0
                + root_offset;
            let accidentals = scala_map
                .get(&nominal)
                .into_iter()
                .flatten()
                .filter(|(&accidental, _)| accidental != AccidentalType::NoAccidental)
                .map(|(&accidental, &scala_value)| (accidental, scala_value - nominal_scala_value))
                .collect();

            nominals.insert(
                midi_nominal,
                NominalOffsets {
                    natural,
                    accidentals,
                },
            );
        }

        Ok(Self { period, nominals })
    }

    /// The interval in cents after which the scale repeats.
    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn get(&self, nominal: i32) -> Option<&NominalOffsets> {
        self.nominals.get(&nominal)
    }

    /// Iterates over all nominals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &NominalOffsets)> {
        self.nominals
            .iter()
            .map(|(&nominal, offsets)| (nominal, offsets))
    }

    /// Calculates the offset in cents of the sounding `pitch` notated with the given spelling and accidental.
    ///
    /// If `accidental` is [`AccidentalType::NoAccidental`], the accidental implied by `tpc` applies.
    pub fn offset_of(
        &self,
        pitch: i32,
        tpc: i32,
        accidental: AccidentalType,
    ) -> Result<f64, LookupError> {
        let spelling = Spelling::of_tpc(tpc);
        let nominal = spelling
            .nominal_of(pitch)
            .ok_or(LookupError::NominalOutOfRange {
                nominal: pitch.saturating_add(spelling.nominal_shift),
            })?;

        let nominal_offsets = self
            .get(nominal)
            .ok_or(LookupError::NominalOutOfRange { nominal })?;

        let natural_offset = f64::from(nominal - pitch) * 100.0 + nominal_offsets.natural();

        let accidental = match (accidental, spelling.implied_accidental) {
            (AccidentalType::NoAccidental, Some(implied_accidental)) => implied_accidental,
            _ => accidental,
        };
        if accidental.is_natural() {
            return Ok(natural_offset);
        }

        nominal_offsets
            .accidental(accidental)
            .map(|accidental_offset| natural_offset + accidental_offset)
            .ok_or(LookupError::UnmappedAccidental {
                nominal,
                accidental,
                natural_offset,
            })
    }
}

fn create_scala_map(degrees: &[ScaleDegreeEntry]) -> Result<ScalaMap, TuningError> {
    let mut scala_map = ScalaMap::new();
    for (index, entry) in degrees.iter().enumerate() {
        let accidentals = scala_map.entry(nominal::nominal_for(index)).or_default();
        for (name, scala_value) in entry {
            let cents_value = scala_value.as_cents()?;
            let accidental = AccidentalType::from_name(name)
                .ok_or_else(|| TuningError::UnknownAccidental(name.clone()))?;
            accidentals.insert(accidental, cents_value);
        }
    }
    Ok(scala_map)
}

/// Nominals without a `NONE` value keep their 12-EDO pitch.
fn natural_value(scala_map: &ScalaMap, nominal: i32) -> f64 {
    scala_map
        .get(&nominal)
        .and_then(|accidentals| accidentals.get(&AccidentalType::NoAccidental))
        .copied()
        .unwrap_or_else(|| f64::from(nominal) * 100.0)
}

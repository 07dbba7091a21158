//! Tuning files describing a scale in terms of nominals and accidentals.
//!
//! A tuning file is a JSON document like the following:
//!
//! ```json
//! {
//!     "name": "5-limit JI",
//!     "map": [
//!         { "NONE": "2/1" },
//!         { "NONE": "9/8" },
//!         { "NONE": "5/4", "FLAT": "6/5" },
//!         { "NONE": "4/3" },
//!         { "NONE": "3/2" },
//!         { "NONE": "5/3" },
//!         { "NONE": "15/8" }
//!     ],
//!     "root": [0, 60]
//! }
//! ```
//!
//! Each entry of `map` describes one scale degree. The `NONE` value of the first entry is the period of the scale.

use crate::error::{DocumentError, RootError, TuningError};
use crate::nominal;
use crate::scala::ScalaValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Maps accidental names to pitch values in Scala notation.
pub type ScaleDegreeEntry = BTreeMap<String, ScalaValue>;

pub const NO_ACCIDENTAL_NAME: &str = "NONE";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ScaleDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<Vec<ScaleDegreeEntry>>,
    /// The scale degree and MIDI number to align.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<Vec<i32>>,
}

impl ScaleDefinition {
    pub fn new(map: impl IntoIterator<Item = ScaleDegreeEntry>) -> Self {
        Self {
            name: None,
            map: Some(map.into_iter().collect()),
            root: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_root(mut self, degree: i32, midi_number: i32) -> Self {
        self.root = Some(vec![degree, midi_number]);
        self
    }

    pub fn import(reader: impl Read) -> Result<Self, TuningError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The scale degrees, ensuring there is at least one degree defining the period.
    pub fn degrees(&self) -> Result<&[ScaleDegreeEntry], DocumentError> {
        let degrees = match &self.map {
            Some(degrees) if !degrees.is_empty() => degrees,
            _ => return Err(DocumentError::MapMissing),
        };
        if degrees[0].contains_key(NO_ACCIDENTAL_NAME) {
            Ok(degrees)
        } else {
            Err(DocumentError::PeriodMissing)
        }
    }

    pub fn tuning_root(&self, num_degrees: usize) -> Result<TuningRoot, RootError> {
        match self.root.as_deref() {
            None => Ok(TuningRoot::default()),
            Some(&[degree, midi_number]) => TuningRoot::new(degree, midi_number, num_degrees),
            Some(other) => Err(RootError::BadArity(other.len())),
        }
    }
}

/// Creates a [`ScaleDegreeEntry`] from accidental names and values.
///
/// # Examples
///
/// ```
/// # use retune::definition;
/// let entry = definition::degree([("NONE", "5/4"), ("FLAT", "6/5")]);
/// assert_eq!(entry.len(), 2);
/// assert_eq!(entry["FLAT"].to_string(), "6/5");
/// ```
pub fn degree<'a, V: Into<ScalaValue>>(
    values: impl IntoIterator<Item = (&'a str, V)>,
) -> ScaleDegreeEntry {
    values
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.into()))
        .collect()
}

/// Aligns a scale degree with a MIDI number on the keyboard.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TuningRoot {
    degree: usize,
    midi_number: i32,
}

impl TuningRoot {
    pub fn new(degree: i32, midi_number: i32, num_degrees: usize) -> Result<Self, RootError> {
        if !(0..128).contains(&midi_number) {
            return Err(RootError::KeyOutOfRange(midi_number));
        }
        if !nominal::is_nominal(midi_number) {
            return Err(RootError::NotANominal(midi_number));
        }
        match usize::try_from(degree) {
            Ok(degree) if degree <= num_degrees => Ok(Self {
                degree,
                midi_number,
            }),
            _ => Err(RootError::DegreeOutOfRange {
                degree,
                num_degrees,
            }),
        }
    }

    pub fn degree(self) -> usize {
        self.degree
    }

    pub fn midi_number(self) -> i32 {
        self.midi_number
    }
}

/// Degree 0 sounds at middle C.
impl Default for TuningRoot {
    fn default() -> Self {
        Self {
            degree: 0,
            midi_number: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_definition() {
        let input = &br#"{
            "name": "Test scale",
            "map": [
                { "NONE": "2", "SHARP": 100.0 },
                { "NONE": "9/8", "FLAT": "100.", "SHARP_ARROW_UP": "350.0 cents" }
            ],
            "root": [1, 62]
        }"#[..];

        let definition = ScaleDefinition::import(input).unwrap();

        assert_eq!(definition.name.as_deref(), Some("Test scale"));
        let degrees = definition.degrees().unwrap();
        assert_eq!(degrees.len(), 2);
        assert_eq!(degrees[0]["NONE"], ScalaValue::from("2"));
        assert_eq!(degrees[0]["SHARP"], ScalaValue::Number(100.0));
        assert_eq!(degrees[1]["SHARP_ARROW_UP"], ScalaValue::from("350.0 cents"));
        assert_eq!(
            definition.tuning_root(degrees.len()),
            Ok(TuningRoot {
                degree: 1,
                midi_number: 62
            })
        );
    }

    #[test]
    fn optional_fields() {
        let definition = ScaleDefinition::import(&br#"{ "map": [{ "NONE": 1200 }] }"#[..]).unwrap();

        assert_eq!(definition.name, None);
        assert_eq!(definition.tuning_root(1), Ok(TuningRoot::default()));
        assert_eq!(TuningRoot::default().degree(), 0);
        assert_eq!(TuningRoot::default().midi_number(), 60);
    }

    #[test]
    fn build_definition() {
        let definition = ScaleDefinition::new([
            degree([("NONE", "2")]),
            degree([("NONE", 200.0), ("FLAT", 100.0)]),
        ])
        .with_name("Builder")
        .with_root(1, 62);

        let json = serde_json::to_string(&definition).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Builder","map":[{"NONE":"2"},{"FLAT":100.0,"NONE":200.0}],"root":[1,62]}"#
        );
        assert_eq!(ScaleDefinition::import(json.as_bytes()).unwrap(), definition);
    }

    #[test]
    fn import_error_cases() {
        assert!(matches!(
            ScaleDefinition::import(&b"{ \"map\": [ "[..]),
            Err(TuningError::MalformedDocument(DocumentError::DecodeError(_)))
        ));
        assert!(matches!(
            ScaleDefinition::import(&b"[1, 2]"[..]),
            Err(TuningError::MalformedDocument(DocumentError::DecodeError(_)))
        ));
        assert!(matches!(
            ScaleDefinition::import(&br#"{ "map": [{ "NONE": "2" }], "root": [0, 60.5] }"#[..]),
            Err(TuningError::MalformedDocument(DocumentError::DecodeError(_)))
        ));
    }

    #[test]
    fn degrees_error_cases() {
        let degrees_of = |json: &str| {
            ScaleDefinition::import(json.as_bytes())
                .unwrap()
                .degrees()
                .map(<[_]>::len)
        };

        assert!(matches!(degrees_of("{}"), Err(DocumentError::MapMissing)));
        assert!(matches!(
            degrees_of(r#"{ "map": null }"#),
            Err(DocumentError::MapMissing)
        ));
        assert!(matches!(
            degrees_of(r#"{ "map": [] }"#),
            Err(DocumentError::MapMissing)
        ));
        assert!(matches!(
            degrees_of(r#"{ "map": [{ "FLAT": "2" }, { "NONE": "9/8" }] }"#),
            Err(DocumentError::PeriodMissing)
        ));
        assert!(matches!(
            degrees_of(r#"{ "map": [{ "NONE": "2" }, { "FLAT": "9/8" }] }"#),
            Ok(2)
        ));
    }

    #[test]
    fn root_error_cases() {
        let root_of = |root: Vec<i32>| {
            ScaleDefinition {
                root: Some(root),
                ..ScaleDefinition::default()
            }
            .tuning_root(7)
        };

        assert_eq!(root_of(vec![]), Err(RootError::BadArity(0)));
        assert_eq!(root_of(vec![0]), Err(RootError::BadArity(1)));
        assert_eq!(root_of(vec![0, 60, 1]), Err(RootError::BadArity(3)));
        assert_eq!(root_of(vec![0, 61]), Err(RootError::NotANominal(61)));
        assert_eq!(root_of(vec![0, 70]), Err(RootError::NotANominal(70)));
        assert_eq!(root_of(vec![0, -12]), Err(RootError::KeyOutOfRange(-12)));
        assert_eq!(root_of(vec![0, 128]), Err(RootError::KeyOutOfRange(128)));
        assert_eq!(
            root_of(vec![8, 60]),
            Err(RootError::DegreeOutOfRange {
                degree: 8,
                num_degrees: 7
            })
        );
        assert_eq!(
            root_of(vec![-1, 60]),
            Err(RootError::DegreeOutOfRange {
                degree: -1,
                num_degrees: 7
            })
        );

        assert!(root_of(vec![7, 60]).is_ok());
        assert!(root_of(vec![3, 0]).is_ok());
        assert!(root_of(vec![6, 127]).is_ok());
    }
}

use crate::accidental::AccidentalType;
use crate::scala::ScalaValueError;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

/// Reasons for a tuning file to be rejected.
///
/// A rejected tuning file never yields a partially built offset map.
#[derive(Debug)]
pub enum TuningError {
    FileUnreadable(io::Error),
    MalformedDocument(DocumentError),
    InvalidRootSpecification(RootError),
    UnknownAccidental(String),
    InvalidScalaValue(ScalaValueError),
}

#[derive(Debug)]
pub enum DocumentError {
    /// The input is not a valid tuning document.
    DecodeError(serde_json::Error),
    /// The `map` field is missing or empty.
    MapMissing,
    /// The first scale degree lacks a `NONE` value, so the period is unknown.
    PeriodMissing,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RootError {
    /// The `root` field does not consist of exactly two numbers.
    BadArity(usize),
    /// The MIDI number of the root is not a white key.
    NotANominal(i32),
    /// The MIDI number of the root is outside of the keyboard range.
    KeyOutOfRange(i32),
    /// The scale degree of the root is negative or larger than the number of scale degrees.
    DegreeOutOfRange { degree: i32, num_degrees: usize },
}

impl From<io::Error> for TuningError {
    fn from(v: io::Error) -> Self {
        TuningError::FileUnreadable(v)
    }
}

impl From<DocumentError> for TuningError {
    fn from(v: DocumentError) -> Self {
        TuningError::MalformedDocument(v)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(v: serde_json::Error) -> Self {
        TuningError::MalformedDocument(DocumentError::DecodeError(v))
    }
}

impl From<RootError> for TuningError {
    fn from(v: RootError) -> Self {
        TuningError::InvalidRootSpecification(v)
    }
}

impl From<ScalaValueError> for TuningError {
    fn from(v: ScalaValueError) -> Self {
        TuningError::InvalidScalaValue(v)
    }
}

impl Display for TuningError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TuningError::FileUnreadable(err) => write!(f, "Could not read tuning file: {}", err),
            TuningError::MalformedDocument(err) => write!(f, "Invalid tuning file: {}", err),
            TuningError::InvalidRootSpecification(err) => {
                write!(f, "Bad value for 'root' in tuning file: {}", err)
            }
            TuningError::UnknownAccidental(name) => {
                write!(f, "Unknown accidental type in tuning file: {}", name)
            }
            TuningError::InvalidScalaValue(err) => write!(f, "{}", err),
        }
    }
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DocumentError::DecodeError(err) => write!(f, "{}", err),
            DocumentError::MapMissing => write!(f, "expected a non-empty array 'map'"),
            DocumentError::PeriodMissing => {
                write!(f, "the first entry of 'map' must contain a NONE value")
            }
        }
    }
}

impl Display for RootError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RootError::BadArity(len) => write!(f, "expected array of size 2 but was {}", len),
            RootError::NotANominal(midi_number) => write!(f, "{} is not a nominal", midi_number),
            RootError::KeyOutOfRange(midi_number) => {
                write!(f, "{} is not a MIDI number between 0 and 127", midi_number)
            }
            RootError::DegreeOutOfRange {
                degree,
                num_degrees,
            } => write!(
                f,
                "{} is not a scale degree between 0 and {}",
                degree, num_degrees
            ),
        }
    }
}

/// Reasons for a lookup to fall back to a less accurate offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LookupError {
    /// No tuning has been loaded successfully.
    InvalidConfiguration,
    /// The nominal of the notated pitch is not part of the keyboard.
    NominalOutOfRange { nominal: i32 },
    /// The tuning file does not define the accidental for the given nominal.
    ///
    /// `natural_offset` is the offset of the pitch ignoring the accidental.
    UnmappedAccidental {
        nominal: i32,
        accidental: AccidentalType,
        natural_offset: f64,
    },
}

impl LookupError {
    /// The offset to apply when the lookup failed.
    pub fn fallback_offset(self) -> f64 {
        match self {
            LookupError::InvalidConfiguration | LookupError::NominalOutOfRange { .. } => 0.0,
            LookupError::UnmappedAccidental { natural_offset, .. } => natural_offset,
        }
    }
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LookupError::InvalidConfiguration => write!(f, "No valid tuning loaded"),
            LookupError::NominalOutOfRange { nominal } => {
                write!(f, "Nominal {} has not been mapped in this tuning", nominal)
            }
            LookupError::UnmappedAccidental {
                nominal,
                accidental,
                ..
            } => write!(
                f,
                "Accidental type {} has not been mapped for nominal {} in this tuning",
                accidental, nominal
            ),
        }
    }
}

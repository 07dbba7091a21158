//! Retune notated music using microtonal scales.
//!
//! A tuning file assigns a pitch in [Scala](http://www.huygens-fokker.org/scala/) notation to each nominal (white key)
//! and its accidentals. [`TuningConfiguration`] turns the tuning file into an offset in cents for every notated pitch.

pub mod accidental;
pub mod configuration;
pub mod definition;
pub mod error;
pub mod nominal;
pub mod offset;
pub mod scala;
pub mod spelling;

pub use configuration::TuningConfiguration;

//! Notated spelling of a pitch, derived from its tonal pitch class.
//!
//! Tonal pitch classes (TPCs) enumerate spellings along the circle of fifths: `6..=12` are the flat spellings
//! (Fb, Cb, ..., Bb), `13..=19` the naturals (F, C, ..., B) and `20..=26` the sharp spellings (F#, C#, ..., B#).

use crate::accidental::AccidentalType;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Spelling {
    /// Number of semitones from the sounding key to the nominal the pitch is notated on.
    pub nominal_shift: i32,
    /// The accidental the spelling implies, e.g. by a key signature, if any.
    pub implied_accidental: Option<AccidentalType>,
}

impl Spelling {
    /// Determines the nominal and accidental implied by a tonal pitch class.
    ///
    /// # Examples
    ///
    /// ```
    /// # use retune::accidental::AccidentalType;
    /// # use retune::spelling::Spelling;
    /// // Bb
    /// let spelling = Spelling::of_tpc(12);
    /// assert_eq!(spelling.nominal_shift, 1);
    /// assert_eq!(spelling.implied_accidental, Some(AccidentalType::Flat));
    ///
    /// // C
    /// let spelling = Spelling::of_tpc(14);
    /// assert_eq!(spelling.nominal_shift, 0);
    /// assert_eq!(spelling.implied_accidental, None);
    /// ```
    pub fn of_tpc(tpc: i32) -> Self {
        let (nominal_shift, implied_accidental) = match tpc {
            6..=12 => (1, Some(AccidentalType::Flat)),
            -1..=5 => (2, Some(AccidentalType::Flat2)),
            20..=33 => (-1, Some(AccidentalType::Sharp)),
            34..=40 => (-2, Some(AccidentalType::Sharp2)),
            _ => (0, None),
        };
        Self {
            nominal_shift,
            implied_accidental,
        }
    }

    /// The nominal the pitch is notated on, or [`None`] if it exceeds the range of `i32`.
    pub fn nominal_of(self, pitch: i32) -> Option<i32> {
        pitch.checked_add(self.nominal_shift)
    }
}

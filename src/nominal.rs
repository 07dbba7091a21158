//! Diatonic step arithmetic.
//!
//! A nominal is the MIDI number of a letter-named key (C, D, E, F, G, A or B) without any accidental applied.

/// Semitone distances between consecutive nominals, starting at C.
pub const STANDARD_NOMINAL_STEPS: [i32; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Number of nominals on the keyboard, covering MIDI numbers 0 to 127.
pub const NUM_KEYBOARD_NOMINALS: usize = 75;

/// Converts the index of a scale degree or keyboard nominal into its semitone position.
///
/// The steps repeat every 7 indices, regardless of how many degrees a tuning declares.
///
/// # Examples
///
/// ```
/// # use retune::nominal;
/// assert_eq!(nominal::nominal_for(0), 0);
/// assert_eq!(nominal::nominal_for(1), 2);
/// assert_eq!(nominal::nominal_for(3), 5);
/// assert_eq!(nominal::nominal_for(7), 12);
/// assert_eq!(nominal::nominal_for(35), 60);
/// assert_eq!(nominal::nominal_for(74), 127);
/// ```
pub fn nominal_for(index: usize) -> i32 {
    (0..index)
        .map(|step| STANDARD_NOMINAL_STEPS[step % STANDARD_NOMINAL_STEPS.len()])
        .sum()
}

/// Whether the MIDI number belongs to a white key.
pub fn is_nominal(midi_number: i32) -> bool {
    matches!(midi_number.rem_euclid(12), 0 | 2 | 4 | 5 | 7 | 9 | 11)
}

/// Number of nominals strictly below the given MIDI number, rounded to the closest nominal boundary.
pub fn num_nominals_below(midi_number: i32) -> i32 {
    (f64::from(midi_number) * 7.0 / 12.0).round() as i32
}

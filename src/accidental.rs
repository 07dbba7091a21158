//! The closed vocabulary of accidentals that can be retuned.
//!
//! Tuning files refer to accidentals by name (e.g. `FLAT` or `SHARP_ONE_ARROW_UP`). The names and their order follow
//! the accidental enumeration of the notation engine the offsets are consumed by. The numeric code of an accidental
//! is its position in that enumeration.

use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

macro_rules! accidental_types {
    ($($variant:ident => $name:literal,)*) => {
        #[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[repr(u8)]
        pub enum AccidentalType {
            $($variant,)*
        }

        impl AccidentalType {
            /// All supported accidentals in ascending code order.
            pub const ALL: &'static [AccidentalType] = &[$(AccidentalType::$variant,)*];

            /// Returns the name used in tuning files.
            pub fn name(self) -> &'static str {
                match self {
                    $(AccidentalType::$variant => $name,)*
                }
            }

            /// Looks up an accidental by the name used in tuning files.
            ///
            /// # Examples
            ///
            /// ```
            /// # use retune::accidental::AccidentalType;
            /// assert_eq!(AccidentalType::from_name("NONE"), Some(AccidentalType::NoAccidental));
            /// assert_eq!(AccidentalType::from_name("FLAT2"), Some(AccidentalType::Flat2));
            /// assert_eq!(AccidentalType::from_name("flat"), None);
            /// ```
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(AccidentalType::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

accidental_types! {
    NoAccidental => "NONE",
    Flat => "FLAT",
    Natural => "NATURAL",
    Sharp => "SHARP",
    Sharp2 => "SHARP2",
    Flat2 => "FLAT2",
    Sharp3 => "SHARP3",
    Flat3 => "FLAT3",
    NaturalFlat => "NATURAL_FLAT",
    NaturalSharp => "NATURAL_SHARP",
    SharpSharp => "SHARP_SHARP",
    FlatArrowUp => "FLAT_ARROW_UP",
    FlatArrowDown => "FLAT_ARROW_DOWN",
    NaturalArrowUp => "NATURAL_ARROW_UP",
    NaturalArrowDown => "NATURAL_ARROW_DOWN",
    SharpArrowUp => "SHARP_ARROW_UP",
    SharpArrowDown => "SHARP_ARROW_DOWN",
    Sharp2ArrowUp => "SHARP2_ARROW_UP",
    Sharp2ArrowDown => "SHARP2_ARROW_DOWN",
    Flat2ArrowUp => "FLAT2_ARROW_UP",
    Flat2ArrowDown => "FLAT2_ARROW_DOWN",
    ArrowDown => "ARROW_DOWN",
    ArrowUp => "ARROW_UP",
    MirroredFlat => "MIRRORED_FLAT",
    MirroredFlat2 => "MIRRORED_FLAT2",
    SharpSlash => "SHARP_SLASH",
    SharpSlash4 => "SHARP_SLASH4",
    FlatSlash2 => "FLAT_SLASH2",
    FlatSlash => "FLAT_SLASH",
    SharpSlash3 => "SHARP_SLASH3",
    SharpSlash2 => "SHARP_SLASH2",
    DoubleFlatOneArrowDown => "DOUBLE_FLAT_ONE_ARROW_DOWN",
    FlatOneArrowDown => "FLAT_ONE_ARROW_DOWN",
    NaturalOneArrowDown => "NATURAL_ONE_ARROW_DOWN",
    SharpOneArrowDown => "SHARP_ONE_ARROW_DOWN",
    DoubleSharpOneArrowDown => "DOUBLE_SHARP_ONE_ARROW_DOWN",
    DoubleFlatOneArrowUp => "DOUBLE_FLAT_ONE_ARROW_UP",
    FlatOneArrowUp => "FLAT_ONE_ARROW_UP",
    NaturalOneArrowUp => "NATURAL_ONE_ARROW_UP",
    SharpOneArrowUp => "SHARP_ONE_ARROW_UP",
    DoubleSharpOneArrowUp => "DOUBLE_SHARP_ONE_ARROW_UP",
    DoubleFlatTwoArrowsDown => "DOUBLE_FLAT_TWO_ARROWS_DOWN",
    FlatTwoArrowsDown => "FLAT_TWO_ARROWS_DOWN",
    NaturalTwoArrowsDown => "NATURAL_TWO_ARROWS_DOWN",
    SharpTwoArrowsDown => "SHARP_TWO_ARROWS_DOWN",
    DoubleSharpTwoArrowsDown => "DOUBLE_SHARP_TWO_ARROWS_DOWN",
    DoubleFlatTwoArrowsUp => "DOUBLE_FLAT_TWO_ARROWS_UP",
    FlatTwoArrowsUp => "FLAT_TWO_ARROWS_UP",
    NaturalTwoArrowsUp => "NATURAL_TWO_ARROWS_UP",
    SharpTwoArrowsUp => "SHARP_TWO_ARROWS_UP",
    DoubleSharpTwoArrowsUp => "DOUBLE_SHARP_TWO_ARROWS_UP",
    DoubleFlatThreeArrowsDown => "DOUBLE_FLAT_THREE_ARROWS_DOWN",
    FlatThreeArrowsDown => "FLAT_THREE_ARROWS_DOWN",
    NaturalThreeArrowsDown => "NATURAL_THREE_ARROWS_DOWN",
    SharpThreeArrowsDown => "SHARP_THREE_ARROWS_DOWN",
    DoubleSharpThreeArrowsDown => "DOUBLE_SHARP_THREE_ARROWS_DOWN",
    DoubleFlatThreeArrowsUp => "DOUBLE_FLAT_THREE_ARROWS_UP",
    FlatThreeArrowsUp => "FLAT_THREE_ARROWS_UP",
    NaturalThreeArrowsUp => "NATURAL_THREE_ARROWS_UP",
    SharpThreeArrowsUp => "SHARP_THREE_ARROWS_UP",
    DoubleSharpThreeArrowsUp => "DOUBLE_SHARP_THREE_ARROWS_UP",
    LowerOneSeptimalComma => "LOWER_ONE_SEPTIMAL_COMMA",
    RaiseOneSeptimalComma => "RAISE_ONE_SEPTIMAL_COMMA",
    LowerTwoSeptimalCommas => "LOWER_TWO_SEPTIMAL_COMMAS",
    RaiseTwoSeptimalCommas => "RAISE_TWO_SEPTIMAL_COMMAS",
    LowerOneUndecimalQuartertone => "LOWER_ONE_UNDECIMAL_QUARTERTONE",
    RaiseOneUndecimalQuartertone => "RAISE_ONE_UNDECIMAL_QUARTERTONE",
    LowerOneTridecimalQuartertone => "LOWER_ONE_TRIDECIMAL_QUARTERTONE",
    RaiseOneTridecimalQuartertone => "RAISE_ONE_TRIDECIMAL_QUARTERTONE",
    DoubleFlatEqualTempered => "DOUBLE_FLAT_EQUAL_TEMPERED",
    FlatEqualTempered => "FLAT_EQUAL_TEMPERED",
    NaturalEqualTempered => "NATURAL_EQUAL_TEMPERED",
    SharpEqualTempered => "SHARP_EQUAL_TEMPERED",
    DoubleSharpEqualTempered => "DOUBLE_SHARP_EQUAL_TEMPERED",
    QuarterFlatEqualTempered => "QUARTER_FLAT_EQUAL_TEMPERED",
    QuarterSharpEqualTempered => "QUARTER_SHARP_EQUAL_TEMPERED",
    Flat17 => "FLAT_17",
    Sharp17 => "SHARP_17",
    Flat19 => "FLAT_19",
    Sharp19 => "SHARP_19",
    Flat23 => "FLAT_23",
    Sharp23 => "SHARP_23",
    Flat31 => "FLAT_31",
    Sharp31 => "SHARP_31",
    Flat53 => "FLAT_53",
    Sharp53 => "SHARP_53",
    Sori => "SORI",
    Koron => "KORON",
    TenTwelfthFlat => "TEN_TWELFTH_FLAT",
    TenTwelfthSharp => "TEN_TWELFTH_SHARP",
    ElevenTwelfthFlat => "ELEVEN_TWELFTH_FLAT",
    ElevenTwelfthSharp => "ELEVEN_TWELFTH_SHARP",
    OneTwelfthFlat => "ONE_TWELFTH_FLAT",
    OneTwelfthSharp => "ONE_TWELFTH_SHARP",
    TwoTwelfthFlat => "TWO_TWELFTH_FLAT",
    TwoTwelfthSharp => "TWO_TWELFTH_SHARP",
    ThreeTwelfthFlat => "THREE_TWELFTH_FLAT",
    ThreeTwelfthSharp => "THREE_TWELFTH_SHARP",
    FourTwelfthFlat => "FOUR_TWELFTH_FLAT",
    FourTwelfthSharp => "FOUR_TWELFTH_SHARP",
    FiveTwelfthFlat => "FIVE_TWELFTH_FLAT",
    FiveTwelfthSharp => "FIVE_TWELFTH_SHARP",
    SixTwelfthFlat => "SIX_TWELFTH_FLAT",
    SixTwelfthSharp => "SIX_TWELFTH_SHARP",
    SevenTwelfthFlat => "SEVEN_TWELFTH_FLAT",
    SevenTwelfthSharp => "SEVEN_TWELFTH_SHARP",
    EightTwelfthFlat => "EIGHT_TWELFTH_FLAT",
    EightTwelfthSharp => "EIGHT_TWELFTH_SHARP",
    NineTwelfthFlat => "NINE_TWELFTH_FLAT",
    NineTwelfthSharp => "NINE_TWELFTH_SHARP",
    Sagittal5v7kd => "SAGITTAL_5V7KD",
    Sagittal5v7ku => "SAGITTAL_5V7KU",
    Sagittal5cd => "SAGITTAL_5CD",
    Sagittal5cu => "SAGITTAL_5CU",
    Sagittal7cd => "SAGITTAL_7CD",
    Sagittal7cu => "SAGITTAL_7CU",
    Sagittal25sdd => "SAGITTAL_25SDD",
    Sagittal25sdu => "SAGITTAL_25SDU",
    Sagittal35mdd => "SAGITTAL_35MDD",
    Sagittal35mdu => "SAGITTAL_35MDU",
    Sagittal11mdd => "SAGITTAL_11MDD",
    Sagittal11mdu => "SAGITTAL_11MDU",
    Sagittal11ldd => "SAGITTAL_11LDD",
    Sagittal11ldu => "SAGITTAL_11LDU",
    Sagittal35ldd => "SAGITTAL_35LDD",
    Sagittal35ldu => "SAGITTAL_35LDU",
    SagittalFlat25su => "SAGITTAL_FLAT25SU",
    SagittalSharp25sd => "SAGITTAL_SHARP25SD",
    SagittalFlat7cu => "SAGITTAL_FLAT7CU",
    SagittalSharp7cd => "SAGITTAL_SHARP7CD",
    SagittalFlat5cu => "SAGITTAL_FLAT5CU",
    SagittalSharp5cd => "SAGITTAL_SHARP5CD",
    SagittalFlat5v7ku => "SAGITTAL_FLAT5V7KU",
    SagittalSharp5v7kd => "SAGITTAL_SHARP5V7KD",
    SagittalFlat => "SAGITTAL_FLAT",
    SagittalSharp => "SAGITTAL_SHARP",
    OneCommaFlat => "ONE_COMMA_FLAT",
    OneCommaSharp => "ONE_COMMA_SHARP",
    TwoCommaFlat => "TWO_COMMA_FLAT",
    TwoCommaSharp => "TWO_COMMA_SHARP",
    ThreeCommaFlat => "THREE_COMMA_FLAT",
    ThreeCommaSharp => "THREE_COMMA_SHARP",
    FourCommaFlat => "FOUR_COMMA_FLAT",
    FiveCommaSharp => "FIVE_COMMA_SHARP",
}

impl AccidentalType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Whether the accidental leaves a nominal at its natural pitch.
    pub fn is_natural(self) -> bool {
        matches!(self, AccidentalType::NoAccidental | AccidentalType::Natural)
    }
}

impl Display for AccidentalType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for AccidentalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccidentalType::from_name(s).ok_or_else(|| format!("Unknown accidental type `{}`", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_enumeration_order() {
        assert_eq!(AccidentalType::ALL.len(), 144);

        assert_eq!(AccidentalType::NoAccidental.code(), 0);
        assert_eq!(AccidentalType::Flat.code(), 1);
        assert_eq!(AccidentalType::Natural.code(), 2);
        assert_eq!(AccidentalType::Sharp.code(), 3);
        assert_eq!(AccidentalType::Sharp2.code(), 4);
        assert_eq!(AccidentalType::Flat2.code(), 5);
        assert_eq!(AccidentalType::FiveCommaSharp.code(), 143);

        for (index, &accidental) in AccidentalType::ALL.iter().enumerate() {
            assert_eq!(usize::from(accidental.code()), index);
            assert_eq!(
                AccidentalType::from_code(accidental.code()),
                Some(accidental)
            );
        }
        assert_eq!(AccidentalType::from_code(144), None);
    }

    #[test]
    fn names_are_unique_and_resolvable() {
        for &accidental in AccidentalType::ALL {
            assert_eq!(
                AccidentalType::from_name(accidental.name()),
                Some(accidental)
            );
            assert_eq!(accidental.name().parse::<AccidentalType>(), Ok(accidental));
        }

        assert_eq!(AccidentalType::SharpOneArrowUp.name(), "SHARP_ONE_ARROW_UP");
        assert_eq!(AccidentalType::Sagittal5v7kd.name(), "SAGITTAL_5V7KD");
        assert_eq!(
            AccidentalType::QuarterFlatEqualTempered.to_string(),
            "QUARTER_FLAT_EQUAL_TEMPERED"
        );
    }

    #[test]
    fn reject_unknown_names() {
        assert_eq!(AccidentalType::from_name(""), None);
        assert_eq!(AccidentalType::from_name("DOUBLE_SHARP"), None);
        assert_eq!(AccidentalType::from_name(" FLAT"), None);
        assert_eq!(
            "SHARP4".parse::<AccidentalType>(),
            Err("Unknown accidental type `SHARP4`".to_owned())
        );
    }

    #[test]
    fn natural_accidentals() {
        assert!(AccidentalType::NoAccidental.is_natural());
        assert!(AccidentalType::Natural.is_natural());
        assert!(!AccidentalType::Flat.is_natural());
        assert!(!AccidentalType::NaturalArrowUp.is_natural());
    }
}

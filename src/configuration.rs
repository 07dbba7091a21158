//! Loading tuning files and answering offset queries during playback.

use crate::accidental::AccidentalType;
use crate::definition::ScaleDefinition;
use crate::error::{LookupError, TuningError};
use crate::offset::OffsetMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A tuning loaded from a tuning file.
///
/// A configuration is immutable once it has been created. To apply a different tuning file, create a new configuration and replace the old one, e.g. behind an [`Arc`](std::sync::Arc).
///
/// The [`Default`] configuration is invalid and leaves every pitch untouched.
#[derive(Clone, Debug, Default)]
pub struct TuningConfiguration {
    name: String,
    offset_map: Option<OffsetMap>,
}

impl TuningConfiguration {
    /// Loads the tuning file at `path`.
    ///
    /// This function never fails. If the tuning file cannot be loaded, the reason is logged and an invalid configuration is returned.
    pub fn init(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(configuration) => configuration,
            Err(err) => {
                log::error!("Could not load tuning {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let configuration = Self::import(BufReader::new(File::open(path)?))?;
        log::info!(
            "Loaded tuning '{}' from {}",
            configuration.name,
            path.display()
        );
        Ok(configuration)
    }

    pub fn import(reader: impl Read) -> Result<Self, TuningError> {
        Self::from_definition(&ScaleDefinition::import(reader)?)
    }

    pub fn from_definition(definition: &ScaleDefinition) -> Result<Self, TuningError> {
        let offset_map = OffsetMap::build(definition)?;
        Ok(Self {
            name: definition.name.clone().unwrap_or_default(),
            offset_map: Some(offset_map),
        })
    }

    pub fn valid(&self) -> bool {
        self.offset_map.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset_map(&self) -> Option<&OffsetMap> {
        self.offset_map.as_ref()
    }

    /// Calculates the offset in cents to apply to the sounding `pitch` notated with tonal pitch class `tpc`.
    ///
    /// Lookups that cannot be answered exactly are logged and degrade to the natural offset of the nominal or to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use assert_approx_eq::assert_approx_eq;
    /// # use retune::accidental::AccidentalType;
    /// # use retune::configuration::TuningConfiguration;
    /// let tuning = br#"{
    ///     "name": "Pythagorean",
    ///     "map": [
    ///         { "NONE": "2" },
    ///         { "NONE": "9/8" },
    ///         { "NONE": "81/64" },
    ///         { "NONE": "4/3" },
    ///         { "NONE": "3/2" },
    ///         { "NONE": "27/16" },
    ///         { "NONE": "243/128" }
    ///     ]
    /// }"#;
    ///
    /// let configuration = TuningConfiguration::import(&tuning[..]).unwrap();
    ///
    /// assert_eq!(configuration.name(), "Pythagorean");
    /// // E4
    /// assert_approx_eq!(configuration.get_offset(64, 18, AccidentalType::NoAccidental), 7.820_003);
    /// // An invalid tuning does not affect E4
    /// assert_eq!(TuningConfiguration::default().get_offset(64, 18, AccidentalType::NoAccidental), 0.0);
    /// ```
    pub fn get_offset(&self, pitch: i32, tpc: i32, accidental: AccidentalType) -> f64 {
        self.try_get_offset(pitch, tpc, accidental)
            .unwrap_or_else(|err| {
                if err != LookupError::InvalidConfiguration {
                    log::warn!("{}", err);
                }
                err.fallback_offset()
            })
    }

    pub fn try_get_offset(
        &self,
        pitch: i32,
        tpc: i32,
        accidental: AccidentalType,
    ) -> Result<f64, LookupError> {
        self.offset_map
            .as_ref()
            .ok_or(LookupError::InvalidConfiguration)?
            .offset_of(pitch, tpc, accidental)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use assert_approx_eq::assert_approx_eq;
    use std::{env, fs, process, sync::Arc, thread};
    use AccidentalType::{Flat, Natural, NoAccidental};

    const JUST_INTONATION: &str = r#"{
        "name": "5-limit JI",
        "map": [
            { "NONE": "2/1" },
            { "NONE": "9/8" },
            { "NONE": "5/4", "FLAT": "6/5" },
            { "NONE": "4/3" },
            { "NONE": "3/2" },
            { "NONE": "5/3", "FLAT": "8/5" },
            { "NONE": "15/8", "FLAT": "9/5" }
        ],
        "root": [0, 60]
    }"#;

    #[test]
    fn import_valid_tuning() {
        let configuration = TuningConfiguration::import(JUST_INTONATION.as_bytes()).unwrap();

        assert!(configuration.valid());
        assert_eq!(configuration.name(), "5-limit JI");
        assert_approx_eq!(configuration.offset_map().unwrap().period(), 1200.0);
        assert_approx_eq!(configuration.get_offset(64, 18, NoAccidental), -13.686_286);
        assert_approx_eq!(configuration.get_offset(64, 18, Natural), -13.686_286);
        assert_approx_eq!(configuration.get_offset(63, 11, NoAccidental), 15.641_287);
        assert_approx_eq!(configuration.get_offset(68, 10, NoAccidental), 13.686_286);
    }

    #[test]
    fn unnamed_tuning() {
        let configuration =
            TuningConfiguration::import(&br#"{ "map": [{ "NONE": "2" }] }"#[..]).unwrap();

        assert!(configuration.valid());
        assert_eq!(configuration.name(), "");
    }

    #[test]
    fn invalid_configuration_leaves_pitches_untouched() {
        let configuration = TuningConfiguration::default();

        assert!(!configuration.valid());
        assert_eq!(configuration.name(), "");
        assert!(configuration.offset_map().is_none());
        assert_eq!(configuration.get_offset(64, 18, NoAccidental), 0.0);
        assert_eq!(configuration.get_offset(63, 11, Flat), 0.0);
        assert_eq!(
            configuration.try_get_offset(64, 18, NoAccidental),
            Err(LookupError::InvalidConfiguration)
        );
    }

    #[test]
    fn degraded_lookups() {
        let configuration = TuningConfiguration::import(JUST_INTONATION.as_bytes()).unwrap();

        // Db4 is not mapped, so the offset of D4 applies
        assert_approx_eq!(configuration.get_offset(61, 9, NoAccidental), 100.0 + 3.910_002);
        assert!(matches!(
            configuration.try_get_offset(61, 9, NoAccidental),
            Err(LookupError::UnmappedAccidental { nominal: 62, .. })
        ));

        // C#4 spelled as a natural is not on the keyboard
        assert_eq!(configuration.get_offset(61, 14, NoAccidental), 0.0);
        assert_eq!(
            configuration.try_get_offset(61, 14, NoAccidental),
            Err(LookupError::NominalOutOfRange { nominal: 61 })
        );
    }

    #[test]
    fn extreme_pitches_are_not_retuned() {
        let configuration = TuningConfiguration::import(JUST_INTONATION.as_bytes()).unwrap();

        assert_eq!(configuration.get_offset(i32::MAX, 10, NoAccidental), 0.0);
        assert_eq!(configuration.get_offset(i32::MIN, 35, NoAccidental), 0.0);
        assert_eq!(configuration.get_offset(i32::MIN, 2, Flat), 0.0);
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let configuration = TuningConfiguration::import(JUST_INTONATION.as_bytes()).unwrap();

        let first = configuration.get_offset(70, 12, NoAccidental);
        for _ in 0..10 {
            assert_eq!(configuration.get_offset(70, 12, NoAccidental), first);
        }
    }

    #[test]
    fn missing_period_invalidates_tuning() {
        let result = TuningConfiguration::import(
            &br#"{ "map": [{ "FLAT": "2" }, { "NONE": "9/8" }] }"#[..],
        );

        assert!(matches!(
            result,
            Err(TuningError::MalformedDocument(DocumentError::PeriodMissing))
        ));
    }

    #[test]
    fn unknown_accidental_invalidates_tuning() {
        let result = TuningConfiguration::import(
            &br#"{ "map": [{ "NONE": "2", "SUPER_SHARP": "25/24" }] }"#[..],
        );

        assert!(matches!(
            result,
            Err(TuningError::UnknownAccidental(name)) if name == "SUPER_SHARP"
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = env::temp_dir();
        let valid_file = dir.join(format!("retune-{}-valid.json", process::id()));
        let invalid_file = dir.join(format!("retune-{}-invalid.json", process::id()));
        fs::write(&valid_file, JUST_INTONATION).unwrap();
        fs::write(&invalid_file, r#"{ "map": [{ "NONE": "2", "SUPER_SHARP": "25/24" }] }"#)
            .unwrap();

        let configuration = TuningConfiguration::init(&valid_file);
        assert!(configuration.valid());
        assert_eq!(configuration.name(), "5-limit JI");

        let configuration = TuningConfiguration::init(&invalid_file);
        assert!(!configuration.valid());
        assert_eq!(configuration.get_offset(64, 18, NoAccidental), 0.0);

        fs::remove_file(valid_file).unwrap();
        fs::remove_file(invalid_file).unwrap();
    }

    #[test]
    fn load_missing_file() {
        let missing_file = env::temp_dir().join("retune-this-file-does-not-exist.json");

        assert!(matches!(
            TuningConfiguration::load(&missing_file),
            Err(TuningError::FileUnreadable(_))
        ));

        let configuration = TuningConfiguration::init(&missing_file);
        assert!(!configuration.valid());
        assert_eq!(configuration.get_offset(60, 14, NoAccidental), 0.0);
    }

    #[test]
    fn share_between_threads() {
        let configuration =
            Arc::new(TuningConfiguration::import(JUST_INTONATION.as_bytes()).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let configuration = configuration.clone();
                thread::spawn(move || configuration.get_offset(64, 18, NoAccidental))
            })
            .collect();

        for handle in handles {
            assert_approx_eq!(handle.join().unwrap(), -13.686_286);
        }
    }
}

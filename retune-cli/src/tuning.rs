use std::path::{Path, PathBuf};

use clap::Parser;
use retune::{accidental::AccidentalType, TuningConfiguration};

use crate::{
    dto::{OffsetsDto, RetuneDto},
    error::ResultExt,
    App, CliError, CliResult,
};

#[derive(Parser)]
pub(crate) struct DumpOptions {
    /// Location of the tuning file
    tuning_file: PathBuf,

    /// Lower key bound (inclusive)
    #[arg(long = "lo-key", default_value = "0")]
    lower_key_bound: i32,

    /// Upper key bound (exclusive)
    #[arg(long = "up-key", default_value = "128")]
    upper_key_bound: i32,
}

impl DumpOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let configuration = load_tuning(&self.tuning_file)?;
        let offset_map = configuration
            .offset_map()
            .ok_or_else(|| format!("Tuning {} is not valid", self.tuning_file.display()))?;

        let dump = OffsetsDto::from_offset_map(configuration.name(), offset_map, |nominal| {
            (self.lower_key_bound..self.upper_key_bound).contains(&nominal)
        });

        let dto = RetuneDto::Offsets(dump);

        let yaml = serde_yaml::to_string(&dto).handle_error::<CliError>("Could not write offsets")?;
        app.writeln(yaml.trim_end())?;
        Ok(())
    }
}

#[derive(Parser)]
pub(crate) struct OffsetOptions {
    /// Location of the tuning file
    tuning_file: PathBuf,

    /// MIDI number of the sounding pitch, e.g. 63
    pitch: i32,

    /// Tonal pitch class of the notated pitch, e.g. 11 for Eb
    #[arg(allow_negative_numbers = true)]
    tpc: i32,

    /// Accidental the pitch is notated with, e.g. FLAT
    #[arg(long = "acc", default_value = "NONE")]
    accidental: AccidentalType,
}

impl OffsetOptions {
    pub fn run(&self, app: &mut App) -> CliResult {
        let configuration = load_tuning(&self.tuning_file)?;

        let offset = match configuration.try_get_offset(self.pitch, self.tpc, self.accidental) {
            Ok(offset) => offset,
            Err(err) => {
                app.errln(format_args!("Warning: {}", err))?;
                err.fallback_offset()
            }
        };

        app.writeln(format_args!("{:.3}", offset))?;
        Ok(())
    }
}

fn load_tuning(location: &Path) -> CliResult<TuningConfiguration> {
    log::debug!("Reading tuning file {}", location.display());
    TuningConfiguration::load(location).handle_error("Could not load tuning file")
}

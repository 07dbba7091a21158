mod dto;
mod error;
mod tuning;

use std::{
    fmt::{self, Debug, Display},
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use retune::accidental::AccidentalType;
use tuning::{DumpOptions, OffsetOptions};

#[derive(Parser)]
#[command(name = "retune", version, about)]
struct MainOptions {
    /// Write output to a file instead of stdout
    #[arg(long = "of")]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Parser)]
enum MainCommand {
    /// Display the offsets a tuning file applies to every nominal
    #[command(name = "dump")]
    Dump(DumpOptions),

    /// Print the offset in cents a tuning file applies to a notated pitch
    #[command(name = "offset")]
    Offset(OffsetOptions),

    /// List the accidentals that can be used in tuning files
    #[command(name = "accidentals")]
    Accidentals,
}

impl MainOptions {
    fn run(self) -> CliResult {
        let stdout = io::stdout();
        let output: Box<dyn Write> = match self.output_file {
            Some(output_file) => Box::new(File::create(output_file)?),
            None => Box::new(stdout.lock()),
        };

        let stderr = io::stderr();
        let error = Box::new(stderr.lock());

        let mut app = App { output, error };

        self.command.run(&mut app)
    }
}

impl MainCommand {
    fn run(self, app: &mut App) -> CliResult {
        match self {
            MainCommand::Dump(options) => options.run(app)?,
            MainCommand::Offset(options) => options.run(app)?,
            MainCommand::Accidentals => print_accidentals(app)?,
        }
        Ok(())
    }
}

fn print_accidentals(app: &mut App) -> io::Result<()> {
    for accidental in AccidentalType::ALL {
        app.writeln(format_args!("{:>3} {}", accidental.code(), accidental))?;
    }
    Ok(())
}

pub fn run_in_shell_env(args: impl IntoIterator<Item = String>) -> CliResult {
    let options = match MainOptions::try_parse_from(args) {
        Err(err) => {
            return if err.use_stderr() {
                Err(CliError::CommandError(err.to_string()))
            } else {
                print!("{}", err);
                Ok(())
            };
        }
        Ok(options) => options,
    };

    options.run()
}

struct App<'a> {
    output: Box<dyn 'a + Write>,
    error: Box<dyn 'a + Write>,
}

impl App<'_> {
    pub fn writeln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.output, "{}", message)
    }

    pub fn errln(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(&mut self.error, "{}", message)
    }
}

pub type CliResult<T = ()> = Result<T, CliError>;

pub enum CliError {
    IoError(io::Error),
    CommandError(String),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError(err) => write!(f, "Could not write output: {}", err),
            CliError::CommandError(err) => write!(f, "{}", err),
        }
    }
}

impl From<String> for CliError {
    fn from(v: String) -> Self {
        CliError::CommandError(v)
    }
}

impl From<io::Error> for CliError {
    fn from(v: io::Error) -> Self {
        CliError::IoError(v)
    }
}

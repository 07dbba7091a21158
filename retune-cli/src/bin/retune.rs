use std::{env, io::ErrorKind};

use retune_cli::{CliError, CliResult};

fn main() -> CliResult {
    env_logger::init();

    match retune_cli::run_in_shell_env(env::args()) {
        // The reading end of a pipe closed early, e.g. `retune accidentals | head`
        Err(CliError::IoError(err)) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

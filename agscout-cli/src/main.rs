//! Entry point for the `agscout` command-line interface.
#![forbid(unsafe_code)]

use agscout_cli::CliError;

fn main() {
    env_logger::init();
    match agscout_cli::run() {
        Ok(()) => {}
        // Help and version output are not failures.
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("agscout: {err}");
            std::process::exit(1);
        }
    }
}

/*!
 * Command-line interface for lsl
 */

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use lsl::config::{Args, Config, PROGRAM_NAME};
use lsl::lister::Lister;

/// Environment variable holding the log filter
const LOG_ENV: &str = "LSL_LOG";

fn main() -> ExitCode {
    // Logging stays off unless asked for, stderr carries diagnostics
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::from_invocation(std::env::args_os());
    let config = match Config::from_args(args).with_env_overrides() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", PROGRAM_NAME, e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let lister = Lister::new(config);
    match lister.run(BufWriter::new(stdout.lock()), stderr.lock()) {
        Ok(summary) => {
            tracing::debug!(?summary, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", PROGRAM_NAME, e);
            ExitCode::FAILURE
        }
    }
}

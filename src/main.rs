//! mediadupe - Media Duplicate File Finder
//!
//! Entry point for the mediadupe CLI application. The process always exits
//! with status 0.

use clap::error::ErrorKind;
use clap::Parser;
use mediadupe::cli::{Cli, USAGE};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return;
        }
        Err(_) => {
            // Malformed arguments fall back to the usage message.
            print!("{}", USAGE);
            return;
        }
    };

    mediadupe::logging::init_logging(cli.verbose, cli.quiet);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    if let Err(err) = mediadupe::run_app(&cli, stdout.lock(), stderr.lock()) {
        eprintln!("Error: {:#}", err);
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "reverse-lines",
    about = "Write the lines of a file in reverse order",
    version
)]
struct Cli {
    /// File to read
    input: PathBuf,
    /// File to write
    output: PathBuf,
    /// Log each step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match linkseq::reverse_file(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(input = %cli.input.display(), "{err}");
            ExitCode::FAILURE
        }
    }
}

/*!
 * Command-line interface for dir2h
 */

use std::io::{self, BufWriter};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dir2h::config::{Args, Config};

fn main() -> io::Result<()> {
    // Logs go to stderr, stdout carries the generated header
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_args(args);

    let stdout = io::stdout();
    dir2h::generate(&config, BufWriter::new(stdout.lock()))?;

    Ok(())
}

//! Prints a greeting.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::debug;
use utilkit::{exit_codes, greet, logging};

#[derive(Parser)]
#[command(name = "utilkit", version, about = "Print a greeting")]
struct Cli {
    /// Who to greet.
    #[arg(default_value = "World")]
    name: String,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    debug!(name = %cli.name, "greeting");
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", greet(&cli.name))?;
    Ok(())
}

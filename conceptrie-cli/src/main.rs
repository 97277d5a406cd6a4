//! `conceptrie` command-line entry point

use clap::Parser;
use conceptrie_cli::commands::Commands;

/// Extract dictionary concepts from token files
#[derive(Debug, Parser)]
#[command(name = "conceptrie", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

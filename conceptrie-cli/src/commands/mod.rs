//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

use crate::output::OutputFormat;

pub mod extract;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract dictionary concepts from token files
    Extract(extract::ExtractArgs),

    /// Check a dictionary file and report trie statistics
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write the default configuration as TOML
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    fn render(&self) -> String {
        match self {
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|format| {
                    format
                        .to_possible_value()
                        .map(|value| format!("{:<10} {}\n", value.get_name(), format.description()))
                })
                .collect(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_formats_names_every_format() {
        let listing = ListCommands::Formats.render();

        assert!(listing.contains("text"));
        assert!(listing.contains("json"));
        assert!(listing.contains("markdown"));
        assert_eq!(listing.lines().count(), 3);
    }

    #[test]
    fn test_list_command_executes() {
        let cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(cmd.execute().is_ok());
    }
}

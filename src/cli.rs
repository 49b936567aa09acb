use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::formatting::ColorMode;
use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "vidalyzer")]
#[command(about = "Video platform console with comment sentiment analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: nearest .vidalyzer.toml)
    #[arg(long, global = true, env = "VIDALYZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// When to use colored output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (default)
    Interactive,

    /// Run a scripted scenario and print its analysis
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize a configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }

    /// Default log directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

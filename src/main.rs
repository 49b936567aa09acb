use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vidalyzer::cli::{Cli, Commands};
use vidalyzer::commands::{self, Session};
use vidalyzer::config::{self, VidalyzerConfig};
use vidalyzer::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.selected_command() {
        Commands::Init { force } => commands::init_config(force),
        Commands::Demo { format } => {
            let config = load_config(&cli)?;
            let formatting = formatting_for(&cli, &config);
            let stdout = io::stdout();
            commands::run_demo(&config, formatting, format, &mut stdout.lock())
        }
        Commands::Interactive => {
            let config = load_config(&cli)?;
            let formatting = formatting_for(&cli, &config);
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(&config, formatting, stdin.lock(), stdout.lock())
                .run()
                .context("Interactive session failed")
        }
    }
}

/// Logs go to stderr so they never interleave with the menu transcript.
/// `RUST_LOG` wins over `-v`.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<VidalyzerConfig> {
    match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(config::load_config()),
    }
}

fn formatting_for(cli: &Cli, config: &VidalyzerConfig) -> FormattingConfig {
    FormattingConfig::from_env(cli.color.unwrap_or(config.display.color))
}

//! Configuration from `.vidalyzer.toml`.
//!
//! Every section is optional. A file found by walking up from the working
//! directory is best-effort; a file named on the command line must load.

mod core;
mod loader;

pub use self::core::{is_valid_date_format, AnalysisSettings, DisplaySettings, ExportSettings, SessionSettings, VidalyzerConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Commented default written by `vidalyzer init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Vidalyzer Configuration

[analysis]
# Identity recorded on the analyzer used for every analysis run
analyzer_id = "analyzer_1"
method = "sentiment_analysis"

[display]
# auto | always | never (NO_COLOR in the environment always wins)
color = "auto"
date_format = "%Y-%m-%d"

[session]
# Wait for Enter after each menu command
pause_after_command = false

[export]
# Directory where saved analysis results are written
results_dir = "."
"#;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatting::ColorMode;

/// Root configuration structure for vidalyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct VidalyzerConfig {
    /// Analyzer identity
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Terminal output
    #[serde(default)]
    pub display: DisplaySettings,

    /// Interactive menu behaviour
    #[serde(default)]
    pub session: SessionSettings,

    /// Where saved analysis results go
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    pub analyzer_id: String,
    pub method: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            analyzer_id: "analyzer_1".to_string(),
            method: "sentiment_analysis".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    pub color: ColorMode,
    /// chrono format string for registration and upload dates
    pub date_format: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSettings {
    /// Wait for Enter after every command
    pub pause_after_command: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportSettings {
    pub results_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("."),
        }
    }
}

impl VidalyzerConfig {
    /// Reject values that would break the session later on.
    pub fn validate(&self) -> Result<(), String> {
        if self.analysis.analyzer_id.trim().is_empty() {
            return Err("analysis.analyzer_id must not be empty".to_string());
        }
        if self.analysis.method.trim().is_empty() {
            return Err("analysis.method must not be empty".to_string());
        }
        if self.display.date_format.trim().is_empty() {
            return Err("display.date_format must not be empty".to_string());
        }
        if !is_valid_date_format(&self.display.date_format) {
            return Err(format!(
                "display.date_format {:?} is not a valid strftime format",
                self.display.date_format
            ));
        }
        Ok(())
    }
}

/// True when chrono can render every specifier in `format`.
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

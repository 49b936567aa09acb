//! Terminal colour policy and the styling primitives renderers build on.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

use crate::analysis::{QualityScore, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout_supports_color(),
        }
    }
}

fn stdout_supports_color() -> bool {
    std::io::stdout().is_terminal() && env::var("TERM").map_or(true, |term| term != "dumb")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// `requested` adjusted by `NO_COLOR` and `CLICOLOR_FORCE`.
    pub fn from_env(requested: ColorMode) -> Self {
        Self::resolve(
            requested,
            env::var_os("NO_COLOR").is_some(),
            env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1"),
        )
    }

    /// NO_COLOR beats everything, including CLICOLOR_FORCE.
    pub fn resolve(requested: ColorMode, no_color: bool, force: bool) -> Self {
        let color = if no_color {
            ColorMode::Never
        } else if force {
            ColorMode::Always
        } else {
            requested
        };
        Self::new(color)
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    /// Score text coloured by the recommendation tier it falls into.
    fn score(&self, score: QualityScore) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn score(&self, score: QualityScore) -> String {
        let text = score.to_string();
        match Recommendation::from_score(score) {
            Recommendation::HighlyRecommended => self.paint(&text, |t| t.green().bold()),
            Recommendation::Recommended => self.paint(&text, |t| t.green()),
            Recommendation::Mixed => self.paint(&text, |t| t.yellow()),
            Recommendation::NotRecommended => self.paint(&text, |t| t.red()),
        }
    }
}

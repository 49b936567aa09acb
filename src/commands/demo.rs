//! Scripted walkthrough: two users, one video, three comments, one analysis.

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::VidalyzerConfig;
use crate::core::UserKind;
use crate::formatting::{ColoredFormatter, FormattingConfig};
use crate::io::{analysis_summary_json, OutputFormat, TerminalRenderer};
use crate::platform::{NewVideo, Platform};

const DEMO_VIDEO: &str = "v1";

const DEMO_COMMENTS: [(&str, &str, &str); 3] = [
    ("c1", "u2", "This is great, I love it!"),
    ("c2", "u2", "Not bad but could be better"),
    ("c3", "u1", "Terrible content, worst ever"),
];

/// Build the demo platform state without analysing anything.
pub fn seed_demo(config: &VidalyzerConfig) -> Result<Platform> {
    let mut platform = Platform::new(&config.analysis);
    platform.create_user(UserKind::Creator, "u1", "alice", "alice@example.com")?;
    platform.create_user(UserKind::Viewer, "u2", "bob", "bob@example.com")?;
    platform.create_video(
        "u1",
        NewVideo {
            id: DEMO_VIDEO.to_string(),
            title: "Demo Video".to_string(),
            url: "http://example.com/v1".to_string(),
            duration_secs: 300,
            category: "Education".to_string(),
        },
    )?;
    for (id, author, content) in DEMO_COMMENTS {
        platform.create_comment(DEMO_VIDEO, author, id, content)?;
    }
    Ok(platform)
}

pub fn run_demo(
    config: &VidalyzerConfig,
    formatting: FormattingConfig,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut platform = seed_demo(config)?;
    let report = platform.report(DEMO_VIDEO)?;
    platform.analyze_video(DEMO_VIDEO)?;

    let video = platform.video(DEMO_VIDEO)?;
    let result = platform.analysis_result(DEMO_VIDEO)?;
    match format {
        OutputFormat::Json => {
            writeln!(
                out,
                "{}",
                analysis_summary_json(video, result, platform.analyzer())?
            )?;
        }
        OutputFormat::Text => {
            let formatter = ColoredFormatter::new(formatting);
            let renderer = TerminalRenderer::new(&formatter, &config.display.date_format);
            writeln!(out, "{report}")?;
            writeln!(out, "{}", renderer.analysis_result(result))?;
        }
    }
    out.flush().context("Failed to flush demo output")?;
    Ok(())
}

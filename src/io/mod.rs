pub mod writers;

pub use writers::{analysis_summary_json, TerminalRenderer};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Write `<video_id>_<result_id>.txt` into `dir` and return its path.
///
/// Result ids are millisecond timestamps, so the video id keeps results of
/// different videos analysed in the same millisecond apart.
pub fn export_result(result: &AnalysisResult, video_id: &str, dir: &Path) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("{video_id}_{}.txt", result.result_id()));
    write_file(&path, &result.to_export_text())?;
    tracing::info!(path = %path.display(), "Saved analysis result");
    Ok(path)
}

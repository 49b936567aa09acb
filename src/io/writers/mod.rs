pub mod json;
pub mod terminal;

pub use json::analysis_summary_json;
pub use terminal::TerminalRenderer;

//! CLI command implementations for vidalyzer.
//!
//! Available commands:
//! - **interactive**: Menu-driven session over stdin/stdout (the default)
//! - **demo**: Scripted walkthrough ending in one analysis
//! - **init**: Write a default `.vidalyzer.toml`

pub mod demo;
pub mod init;
pub mod interactive;
pub mod menu;

pub use demo::{run_demo, seed_demo};
pub use init::{init_config, init_config_in};
pub use interactive::Session;
pub use menu::MenuChoice;

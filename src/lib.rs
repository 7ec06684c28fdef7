// raidcheck library - public API

// Re-export error types
pub mod error;
pub use error::{RaidError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use crate::core::{evaluate, CheckConfig, ExitState, RawOutputBundle, Verdict};

// Initialize logging. Stdout carries the verdict, so only warnings and
// above reach stderr unless RUST_LOG asks for more.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

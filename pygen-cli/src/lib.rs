//! # pygen-cli
//!
//! CLI library for working with pygen IR documents on disk.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`loader`] - Reading and decoding IR documents
//! - [`commands`] - `check`, `fmt` and `render` implementations
//! - [`writer`] - File output and dry-run support
//! - [`error`] - Error types and handling

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use loader::{load_module, read_document};
pub use writer::FileWriter;

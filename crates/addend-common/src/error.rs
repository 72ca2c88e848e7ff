//! Error types for the addend demonstrations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for addend operations.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Errors that can occur while running a demonstration.
#[derive(Error, Debug, Diagnostic)]
pub enum DemoError {
    /// Writing to the output stream failed.
    #[error("Failed to write output: {0}")]
    #[diagnostic(code(addend::output))]
    Output(#[from] std::io::Error),

    /// Failed to read a configuration file.
    #[error("Failed to read config file {}: {source}", path.display())]
    #[diagnostic(code(addend::read_config))]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    #[diagnostic(
        code(addend::parse_config),
        help("expected an integer array `values` and an integer `addend`")
    )]
    ParseConfig(#[from] toml::de::Error),
}

//! Error type shared by CLI commands.

use std::path::PathBuf;

use thiserror::Error;
use vitrine_core::CurrencyError;

use crate::config::ConfigError;

/// Command-level error type for the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file did not hold a cart in an accepted shape.
    #[error("Invalid cart JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Merged output could not be encoded.
    #[error("Failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// Unknown currency code on the command line.
    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VITRINE_CURRENCY` - Currency for formatted totals (default: USD)
//! - `VITRINE_PRETTY_JSON` - Pretty-print merged carts (default: false)
//! - `RUST_LOG` - Log filter (default: `vitrine_cli=info`)
//!
//! Command-line flags take precedence over these values.

use thiserror::Error;
use vitrine_core::CurrencyCode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Currency used when formatting cart totals
    pub currency: CurrencyCode,
    /// Whether merged carts are written pretty-printed
    pub pretty_json: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let currency = get_env_or_default("VITRINE_CURRENCY", "USD")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_CURRENCY".to_string(), e.to_string()))?;
        let pretty_json = parse_bool(
            "VITRINE_PRETTY_JSON",
            &get_env_or_default("VITRINE_PRETTY_JSON", "false"),
        )?;

        Ok(Self {
            currency,
            pretty_json,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a boolean flag value (`true`/`false`, `1`/`0`, `yes`/`no`).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

//! Vitrine CLI - Cart hydration and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Merge a client-held cart with the server cart
//! vt-cli cart merge --local local.json --remote remote.json --output merged.json
//!
//! # Show totals of a merged cart
//! vt-cli cart summary --input merged.json
//!
//! # Emit JSON logs (to stderr)
//! vt-cli --log-format json cart merge -l local.json -r remote.json
//! ```
//!
//! # Commands
//!
//! - `cart merge` - Reconcile a local cart against the server cart
//! - `cart summary` - Print line count, item count and subtotal

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine_core::CurrencyCode;

mod commands;
mod config;
mod error;

use config::CliConfig;
use error::CliError;

#[derive(Parser)]
#[command(name = "vt-cli")]
#[command(author, version, about = "Vitrine cart tools")]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with cart snapshots
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Merge a local cart with the server cart (server wins on conflict)
    Merge {
        /// Local cart JSON (array, `{"items": [...]}` or persisted store state)
        #[arg(short, long)]
        local: PathBuf,

        /// Server cart JSON (array or `{"items": [...]}`)
        #[arg(short, long)]
        remote: PathBuf,

        /// Write the merged cart here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the merged cart
        #[arg(long)]
        pretty: bool,
    },
    /// Print totals of a merged cart
    Summary {
        /// Merged cart JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Currency code for the subtotal (USD, EUR, GBP, CAD, AUD, BRL)
        #[arg(short, long)]
        currency: Option<String>,
    },
}

/// Initialize tracing on stderr; stdout is reserved for command output.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_cli=info".into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_env()?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Merge {
                local,
                remote,
                output,
                pretty,
            } => {
                commands::cart::merge(
                    &local,
                    &remote,
                    output.as_deref(),
                    pretty || config.pretty_json,
                )
                .await?;
            }
            CartAction::Summary { input, currency } => {
                let currency = match currency {
                    Some(code) => code.parse::<CurrencyCode>()?,
                    None => config.currency,
                };
                commands::cart::summary(&input, currency).await?;
            }
        },
    }
    Ok(())
}

//! Cart hydration and inspection commands.
//!
//! # Usage
//!
//! ```bash
//! # Merge a client cart with the server cart, writing to stdout
//! vt-cli cart merge --local local.json --remote remote.json
//!
//! # Write the merged cart to a file, pretty-printed
//! vt-cli cart merge -l local.json -r remote.json -o merged.json --pretty
//!
//! # Show totals of a merged cart
//! vt-cli cart summary --input merged.json --currency BRL
//! ```

use std::path::Path;

use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};
use vitrine_core::CurrencyCode;
use vitrine_core::cart::{
    CartSummary, LocalSnapshot, MergedCartLine, MergedSnapshot, Reconciliation, RemoteSnapshot,
    reconcile,
};

use crate::error::CliError;

/// Merge a local cart file with a remote cart file.
///
/// The merged lines are written as a JSON array to `output`, or to stdout
/// when no output path is given.
///
/// # Errors
///
/// Returns an error if either input cannot be read or parsed, or the output
/// cannot be written.
#[instrument(skip_all, fields(local = %local.display(), remote = %remote.display()))]
pub async fn merge(
    local: &Path,
    remote: &Path,
    output: Option<&Path>,
    pretty: bool,
) -> Result<Reconciliation, CliError> {
    let local_lines = read_json(local, LocalSnapshot::from_json)
        .await?
        .into_lines();
    let remote_lines = read_json(remote, RemoteSnapshot::from_json)
        .await?
        .into_lines();

    info!(
        local_lines = local_lines.len(),
        remote_lines = remote_lines.len(),
        "Loaded carts"
    );

    let report = reconcile(&local_lines, &remote_lines);
    log_report(&report);

    let encoded = encode_lines(&report.lines, pretty)?;
    match output {
        Some(path) => {
            tokio::fs::write(path, &encoded)
                .await
                .map_err(|source| CliError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!(path = %path.display(), "Merged cart written");
        }
        None => write_stdout(&encoded).await?,
    }

    Ok(report)
}

/// Print totals of a merged cart file.
///
/// The totals are logged and written to stdout as one JSON object.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or stdout cannot
/// be written.
#[instrument(skip_all, fields(input = %input.display(), currency = %currency))]
pub async fn summary(input: &Path, currency: CurrencyCode) -> Result<CartSummary, CliError> {
    let lines = read_json(input, MergedSnapshot::from_json)
        .await?
        .into_lines();
    let summary = CartSummary::from_lines(&lines);

    info!("Cart Summary");
    info!("============");
    info!("Lines: {}", summary.line_count);
    info!("Items: {}", summary.item_count);
    info!("Subtotal: {}", summary.subtotal(currency));

    write_stdout(&encode_summary(&summary, currency)?).await?;
    Ok(summary)
}

/// Totals as written to stdout by `cart summary`.
#[derive(Debug, Serialize)]
struct SummaryOutput {
    line_count: usize,
    item_count: i64,
    subtotal_minor: i64,
    subtotal: String,
    currency: CurrencyCode,
}

fn encode_summary(summary: &CartSummary, currency: CurrencyCode) -> Result<Vec<u8>, CliError> {
    let output = SummaryOutput {
        line_count: summary.line_count,
        item_count: summary.item_count,
        subtotal_minor: summary.subtotal_minor,
        subtotal: summary.subtotal(currency).display(),
        currency,
    };
    let mut encoded = serde_json::to_vec(&output).map_err(CliError::Encode)?;
    encoded.push(b'\n');
    Ok(encoded)
}

fn log_report(report: &Reconciliation) {
    info!(
        merged = report.lines.len(),
        from_remote = report.from_remote,
        local_added = report.local_added,
        local_overridden = report.local_overridden.len(),
        "Carts reconciled"
    );
    for key in &report.local_overridden {
        debug!(key = %key, "Local line replaced by server line");
    }
    for key in &report.duplicate_keys {
        warn!(key = %key, "Cart line repeated within one cart; last occurrence kept");
    }
}

async fn read_json<T>(
    path: &Path,
    parse: fn(&str) -> Result<T, serde_json::Error>,
) -> Result<T, CliError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn encode_lines(lines: &[MergedCartLine], pretty: bool) -> Result<Vec<u8>, CliError> {
    let mut encoded = if pretty {
        serde_json::to_vec_pretty(lines)
    } else {
        serde_json::to_vec(lines)
    }
    .map_err(CliError::Encode)?;
    encoded.push(b'\n');
    Ok(encoded)
}

async fn write_stdout(bytes: &[u8]) -> Result<(), CliError> {
    let mut stdout = tokio::io::stdout();
    let result = match stdout.write_all(bytes).await {
        Ok(()) => stdout.flush().await,
        Err(e) => Err(e),
    };
    result.map_err(|source| CliError::Io {
        path: "<stdout>".into(),
        source,
    })
}

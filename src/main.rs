//! # Order Ledger CLI
//!
//! ```text
//! order-ledger [FILE] [START END]
//! ```
//!
//! Loads `FILE` (or the configured default, see [`LedgerConfig`]) and, when a
//! `MM/DD/YYYY` window is given, lists the cancelled orders in it followed by
//! the cancelled / non-cancelled counts and tax totals. Without a window every
//! order is listed with the overall total.

use order_ledger::lifecycle::{setup_tracing, LedgerConfig, LedgerSystem};
use order_ledger::model::is_valid_date;
use std::path::PathBuf;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = LedgerConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.orders_file.clone());
    let window = match (args.next(), args.next()) {
        (Some(start), Some(end)) => Some((start, end)),
        (None, None) => None,
        _ => return Err("usage: order-ledger [FILE] [START END]".to_string()),
    };

    if let Some((start, end)) = &window {
        for date in [start, end] {
            if !is_valid_date(date) {
                error!(%date, "Invalid date, expected MM/DD/YYYY");
                return Err(format!("Invalid date '{date}', expected MM/DD/YYYY"));
            }
        }
    }

    let system = LedgerSystem::new(&config);
    let client = system.client.clone();

    // A failed load is reported and the ledger keeps whatever it loaded.
    match client.load_file(path.clone()).await {
        Ok(added) => info!(added, path = %path.display(), "Orders loaded"),
        Err(e) => error!(error = %e, path = %path.display(), "Load failed"),
    }

    let span = tracing::info_span!("report");
    let report = async {
        match &window {
            Some((start, end)) => {
                for order in client.cancelled_in_range(start, end).await? {
                    println!("{order}");
                }
                let summary = client.range_summary(start, end).await?;
                println!(
                    "{} cancelled orders, {} non cancelled orders, {} total",
                    summary.cancelled, summary.non_cancelled, summary.total
                );
                println!(
                    "Estimated tax: {:.2} cancelled, {:.2} non cancelled",
                    summary.cancelled_cost, summary.non_cancelled_cost
                );
            }
            None => {
                for order in client.search_by_keyword("").await? {
                    println!("{order}");
                }
                println!("Estimated tax: {:.2}", client.total_cost().await?);
            }
        }
        Ok::<(), order_ledger::framework::ActorError>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = &report {
        error!(error = %e, "Query failed");
    }

    drop(client);
    system.shutdown().await?;

    report.map_err(|e| e.to_string())
}

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger used by the binary.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from the
//! configured default ([`LedgerConfig::log_filter`](crate::lifecycle::LedgerConfig::log_filter)).
//! Output uses the compact format without module targets.
//!
//! ## What Gets Traced
//!
//! - **Loading**: entries added, and the entry index at which a load aborted
//! - **Mutations**: `Add` and `Remove` with the order number and resulting size
//! - **Queries**: bounds, cancellation filter and match counts (debug level)
//! - **Actor Lifecycle**: startup and shutdown with the collection size
//!
//! ## Usage Examples
//!
//! ```bash
//! # Counts and load results
//! RUST_LOG=info cargo run -- orders.json 03/30/2024 09/12/2024
//!
//! # Every query and its match count
//! RUST_LOG=debug cargo run -- orders.json
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Ledger actor started size=0
//! INFO load_file: Loaded added=42 size=42 path=orders.json
//! INFO Shutdown size=42
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Calling it again is a no-op.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

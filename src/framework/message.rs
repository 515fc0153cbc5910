//! # Ledger Messages
//!
//! The requests a [`LedgerClient`](crate::framework::LedgerClient) sends to the
//! [`LedgerActor`](crate::framework::LedgerActor). Every variant carries a
//! one-shot channel for the answer.
//!
//! Mutations (`Add`, `Remove`, `LoadEntries`, `LoadFile`) and queries share one
//! channel, so the actor sees them in arrival order and never runs a query
//! against a half-applied mutation.

use crate::collection::{CancellationFilter, RangeSummary};
use crate::framework::error::ActorError;
use crate::model::OrderEntry;
use serde_json::Value;
use std::path::PathBuf;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, ActorError>>;

#[derive(Debug)]
pub enum LedgerRequest {
    Add {
        order: OrderEntry,
        respond_to: Response<()>,
    },
    Remove {
        order_number: String,
        respond_to: Response<usize>,
    },
    Get {
        order_number: String,
        respond_to: Response<Option<OrderEntry>>,
    },
    LoadEntries {
        entries: Vec<Value>,
        respond_to: Response<usize>,
    },
    LoadFile {
        path: PathBuf,
        respond_to: Response<usize>,
    },
    InRange {
        start: String,
        end: String,
        filter: CancellationFilter,
        respond_to: Response<Vec<OrderEntry>>,
    },
    Summary {
        start: String,
        end: String,
        respond_to: Response<RangeSummary>,
    },
    Search {
        keyword: String,
        respond_to: Response<Vec<OrderEntry>>,
    },
    TotalCost {
        respond_to: Response<f64>,
    },
    Len {
        respond_to: Response<usize>,
    },
}

//! # Ledger Client
//!
//! The cloneable, async front of a [`LedgerActor`](crate::framework::LedgerActor).
//! Each method mirrors an [`OrderCollection`](crate::collection::OrderCollection)
//! operation but returns owned entries, since results leave the actor task.

use crate::collection::{CancellationFilter, RangeSummary};
use crate::framework::error::ActorError;
use crate::framework::message::LedgerRequest;
use crate::model::OrderEntry;
use serde_json::Value;
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    /// Sends one request and waits for its answer.
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, ActorError>>) -> LedgerRequest,
    ) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        response.await.map_err(|_| ActorError::ActorDropped)?
    }

    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    pub async fn add(&self, order: OrderEntry) -> Result<(), ActorError> {
        self.request(|respond_to| LedgerRequest::Add { order, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, order_number: &str) -> Result<usize, ActorError> {
        let order_number = order_number.to_string();
        self.request(|respond_to| LedgerRequest::Remove {
            order_number,
            respond_to,
        })
        .await
    }

    pub async fn get_by_number(&self, order_number: &str) -> Result<Option<OrderEntry>, ActorError> {
        let order_number = order_number.to_string();
        self.request(|respond_to| LedgerRequest::Get {
            order_number,
            respond_to,
        })
        .await
    }

    #[instrument(skip_all, fields(entries = entries.len()))]
    pub async fn load_entries(&self, entries: Vec<Value>) -> Result<usize, ActorError> {
        self.request(|respond_to| LedgerRequest::LoadEntries {
            entries,
            respond_to,
        })
        .await
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn load_file(&self, path: PathBuf) -> Result<usize, ActorError> {
        self.request(|respond_to| LedgerRequest::LoadFile { path, respond_to })
            .await
    }

    pub async fn filter_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<OrderEntry>, ActorError> {
        self.in_range(start, end, CancellationFilter::Any).await
    }

    pub async fn cancelled_in_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<OrderEntry>, ActorError> {
        self.in_range(start, end, CancellationFilter::Cancelled).await
    }

    pub async fn non_cancelled_in_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<OrderEntry>, ActorError> {
        self.in_range(start, end, CancellationFilter::NonCancelled)
            .await
    }

    #[instrument(skip(self))]
    pub async fn in_range(
        &self,
        start: &str,
        end: &str,
        filter: CancellationFilter,
    ) -> Result<Vec<OrderEntry>, ActorError> {
        let (start, end) = (start.to_string(), end.to_string());
        self.request(|respond_to| LedgerRequest::InRange {
            start,
            end,
            filter,
            respond_to,
        })
        .await
    }

    pub async fn range_summary(&self, start: &str, end: &str) -> Result<RangeSummary, ActorError> {
        let (start, end) = (start.to_string(), end.to_string());
        self.request(|respond_to| LedgerRequest::Summary {
            start,
            end,
            respond_to,
        })
        .await
    }

    pub async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<OrderEntry>, ActorError> {
        let keyword = keyword.to_string();
        self.request(|respond_to| LedgerRequest::Search {
            keyword,
            respond_to,
        })
        .await
    }

    /// Total over the whole collection. For a subset, sum a query result with
    /// [`total_cost_of`](crate::collection::total_cost_of).
    pub async fn total_cost(&self) -> Result<f64, ActorError> {
        self.request(|respond_to| LedgerRequest::TotalCost { respond_to })
            .await
    }

    pub async fn len(&self) -> Result<usize, ActorError> {
        self.request(|respond_to| LedgerRequest::Len { respond_to })
            .await
    }
}

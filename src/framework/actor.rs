//! # Ledger Actor
//!
//! The server half of the ledger. It owns the [`OrderCollection`] and the
//! receiving end of the request channel, and applies requests one at a time
//! inside its own Tokio task.
//!
//! **Concurrency Model**:
//! Any number of cloned [`LedgerClient`]s may send requests at once. Because
//! only the actor task touches the collection, mutations are serialized and a
//! query never observes a partially applied `add`, `remove` or load. No
//! `Mutex` or `RwLock` is needed around the collection.

use crate::collection::OrderCollection;
use crate::framework::client::LedgerClient;
use crate::framework::message::LedgerRequest;
use crate::model::OrderEntry;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    collection: OrderCollection,
}

impl LedgerActor {
    /// Creates an actor with an empty collection and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, LedgerClient) {
        Self::with_collection(buffer_size, OrderCollection::new())
    }

    /// Creates an actor that takes ownership of an already populated collection.
    pub fn with_collection(buffer_size: usize, collection: OrderCollection) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            collection,
        };
        (actor, LedgerClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped, then hands the
    /// collection back.
    pub async fn run(mut self) -> OrderCollection {
        info!(size = self.collection.len(), "Ledger actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(size = self.collection.len(), "Shutdown");
        self.collection
    }

    fn handle(&mut self, msg: LedgerRequest) {
        match msg {
            LedgerRequest::Add { order, respond_to } => {
                self.collection.add(order);
                let _ = respond_to.send(Ok(()));
            }
            LedgerRequest::Remove {
                order_number,
                respond_to,
            } => {
                let removed = self.collection.remove(&order_number);
                let _ = respond_to.send(Ok(removed));
            }
            LedgerRequest::Get {
                order_number,
                respond_to,
            } => {
                let order = self.collection.get_by_number(&order_number).cloned();
                debug!(%order_number, found = order.is_some(), "Get");
                let _ = respond_to.send(Ok(order));
            }
            LedgerRequest::LoadEntries {
                entries,
                respond_to,
            } => {
                let result = self.collection.load_entries(&entries);
                let _ = respond_to.send(result.map_err(Into::into));
            }
            LedgerRequest::LoadFile { path, respond_to } => {
                let result = self.collection.load_file(&path);
                let _ = respond_to.send(result.map_err(Into::into));
            }
            LedgerRequest::InRange {
                start,
                end,
                filter,
                respond_to,
            } => {
                let result = self
                    .collection
                    .select_in_range(&start, &end, filter)
                    .map(owned);
                if let Err(e) = &result {
                    warn!(%start, %end, error = %e, "Range query failed");
                }
                let _ = respond_to.send(result.map_err(Into::into));
            }
            LedgerRequest::Summary {
                start,
                end,
                respond_to,
            } => {
                let result = self.collection.range_summary(&start, &end);
                if let Err(e) = &result {
                    warn!(%start, %end, error = %e, "Range summary failed");
                }
                let _ = respond_to.send(result.map_err(Into::into));
            }
            LedgerRequest::Search {
                keyword,
                respond_to,
            } => {
                let matched = owned(self.collection.search_by_keyword(&keyword));
                let _ = respond_to.send(Ok(matched));
            }
            LedgerRequest::TotalCost { respond_to } => {
                let _ = respond_to.send(Ok(self.collection.total_cost()));
            }
            LedgerRequest::Len { respond_to } => {
                let _ = respond_to.send(Ok(self.collection.len()));
            }
        }
    }
}

fn owned(orders: Vec<&OrderEntry>) -> Vec<OrderEntry> {
    orders.into_iter().cloned().collect()
}

use crate::collection::OrderCollection;
use crate::framework::{LedgerActor, LedgerClient};
use crate::lifecycle::LedgerConfig;
use tracing::{error, info};

/// Runtime wrapper that starts the ledger actor and hands out its client.
///
/// `LedgerSystem` is responsible for:
/// - **Lifecycle Management**: spawning the actor task and stopping it
/// - **Configuration**: sizing the request channel from [`LedgerConfig`]
///
/// # Example
///
/// ```ignore
/// let system = LedgerSystem::new(&LedgerConfig::default());
///
/// system.client.load_file("orders.json".into()).await?;
/// let cancelled = system.client.cancelled_in_range("03/30/2024", "09/12/2024").await?;
///
/// let collection = system.shutdown().await?;
/// ```
pub struct LedgerSystem {
    /// Client for interacting with the ledger actor. Clone it to share access.
    pub client: LedgerClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<OrderCollection>,
}

impl LedgerSystem {
    /// Starts an actor over an empty collection.
    pub fn new(config: &LedgerConfig) -> Self {
        Self::with_collection(config, OrderCollection::new())
    }

    /// Starts an actor that owns `collection`.
    pub fn with_collection(config: &LedgerConfig, collection: OrderCollection) -> Self {
        let (actor, client) = LedgerActor::with_collection(config.channel_capacity, collection);
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Gracefully shuts down the actor and returns the final collection.
    ///
    /// Dropping the system's client closes the channel once every clone handed
    /// out earlier has also been dropped; until then this waits.
    ///
    /// # Returns
    ///
    /// - `Ok(collection)` if the actor stopped cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<OrderCollection, String> {
        info!("Shutting down ledger...");

        drop(self.client);

        match self.handle.await {
            Ok(collection) => {
                info!(size = collection.len(), "Ledger shutdown complete.");
                Ok(collection)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(format!("Actor task failed: {:?}", e))
            }
        }
    }
}

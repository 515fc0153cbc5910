//! # Ledger Lifecycle
//!
//! Everything needed to run the ledger as a process:
//!
//! 1. **Configuration** - [`LedgerConfig`] defaults plus environment overrides
//! 2. **Observability** - [`setup_tracing`] installs the `tracing` subscriber
//! 3. **Actor Lifecycle** - [`LedgerSystem`] spawns the ledger actor and shuts it down
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor returns its collection** - the final state is handed back to the caller

pub mod config;
pub mod ledger_system;
pub mod tracing;

pub use self::config::*;
pub use self::ledger_system::*;
pub use self::tracing::*;

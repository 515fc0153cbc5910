//! Shared access to one collection through a single owning actor.
//!
//! # Main Components
//!
//! - [`LedgerActor`] - Owns the [`OrderCollection`](crate::collection::OrderCollection) and applies requests in order
//! - [`LedgerClient`] - Cloneable async handle used by any number of callers
//! - [`ActorError`] - Channel failures plus ledger errors

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::LedgerActor;
pub use client::LedgerClient;
pub use error::ActorError;
pub use message::{LedgerRequest, Response};

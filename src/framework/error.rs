//! # Actor Errors
//!
//! Errors seen by callers of the [`LedgerClient`](crate::framework::LedgerClient):
//! either the actor is gone, or the collection itself rejected the request.

use crate::error::{ErrorKind, LedgerError};

#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ActorError {
    /// The ledger error kind, if the failure came from the collection.
    pub fn ledger_kind(&self) -> Option<ErrorKind> {
        match self {
            ActorError::Ledger(e) => Some(e.kind()),
            _ => None,
        }
    }
}

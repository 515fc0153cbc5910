//! # Order Ledger
//!
//! > **An in-memory ledger of e-commerce orders, loaded from a spreadsheet's JSON export.**
//!
//! The crate loads order rows, keeps them in insertion order and answers ad-hoc
//! questions about them: which orders fall in a date window, which of those were
//! cancelled, which products match a keyword, and how much estimated tax a set
//! of orders carries.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Lenient in, strict out
//!
//! - **Loading is lenient**: a row missing a column gets a default value, and
//!   dates are stored exactly as found.
//! - **Querying is strict**: range queries parse every stored date and fail the
//!   whole query on the first malformed one instead of skipping it.
//!
//! ### Absent is not empty
//!
//! `Cancelled Date` is an `Option<String>`. A missing or `null` cell means "not
//! cancelled"; any other value, even `""`, means cancelled. This keeps the
//! cancelled and non-cancelled range queries an exact partition of the plain
//! range query.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Role**: The [`OrderEntry`](model::OrderEntry) record, its construction rules and the `MM/DD/YYYY` date helpers.
//!
//! ### 2. The Engine ([`collection`])
//! - **Role**: [`OrderCollection`](collection::OrderCollection) storage, loading and every query.
//! - **Key items**: [`total_cost_of`](collection::total_cost_of), [`RangeSummary`](collection::RangeSummary).
//!
//! ### 3. Shared Access ([`framework`])
//! - **Role**: A single actor owns the collection so several tasks can use it without locks.
//! - **Key items**: [`LedgerActor`](framework::LedgerActor), [`LedgerClient`](framework::LedgerClient).
//!
//! ### 4. The Runtime ([`lifecycle`])
//! - **Role**: Configuration, tracing setup and actor start/stop.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use order_ledger::collection::{total_cost_of, OrderCollection};
//!
//! let mut orders = OrderCollection::new();
//! orders
//!     .load_json(r#"[{"Order Number":"100-1","Product Name":"Echo Dot","Order Date":"01/15/2024","Estimated Tax Value":"2.50"}]"#)
//!     .unwrap();
//!
//! let january = orders.filter_by_date_range("01/01/2024", "01/31/2024").unwrap();
//! assert_eq!(january.len(), 1);
//! assert_eq!(total_cost_of(january), 2.5);
//! ```
//!
//! ### Running the Binary
//!
//! ```bash
//! RUST_LOG=info cargo run -- orders.json 03/30/2024 09/12/2024
//! ```

pub mod collection;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;

pub use collection::OrderCollection;
pub use error::{ErrorKind, LedgerError};
pub use model::OrderEntry;

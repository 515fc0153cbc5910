//! # Order Collection
//!
//! The in-memory store of [`OrderEntry`] values and every query the ledger
//! answers over it.
//!
//! ## Storage
//!
//! Entries live in a `Vec` in insertion order. Nothing is sorted or indexed:
//! every lookup and query is a linear scan, which is plenty for a spreadsheet
//! export. `order_number` is treated as a key by [`remove`](OrderCollection::remove)
//! and [`get_by_number`](OrderCollection::get_by_number) but uniqueness is not
//! enforced on insert.
//!
//! ## Queries
//!
//! | Operation | Predicate |
//! |-----------|-----------|
//! | [`filter_by_date_range`](OrderCollection::filter_by_date_range) | `start <= order_date <= end` |
//! | [`cancelled_in_range`](OrderCollection::cancelled_in_range) | in range and cancelled |
//! | [`non_cancelled_in_range`](OrderCollection::non_cancelled_in_range) | in range and not cancelled |
//! | [`search_by_keyword`](OrderCollection::search_by_keyword) | product name contains keyword, ignoring case |
//!
//! Range queries parse every stored `order_date`. One malformed date fails the
//! whole query with [`LedgerError::DateFormat`]; it is never silently skipped.
//!
//! Every query returns borrowed entries in collection order, ready to feed into
//! [`total_cost_of`].

mod load;

use crate::error::LedgerError;
use crate::model::{parse_order_date, DateRange, OrderEntry};
use serde::Serialize;
use std::borrow::Borrow;
use tracing::{debug, info};

/// Which side of the cancellation split a range query keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationFilter {
    Any,
    Cancelled,
    NonCancelled,
}

impl CancellationFilter {
    pub fn matches(self, order: &OrderEntry) -> bool {
        match self {
            CancellationFilter::Any => true,
            CancellationFilter::Cancelled => order.is_cancelled(),
            CancellationFilter::NonCancelled => !order.is_cancelled(),
        }
    }
}

/// Counts and costs for one date window, split by cancellation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RangeSummary {
    pub cancelled: usize,
    pub non_cancelled: usize,
    pub total: usize,
    pub cancelled_cost: f64,
    pub non_cancelled_cost: f64,
}

impl RangeSummary {
    pub fn total_cost(&self) -> f64 {
        self.cancelled_cost + self.non_cancelled_cost
    }
}

/// Ordered, mutable set of orders.
#[derive(Debug, Clone, Default)]
pub struct OrderCollection {
    orders: Vec<OrderEntry>,
}

impl OrderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[OrderEntry] {
        &self.orders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderEntry> {
        self.orders.iter()
    }

    /// Appends an order. Duplicate order numbers are allowed.
    pub fn add(&mut self, order: OrderEntry) {
        debug!(order_number = %order.order_number, "Add");
        self.orders.push(order);
    }

    /// Removes every order whose number equals `order_number` and returns how
    /// many were dropped. Removing an unknown number is not an error.
    pub fn remove(&mut self, order_number: &str) -> usize {
        let before = self.orders.len();
        self.orders.retain(|order| order.order_number != order_number);
        let removed = before - self.orders.len();
        info!(order_number, removed, size = self.orders.len(), "Remove");
        removed
    }

    /// First order with the given number, if any.
    pub fn get_by_number(&self, order_number: &str) -> Option<&OrderEntry> {
        self.orders
            .iter()
            .find(|order| order.order_number == order_number)
    }

    /// Orders whose `order_date` falls in `[start, end]`, both inclusive.
    ///
    /// # Errors
    /// [`LedgerError::DateFormat`] if either bound or any stored order date is
    /// not `MM/DD/YYYY`.
    pub fn filter_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<&OrderEntry>, LedgerError> {
        self.select_in_range(start, end, CancellationFilter::Any)
    }

    /// Cancelled orders in `[start, end]`.
    pub fn cancelled_in_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<&OrderEntry>, LedgerError> {
        self.select_in_range(start, end, CancellationFilter::Cancelled)
    }

    /// Orders in `[start, end]` that were not cancelled.
    pub fn non_cancelled_in_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<&OrderEntry>, LedgerError> {
        self.select_in_range(start, end, CancellationFilter::NonCancelled)
    }

    /// Shared body of the range queries. The bounds are parsed once; stored
    /// dates are parsed per entry, even for entries the filter would drop.
    pub fn select_in_range(
        &self,
        start: &str,
        end: &str,
        filter: CancellationFilter,
    ) -> Result<Vec<&OrderEntry>, LedgerError> {
        let range = DateRange::parse(start, end)?;
        let mut matched = Vec::new();
        for order in &self.orders {
            let date = parse_order_date(&order.order_date)?;
            if range.contains(date) && filter.matches(order) {
                matched.push(order);
            }
        }
        debug!(start, end, ?filter, matched = matched.len(), "Range query");
        Ok(matched)
    }

    /// Orders whose product name contains `keyword`, ignoring case. An empty
    /// keyword matches everything.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&OrderEntry> {
        let needle = keyword.to_lowercase();
        let matched: Vec<&OrderEntry> = self
            .orders
            .iter()
            .filter(|order| order.product_name.to_lowercase().contains(&needle))
            .collect();
        debug!(keyword, matched = matched.len(), "Keyword search");
        matched
    }

    /// Sum of `estimated_tax_value` over the whole collection.
    pub fn total_cost(&self) -> f64 {
        total_cost_of(&self.orders)
    }

    /// Cancelled / non-cancelled counts and costs for `[start, end]`.
    pub fn range_summary(&self, start: &str, end: &str) -> Result<RangeSummary, LedgerError> {
        let in_range = self.filter_by_date_range(start, end)?;
        let (cancelled, non_cancelled): (Vec<&OrderEntry>, Vec<&OrderEntry>) =
            in_range.iter().copied().partition(|order| order.is_cancelled());

        Ok(RangeSummary {
            cancelled: cancelled.len(),
            non_cancelled: non_cancelled.len(),
            total: in_range.len(),
            cancelled_cost: total_cost_of(cancelled),
            non_cancelled_cost: total_cost_of(non_cancelled),
        })
    }
}

impl<'a> IntoIterator for &'a OrderCollection {
    type Item = &'a OrderEntry;
    type IntoIter = std::slice::Iter<'a, OrderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

/// Sum of `estimated_tax_value` over any sequence of orders; `0.0` when empty.
///
/// Accepts query results (`Vec<&OrderEntry>`), slices and owned vectors alike.
pub fn total_cost_of<I>(orders: I) -> f64
where
    I: IntoIterator,
    I::Item: Borrow<OrderEntry>,
{
    orders
        .into_iter()
        .fold(0.0, |total, order| total + order.borrow().estimated_tax_value)
}

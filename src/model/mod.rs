//! Pure data: the order record and the date rules range queries apply to it.

pub mod dates;
pub mod order;

pub use dates::*;
pub use order::*;

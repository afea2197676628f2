//! The keyspace counter.
//!
//! Owns the domain bound (the number of valid private keys), the page size,
//! and the conversions between page numbers and key indices. All values are
//! arbitrary precision; the domain is a ~256-bit number.

mod counter;

pub use counter::{Keyspace, RESULTS_PER_PAGE};

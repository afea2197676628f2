//! Key derivation over the enumerated keyspace.
//!
//! This module provides:
//! - Single-key derivation from an index
//! - Page-sized range derivation, parallel across slots
//! - Reverse lookup from a WIF private key to its index and page

mod derived;
mod engine;

pub use derived::{DerivedKey, Lookup, Page};
pub use engine::{pad_scalar, KeyDeriver, SCALAR_BYTES};

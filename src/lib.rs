//! # keyspace_directory
//!
//! A deterministic, paginated directory of every secp256k1 private key.
//!
//! Key index `i` (1-based) maps to the private scalar `i`, its WIF encoding
//! and the P2PKH addresses of both public key serializations. Nothing is
//! stored; every page is recomputed on demand.
//!
//! ## Architecture
//!
//! - `keyspace`: Domain bound, page size and page/index arithmetic
//! - `crypto`: Public key derivation, WIF and address encodings
//! - `deriver`: Index-to-key derivation and WIF-to-index recovery
//! - `render`: Plain-text presentation of pages and lookups
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod deriver;
pub mod error;
pub mod keyspace;
pub mod render;

pub use config::{Command, Config};
pub use crypto::{Address, Keypair, Network, PrivateKey};
pub use deriver::{DerivedKey, KeyDeriver, Lookup, Page};
pub use error::KeyspaceError;
pub use keyspace::{Keyspace, RESULTS_PER_PAGE};

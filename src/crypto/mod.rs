//! Cryptographic encodings for Bitcoin keys and addresses.
//!
//! This module provides:
//! - secp256k1 public key derivation from a raw scalar
//! - P2PKH address derivation (HASH160 + Base58Check)
//! - WIF private key encoding and decoding

mod address;
mod keypair;
mod network;
mod wif;

pub use address::Address;
pub use keypair::Keypair;
pub use network::Network;
pub use wif::PrivateKey;

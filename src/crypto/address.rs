//! Pay-to-pubkey-hash address representation.

use std::fmt;

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use super::Network;

/// A P2PKH address: a network plus the HASH160 of a serialized public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    network: Network,
    hash: [u8; 20],
}

impl Address {
    /// Creates an address from a raw public key hash.
    #[inline]
    pub const fn from_hash(hash: [u8; 20], network: Network) -> Self {
        Self { network, hash }
    }

    /// Hashes a serialized public key (compressed or uncompressed) into an address.
    ///
    /// HASH160 is RIPEMD-160 over SHA-256, so the compressed and uncompressed
    /// serializations of one point give two unrelated addresses.
    pub fn from_public_key(serialized: &[u8], network: Network) -> Self {
        let digest = Ripemd160::digest(Sha256::digest(serialized));

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&digest);

        Self { network, hash }
    }

    /// Returns the public key hash.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.hash
    }

    /// Returns the network this address belongs to.
    #[inline]
    pub const fn network(&self) -> Network {
        self.network
    }

    /// Returns the public key hash as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Base58Check text: version byte, hash, 4-byte double-SHA-256 checksum.
    pub fn to_base58check(&self) -> String {
        bs58::encode(self.hash)
            .with_check_version(self.network.p2pkh_version())
            .into_string()
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58check())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58check())
    }
}

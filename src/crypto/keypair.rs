//! secp256k1 keypair derivation from a fixed-width scalar.

use secp256k1::{PublicKey, Secp256k1, SecretKey, Signing};

use crate::error::{KeyspaceError, Result};

use super::{Address, Network, PrivateKey};

/// A private scalar and the public key obtained by multiplying the generator by it.
#[derive(Debug, Clone)]
pub struct Keypair {
    /// The private key bytes (32 bytes, big-endian)
    secret_key: [u8; 32],
    /// The derived public key point
    public_key: PublicKey,
}

impl Keypair {
    /// Derives the keypair for a 32-byte big-endian scalar.
    ///
    /// Fails with `OutOfRange` if the scalar is zero or not below the group order.
    pub fn from_secret_key<C: Signing>(secp: &Secp256k1<C>, secret_bytes: [u8; 32]) -> Result<Self> {
        let secret_key = SecretKey::from_slice(&secret_bytes)
            .map_err(|e| KeyspaceError::OutOfRange(format!("invalid secp256k1 scalar: {e}")))?;
        let public_key = PublicKey::from_secret_key(secp, &secret_key);

        Ok(Self {
            secret_key: secret_bytes,
            public_key,
        })
    }

    /// Returns the private key bytes.
    #[inline]
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.secret_key
    }

    /// Returns the public key point.
    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The private key in WIF, flagged for the uncompressed public key.
    pub fn private_key(&self, network: Network) -> PrivateKey {
        PrivateKey::new(self.secret_key, false, network)
    }

    /// Address of the 33-byte compressed public key serialization.
    pub fn compressed_address(&self, network: Network) -> Address {
        Address::from_public_key(&self.public_key.serialize(), network)
    }

    /// Address of the 65-byte uncompressed public key serialization.
    pub fn uncompressed_address(&self, network: Network) -> Address {
        Address::from_public_key(&self.public_key.serialize_uncompressed(), network)
    }
}

//! Wallet Import Format encoding of raw private scalars.

use std::fmt;

use crate::error::{KeyspaceError, Result};

use super::Network;

/// Marker byte appended to the scalar when the key pairs with a compressed public key.
const COMPRESSED_FLAG: u8 = 0x01;

/// A raw 32-byte private scalar together with its WIF encoding parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: [u8; 32],
    compressed: bool,
    network: Network,
}

impl PrivateKey {
    /// Wraps a big-endian scalar. No curve validation happens here.
    pub const fn new(scalar: [u8; 32], compressed: bool, network: Network) -> Self {
        Self {
            scalar,
            compressed,
            network,
        }
    }

    /// Decodes WIF text.
    ///
    /// Both the uncompressed (33-byte payload) and compressed (34-byte payload
    /// ending in `0x01`) forms are accepted. The version byte must match
    /// `network`.
    pub fn from_wif(text: &str, network: Network) -> Result<Self> {
        let data = bs58::decode(text.trim()).with_check(None).into_vec()?;

        let (&version, payload) = data
            .split_first()
            .ok_or_else(|| KeyspaceError::MalformedInput("empty WIF payload".into()))?;

        if version != network.wif_version() {
            return Err(KeyspaceError::MalformedInput(format!(
                "unexpected WIF version byte 0x{version:02x} for {network}"
            )));
        }

        let compressed = match payload.len() {
            32 => false,
            33 if payload[32] == COMPRESSED_FLAG => true,
            33 => {
                return Err(KeyspaceError::MalformedInput(format!(
                    "invalid compression flag 0x{:02x}",
                    payload[32]
                )))
            }
            n => {
                return Err(KeyspaceError::MalformedInput(format!(
                    "WIF payload has {n} bytes, expected 32 or 33"
                )))
            }
        };

        let mut scalar = [0u8; 32];
        scalar.copy_from_slice(&payload[..32]);

        Ok(Self {
            scalar,
            compressed,
            network,
        })
    }

    /// Encodes as WIF text.
    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(33);
        payload.extend_from_slice(&self.scalar);
        if self.compressed {
            payload.push(COMPRESSED_FLAG);
        }

        bs58::encode(payload)
            .with_check_version(self.network.wif_version())
            .into_string()
    }

    /// Returns the raw big-endian scalar.
    #[inline]
    pub fn scalar(&self) -> &[u8; 32] {
        &self.scalar
    }

    /// Returns true if this key is flagged for a compressed public key.
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Returns the network of the encoding.
    #[inline]
    pub fn network(&self) -> Network {
        self.network
    }

    /// The same scalar re-flagged for the uncompressed public key.
    pub fn to_uncompressed(&self) -> Self {
        Self {
            compressed: false,
            ..self.clone()
        }
    }
}

// Keep secret bytes out of debug output.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("compressed", &self.compressed)
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

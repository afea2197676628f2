//! The key deriver: index to key material, and WIF back to index.

use log::debug;
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use rayon::prelude::*;
use secp256k1::{Secp256k1, SignOnly};

use crate::crypto::{Keypair, Network, PrivateKey};
use crate::error::{KeyspaceError, Result};
use crate::keyspace::Keyspace;

use super::{DerivedKey, Lookup, Page};

/// Byte width of a secp256k1 scalar.
pub const SCALAR_BYTES: usize = 32;

/// Derives keys and addresses for positions in a keyspace.
///
/// Holds only immutable state, so one deriver can serve concurrent callers.
pub struct KeyDeriver {
    keyspace: Keyspace,
    network: Network,
    secp: Secp256k1<SignOnly>,
}

impl KeyDeriver {
    /// Creates a deriver over `keyspace`, encoding for `network`.
    pub fn new(keyspace: Keyspace, network: Network) -> Self {
        Self {
            keyspace,
            network,
            secp: Secp256k1::signing_only(),
        }
    }

    /// Returns the keyspace being enumerated.
    #[inline]
    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    /// Returns the network used for encodings.
    #[inline]
    pub fn network(&self) -> Network {
        self.network
    }

    /// Derives the key at `index`.
    ///
    /// Process:
    /// 1. Left-pad the big-endian index to 32 bytes
    /// 2. Multiply the generator by that scalar
    /// 3. Encode the scalar as uncompressed-mode WIF
    /// 4. Hash both public key serializations into addresses
    pub fn derive_one(&self, index: &BigUint) -> Result<DerivedKey> {
        if !self.keyspace.contains(index) {
            return Err(KeyspaceError::OutOfRange(format!(
                "index {index} is outside 1..={}",
                self.keyspace.domain_bound()
            )));
        }

        let keypair = Keypair::from_secret_key(&self.secp, pad_scalar(index)?)?;

        Ok(DerivedKey {
            private_key: keypair.private_key(self.network).to_wif(),
            number: index.to_str_radix(10),
            compressed: keypair.compressed_address(self.network).to_string(),
            uncompressed: keypair.uncompressed_address(self.network).to_string(),
        })
    }

    /// Derives up to one page of consecutive keys after `start_exclusive`.
    ///
    /// Covers `start_exclusive + 1 ..= start_exclusive + page_size`, cut short
    /// at the domain bound. Slots are derived in parallel; the result is in
    /// ascending index order.
    pub fn derive_range(&self, start_exclusive: &BigUint) -> Result<Vec<DerivedKey>> {
        let bound = self.keyspace.domain_bound();
        if start_exclusive >= bound {
            return Ok(Vec::new());
        }

        let end = (start_exclusive + self.keyspace.page_size()).min(bound.clone());
        let count = (end - start_exclusive).to_usize().ok_or_else(|| {
            KeyspaceError::OutOfRange("page span does not fit in a machine word".into())
        })?;

        (1..=count)
            .into_par_iter()
            .map(|offset| self.derive_one(&(start_exclusive + offset)))
            .collect()
    }

    /// Validates `page` and derives its entries.
    pub fn derive_page(&self, page: &BigUint) -> Result<Page> {
        let number = self.keyspace.validate_page(&BigInt::from(page.clone()))?;
        let start = self.keyspace.start_index_for_page(&number);
        let keys = self.derive_range(&start)?;

        debug!(
            "derived {} keys for page {} of {}",
            keys.len(),
            number,
            self.keyspace.page_count()
        );

        Ok(Page {
            previous: self.keyspace.previous_page(&number),
            next: self.keyspace.next_page(&number),
            page_count: self.keyspace.page_count().clone(),
            number,
            keys,
        })
    }

    /// Recovers the key index from WIF text.
    ///
    /// Exact inverse of the private key field of [`derive_one`](Self::derive_one).
    pub fn decode_index(&self, private_key: &str) -> Result<BigUint> {
        let key = PrivateKey::from_wif(private_key, self.network)?;
        self.index_of(&key)
    }

    /// Finds the page listing a WIF key, and the anchor it is listed under.
    pub fn lookup(&self, private_key: &str) -> Result<Lookup> {
        let key = PrivateKey::from_wif(private_key, self.network)?;
        let index = self.index_of(&key)?;
        let page = self.keyspace.page_for_index(&index)?;

        Ok(Lookup {
            anchor: key.to_uncompressed().to_wif(),
            index,
            page,
        })
    }

    fn index_of(&self, key: &PrivateKey) -> Result<BigUint> {
        let index = BigUint::from_bytes_be(key.scalar());
        if !self.keyspace.contains(&index) {
            return Err(KeyspaceError::OutOfRange(
                "decoded scalar is not a valid key index".into(),
            ));
        }
        Ok(index)
    }
}

/// Renders `index` as exactly 32 big-endian bytes, zero-padded on the left.
pub fn pad_scalar(index: &BigUint) -> Result<[u8; SCALAR_BYTES]> {
    let bytes = index.to_bytes_be();
    if bytes.len() > SCALAR_BYTES {
        return Err(KeyspaceError::OutOfRange(format!(
            "index {index} does not fit in {SCALAR_BYTES} bytes"
        )));
    }

    let mut padded = [0u8; SCALAR_BYTES];
    padded[SCALAR_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(padded)
}

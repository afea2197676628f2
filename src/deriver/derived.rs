//! Value objects produced by the key deriver.

use num_bigint::BigUint;

/// One enumerated key: its WIF, its decimal index and both addresses.
///
/// Built on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedKey {
    /// The private key (WIF, uncompressed mode)
    pub private_key: String,
    /// The key index in base 10
    pub number: String,
    /// Address of the compressed public key
    pub compressed: String,
    /// Address of the uncompressed public key
    pub uncompressed: String,
}

/// One page of the keyspace.
#[derive(Debug, Clone)]
pub struct Page {
    /// The page number, 1-based
    pub number: BigUint,
    /// Total pages in the keyspace
    pub page_count: BigUint,
    /// Page before this one, if any
    pub previous: Option<BigUint>,
    /// Page after this one, if any
    pub next: Option<BigUint>,
    /// Entries in ascending index order; shorter than a full page only at the end
    pub keys: Vec<DerivedKey>,
}

impl Page {
    /// Number of entries on the page.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Where a private key lives in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// The decoded key index
    pub index: BigUint,
    /// The page listing that index
    pub page: BigUint,
    /// The key re-encoded in the form the page lists it (uncompressed-mode WIF)
    pub anchor: String,
}

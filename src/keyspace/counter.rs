//! Page arithmetic over the ordered keyspace.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::error::{KeyspaceError, Result};

/// Number of keys shown on one page.
pub const RESULTS_PER_PAGE: u32 = 128;

/// secp256k1 group order minus one: the largest valid private key.
const SECP256K1_MAX_SCALAR: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x40,
];

/// The immutable shape of the keyspace: valid indices are `1..=domain_bound`,
/// split into pages of `page_size` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    domain_bound: BigUint,
    page_size: BigUint,
    page_count: BigUint,
}

impl Keyspace {
    /// Creates a keyspace with an arbitrary bound and page size.
    ///
    /// # Panics
    /// Panics if `page_size` is zero.
    pub fn new(domain_bound: BigUint, page_size: u32) -> Self {
        assert!(page_size > 0, "page size must be positive");
        let page_size = BigUint::from(page_size);
        let page_count = (&domain_bound + &page_size - 1u32) / &page_size;

        Self {
            domain_bound,
            page_size,
            page_count,
        }
    }

    /// The full secp256k1 keyspace with the default page size.
    pub fn secp256k1() -> Self {
        Self::new(
            BigUint::from_bytes_be(&SECP256K1_MAX_SCALAR),
            RESULTS_PER_PAGE,
        )
    }

    /// Largest valid key index.
    #[inline]
    pub fn domain_bound(&self) -> &BigUint {
        &self.domain_bound
    }

    /// Entries per page.
    #[inline]
    pub fn page_size(&self) -> &BigUint {
        &self.page_size
    }

    /// Total number of pages, `ceil(domain_bound / page_size)`.
    #[inline]
    pub fn page_count(&self) -> &BigUint {
        &self.page_count
    }

    /// Returns true if `index` names a key, i.e. `1 <= index <= domain_bound`.
    #[inline]
    pub fn contains(&self, index: &BigUint) -> bool {
        !index.is_zero() && index <= &self.domain_bound
    }

    /// Normalizes a requested page number.
    ///
    /// The sign is dropped and anything below 1 becomes page 1. Pages past
    /// the last one are rejected.
    pub fn validate_page(&self, requested: &BigInt) -> Result<BigUint> {
        let mut page = requested.magnitude().clone();
        if page.is_zero() {
            page = BigUint::one();
        }

        if page > self.page_count {
            return Err(KeyspaceError::OutOfRange(format!(
                "page {} exceeds page count {}",
                page, self.page_count
            )));
        }

        Ok(page)
    }

    /// Parses a base-10 page number and validates it.
    ///
    /// Empty input means the first page. A leading sign is accepted and
    /// discarded.
    pub fn parse_page(&self, text: &str) -> Result<BigUint> {
        let text = text.trim();
        if text.is_empty() {
            return self.validate_page(&BigInt::zero());
        }

        let digits = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyspaceError::MalformedInput(format!(
                "invalid page number: {text:?}"
            )));
        }

        let requested: BigUint = digits
            .parse()
            .map_err(|_| KeyspaceError::MalformedInput(format!("invalid page number: {text:?}")))?;

        self.validate_page(&BigInt::from(requested))
    }

    /// The index just before the first entry of `page`.
    ///
    /// Entries are produced by pre-incrementing, so page `p` covers
    /// `start + 1 ..= start + page_size`. Page 0 is treated as page 1.
    pub fn start_index_for_page(&self, page: &BigUint) -> BigUint {
        if page.is_zero() {
            return BigUint::zero();
        }
        (page - 1u32) * &self.page_size
    }

    /// The page on which `index` appears.
    pub fn page_for_index(&self, index: &BigUint) -> Result<BigUint> {
        if !self.contains(index) {
            return Err(KeyspaceError::OutOfRange(format!(
                "index {index} is outside 1..={}",
                self.domain_bound
            )));
        }
        Ok((index - 1u32) / &self.page_size + 1u32)
    }

    /// Page before `page`, if any.
    pub fn previous_page(&self, page: &BigUint) -> Option<BigUint> {
        if page <= &BigUint::one() {
            None
        } else {
            Some(page - 1u32)
        }
    }

    /// Page after `page`, if any.
    pub fn next_page(&self, page: &BigUint) -> Option<BigUint> {
        if page >= &self.page_count {
            None
        } else {
            Some(page + 1u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_secp256k1_page_count() {
        let keyspace = Keyspace::secp256k1();
        let bound = keyspace.domain_bound().clone();
        let page_size = big(RESULTS_PER_PAGE as u64);

        // bound is not a multiple of the page size, so the last page is partial
        assert!(!(&bound % &page_size).is_zero());
        assert_eq!(keyspace.page_count(), &(&bound / &page_size + 1u32));
    }

    #[test]
    fn test_domain_bound_is_order_minus_one() {
        let order = BigUint::parse_bytes(
            b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
            16,
        )
        .unwrap();
        assert_eq!(Keyspace::secp256k1().domain_bound(), &(order - 1u32));
    }

    #[test]
    fn test_page_count_exact_multiple() {
        let keyspace = Keyspace::new(big(256), 128);
        assert_eq!(keyspace.page_count(), &big(2));

        let keyspace = Keyspace::new(big(257), 128);
        assert_eq!(keyspace.page_count(), &big(3));
    }

    #[test]
    fn test_validate_page_drops_sign() {
        let keyspace = Keyspace::secp256k1();
        assert_eq!(
            keyspace.validate_page(&BigInt::from(-7)).unwrap(),
            keyspace.validate_page(&BigInt::from(7)).unwrap()
        );
        assert_eq!(keyspace.validate_page(&BigInt::from(0)).unwrap(), big(1));
    }

    #[test]
    fn test_validate_page_rejects_past_end() {
        let keyspace = Keyspace::secp256k1();
        let last = BigInt::from(keyspace.page_count().clone());
        assert!(keyspace.validate_page(&last).is_ok());
        assert!(matches!(
            keyspace.validate_page(&(last + 1)),
            Err(KeyspaceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_page() {
        let keyspace = Keyspace::secp256k1();
        assert_eq!(keyspace.parse_page("").unwrap(), big(1));
        assert_eq!(keyspace.parse_page("42").unwrap(), big(42));
        assert_eq!(keyspace.parse_page("-42").unwrap(), big(42));
        assert_eq!(keyspace.parse_page("+42").unwrap(), big(42));
        assert_eq!(keyspace.parse_page("0").unwrap(), big(1));
        assert!(matches!(
            keyspace.parse_page("forty-two"),
            Err(KeyspaceError::MalformedInput(_))
        ));
        assert!(matches!(
            keyspace.parse_page("1e5"),
            Err(KeyspaceError::MalformedInput(_))
        ));
        for text in ["1_2", "_1", "--5", "+", "0x10", "1 2"] {
            assert!(
                matches!(keyspace.parse_page(text), Err(KeyspaceError::MalformedInput(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_page_empty_keyspace() {
        let keyspace = Keyspace::new(BigUint::zero(), 4);
        assert_eq!(keyspace.page_count(), &big(0));
        assert!(matches!(
            keyspace.parse_page(""),
            Err(KeyspaceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_page_beyond_machine_words() {
        let keyspace = Keyspace::secp256k1();
        let last = keyspace.page_count().to_string();
        assert_eq!(&keyspace.parse_page(&last).unwrap(), keyspace.page_count());

        let too_far = (keyspace.page_count() + 1u32).to_string();
        assert!(matches!(
            keyspace.parse_page(&too_far),
            Err(KeyspaceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_start_index_for_page() {
        let keyspace = Keyspace::secp256k1();
        assert_eq!(keyspace.start_index_for_page(&big(1)), big(0));
        assert_eq!(keyspace.start_index_for_page(&big(2)), big(128));
        assert_eq!(keyspace.start_index_for_page(&big(0)), big(0));
    }

    #[test]
    fn test_page_for_index() {
        let keyspace = Keyspace::secp256k1();
        assert_eq!(keyspace.page_for_index(&big(1)).unwrap(), big(1));
        assert_eq!(keyspace.page_for_index(&big(128)).unwrap(), big(1));
        assert_eq!(keyspace.page_for_index(&big(129)).unwrap(), big(2));
        assert_eq!(
            &keyspace.page_for_index(keyspace.domain_bound()).unwrap(),
            keyspace.page_count()
        );
        assert!(keyspace.page_for_index(&big(0)).is_err());
        assert!(keyspace
            .page_for_index(&(keyspace.domain_bound() + 1u32))
            .is_err());
    }

    #[test]
    fn test_page_for_index_brackets_index() {
        let keyspace = Keyspace::secp256k1();
        let bound = keyspace.domain_bound().clone();
        let samples = [
            big(1),
            big(127),
            big(128),
            big(129),
            &bound / 2u32,
            &bound - 1u32,
            bound.clone(),
        ];

        for index in samples {
            let page = keyspace.page_for_index(&index).unwrap();
            let start = keyspace.start_index_for_page(&page);
            assert!(start < index);
            assert!(index <= start + keyspace.page_size());
        }
    }

    #[test]
    fn test_navigation_is_clamped() {
        let keyspace = Keyspace::secp256k1();
        assert_eq!(keyspace.previous_page(&big(1)), None);
        assert_eq!(keyspace.previous_page(&big(5)), Some(big(4)));
        assert_eq!(keyspace.next_page(&big(5)), Some(big(6)));
        assert_eq!(keyspace.next_page(keyspace.page_count()), None);
    }
}

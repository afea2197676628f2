//! Error types shared by the keyspace counter and the key deriver.

/// Failures surfaced by keyspace and derivation operations.
///
/// All variants are deterministic: retrying the same call with the same
/// input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyspaceError {
    /// Text that is not a base-10 integer, or not a decodable key.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// An index or page number outside the valid domain.
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A Base58Check payload whose checksum does not match.
    #[error("Checksum mismatch")]
    ChecksumMismatch,
}

impl From<bs58::decode::Error> for KeyspaceError {
    fn from(err: bs58::decode::Error) -> Self {
        match err {
            bs58::decode::Error::InvalidChecksum { .. } => KeyspaceError::ChecksumMismatch,
            other => KeyspaceError::MalformedInput(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeyspaceError>;

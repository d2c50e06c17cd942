use std::fmt;

use crypto_utils::base58::Base58Error;

/// Errors surfaced by the text codecs (Base58Check, WIF, P2PKH, extended
/// keys). All are local to a single decode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A symbol outside the base-58 alphabet.
    InvalidCharacter(char),
    /// Decoded bytes cannot hold the 4-byte checksum.
    TooShort,
    /// Payload length does not match the format.
    InvalidLength,
    /// The 4-byte double-hash checksum does not match.
    ChecksumMismatch,
    /// Version byte belongs to a different network than the one supplied.
    WrongNetwork,
    /// Extended-key version word matches no known network/visibility pair.
    UnknownVersion,
    /// Key material is malformed: out-of-range scalar, invalid point
    /// encoding, nonzero private-key pad byte, or a depth-zero key carrying
    /// a parent fingerprint or child index.
    InvalidKeyData,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(c) => write!(f, "invalid base58 character {c:?}"),
            Self::TooShort => write!(f, "decoded data too short for checksum"),
            Self::InvalidLength => write!(f, "payload length does not match format"),
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::WrongNetwork => write!(f, "version byte belongs to a different network"),
            Self::UnknownVersion => write!(f, "unknown extended-key version"),
            Self::InvalidKeyData => write!(f, "malformed key material"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<Base58Error> for DecodeError {
    fn from(err: Base58Error) -> Self {
        match err {
            Base58Error::InvalidCharacter(c) => Self::InvalidCharacter(c),
            Base58Error::TooShort => Self::TooShort,
            Base58Error::ChecksumMismatch => Self::ChecksumMismatch,
        }
    }
}

/// Errors from child-key derivation and master-key construction.
/// Recoverable: retry with the next index, or supply private material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// Hardened indices mix in the parent private scalar; a public-only
    /// extended key cannot derive them.
    HardenedRequiresPrivateKey,
    /// The intermediate scalar was zero or fell outside the curve order.
    /// The caller should retry with the next child index.
    InvalidDerivedKey,
    /// Seed outside the accepted 16..=64 byte range, or one that maps to an
    /// invalid master scalar.
    InvalidSeed,
    /// Unparsable derivation path string.
    InvalidPath,
}

impl fmt::Display for DeriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardenedRequiresPrivateKey => {
                write!(f, "hardened derivation requires a private key")
            }
            Self::InvalidDerivedKey => write!(f, "derived key invalid for this index"),
            Self::InvalidSeed => write!(f, "invalid master seed"),
            Self::InvalidPath => write!(f, "invalid derivation path"),
        }
    }
}

impl std::error::Error for DeriveError {}

/// Keypair generation failures. Unlike decode and derive errors these are
/// fatal to the operation: continuing would risk a weak key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The OS random source failed to produce bytes.
    Entropy,
    /// Rejection sampling exhausted its retry bound without a valid scalar.
    RetriesExhausted,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy => write!(f, "entropy source failure"),
            Self::RetriesExhausted => write!(f, "could not sample a valid key"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Union of the error tiers, for operations that cross them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Decode(DecodeError),
    Derive(DeriveError),
    Generate(GenerateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "decode error: {e}"),
            Self::Derive(e) => write!(f, "derivation error: {e}"),
            Self::Generate(e) => write!(f, "generation error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::Derive(e) => Some(e),
            Self::Generate(e) => Some(e),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<DeriveError> for Error {
    fn from(err: DeriveError) -> Self {
        Self::Derive(err)
    }
}

impl From<GenerateError> for Error {
    fn from(err: GenerateError) -> Self {
        Self::Generate(err)
    }
}

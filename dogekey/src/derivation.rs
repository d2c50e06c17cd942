use std::fmt;
use std::str::FromStr;

use secp256k1::{All, Secp256k1};

use crate::error::DeriveError;
use crate::extended_key::{ExtendedKey, HARDENED_OFFSET};

/// A derivation path such as "m/44'/3'/0'/0/1". Hardened steps may be
/// written with `'`, `h`, or `"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath(pub Vec<u32>);

impl FromStr for DerivationPath {
    type Err = DeriveError;

    fn from_str(s: &str) -> Result<Self, DeriveError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("m") {
            return Ok(DerivationPath(Vec::new()));
        }
        let rest = s
            .strip_prefix("m/")
            .or_else(|| s.strip_prefix("M/"))
            .unwrap_or(s);
        if rest.is_empty() {
            return Ok(DerivationPath(Vec::new()));
        }

        let mut indices = Vec::new();
        for part in rest.split('/') {
            if part.is_empty() {
                return Err(DeriveError::InvalidPath);
            }
            let hardened =
                part.ends_with('\'') || part.ends_with('h') || part.ends_with('"');
            let digits = if hardened {
                &part[..part.len() - 1]
            } else {
                part
            };
            let index: u32 = digits.parse().map_err(|_| DeriveError::InvalidPath)?;
            let index = if hardened {
                index
                    .checked_add(HARDENED_OFFSET)
                    .ok_or(DeriveError::InvalidPath)?
            } else {
                index
            };
            indices.push(index);
        }
        Ok(DerivationPath(indices))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for &index in &self.0 {
            if index >= HARDENED_OFFSET {
                write!(f, "/{}'", index - HARDENED_OFFSET)?;
            } else {
                write!(f, "/{index}")?;
            }
        }
        Ok(())
    }
}

impl DerivationPath {
    /// Walks the path from `parent`, one child derivation per step. Hardened
    /// steps fail on public-only parents.
    pub fn derive(
        &self,
        secp: &Secp256k1<All>,
        parent: &ExtendedKey,
    ) -> Result<ExtendedKey, DeriveError> {
        let mut key = parent.clone();
        for &index in &self.0 {
            key = key.derive_child(secp, index)?;
        }
        Ok(key)
    }
}

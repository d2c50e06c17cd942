//! Association checks between private keys, extended keys, and addresses.
//! The boolean predicates collapse every internal failure to `false`; the
//! `derive_*` forms keep their diagnostics.

use secp256k1::{PublicKey, Secp256k1};

use crate::derivation::DerivationPath;
use crate::error::{DecodeError, Error};
use crate::extended_key::ExtendedKey;
use crate::network::Network;
use crate::{address, wif};

/// Does this WIF private key pay to this address on this network?
pub fn verify_keypair(wif_text: &str, address_text: &str, network: Network) -> bool {
    let Ok((secret, compressed)) = wif::decode(wif_text, network) else {
        return false;
    };
    let secp = Secp256k1::new();
    let public = PublicKey::from_secret_key(&secp, &secret);
    address::from_public_key(&public, network, compressed) == address_text
}

/// Format-plus-checksum check for P2PKH address text.
pub fn verify_address_format(address_text: &str) -> bool {
    address::verify(address_text)
}

/// Does this extended key's public point pay to this address on this
/// network? Public-only extended keys hash their point directly.
pub fn verify_extended_keypair(key_text: &str, address_text: &str, network: Network) -> bool {
    let Ok(key) = ExtendedKey::from_base58(key_text) else {
        return false;
    };
    if key.network != network {
        return false;
    }
    let secp = Secp256k1::new();
    key.p2pkh_address(&secp) == address_text
}

/// The P2PKH address for an extended key's own public point, on the network
/// its version word names.
pub fn derive_hd_address(key_text: &str) -> Result<String, DecodeError> {
    let key = ExtendedKey::from_base58(key_text)?;
    let secp = Secp256k1::new();
    Ok(key.p2pkh_address(&secp))
}

/// Derives along `path` from the given extended key and returns the child's
/// P2PKH address.
pub fn derive_address_at(key_text: &str, path: &str) -> Result<String, Error> {
    let key = ExtendedKey::from_base58(key_text)?;
    let path: DerivationPath = path.parse()?;
    let secp = Secp256k1::new();
    let child = path.derive(&secp, &key)?;
    Ok(child.p2pkh_address(&secp))
}

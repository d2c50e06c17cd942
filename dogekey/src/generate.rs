//! Keypair generation: rejection-sampled private scalars and HD master keys,
//! drawn from the OS entropy source.

use secp256k1::rand::rngs::OsRng;
use secp256k1::rand::RngCore;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::error::GenerateError;
use crate::extended_key::ExtendedKey;
use crate::network::Network;
use crate::{address, wif};

/// Rejection-sampling bound. A single draw is rejected with probability
/// below 2^-127, so hitting this bound means the entropy source is broken.
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// A freshly generated keypair in its text encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypair {
    pub wif: String,
    pub address: String,
}

/// A freshly generated HD master key in its text encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdKeypair {
    pub extended_key: String,
    pub address: String,
}

fn random_bytes() -> Result<[u8; 32], GenerateError> {
    let mut buf = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|_| GenerateError::Entropy)?;
    Ok(buf)
}

/// Draws random bytes until they form a scalar in `1..curve_order`.
fn random_secret_key() -> Result<SecretKey, GenerateError> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        if let Ok(secret) = SecretKey::from_slice(&random_bytes()?) {
            return Ok(secret);
        }
    }
    Err(GenerateError::RetriesExhausted)
}

/// Generates a random keypair and returns its compressed WIF and P2PKH
/// address. Callers that only want one of the encodings ignore the other.
pub fn generate_keypair(network: Network) -> Result<Keypair, GenerateError> {
    let secp = Secp256k1::new();
    let secret = random_secret_key()?;
    let public = PublicKey::from_secret_key(&secp, &secret);
    Ok(Keypair {
        wif: wif::encode(&secret, network, true),
        address: address::from_public_key(&public, network, true),
    })
}

/// Generates a random HD master key and returns its extended-key text plus
/// the master's own P2PKH address.
pub fn generate_hd_master_keypair(network: Network) -> Result<HdKeypair, GenerateError> {
    let secp = Secp256k1::new();
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        if let Ok(master) = ExtendedKey::master_from_seed(&random_bytes()?, network) {
            return Ok(HdKeypair {
                extended_key: master.to_base58(),
                address: master.p2pkh_address(&secp),
            });
        }
    }
    Err(GenerateError::RetriesExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keypairs_follow_network_prefixes() {
        let main = generate_keypair(Network::Mainnet).unwrap();
        assert!(main.wif.starts_with('Q'));
        assert!(main.address.starts_with('D'));
        let test = generate_keypair(Network::Testnet).unwrap();
        assert!(test.wif.starts_with('c'));
        assert!(test.address.starts_with('n'));
    }

    #[test]
    fn generated_text_stays_within_length_contracts() {
        for network in [Network::Mainnet, Network::Testnet] {
            let pair = generate_keypair(network).unwrap();
            assert!(pair.wif.len() <= 53);
            assert!(pair.address.len() <= 35);
            let hd = generate_hd_master_keypair(network).unwrap();
            assert!(hd.extended_key.len() <= 112);
            assert!(hd.address.len() <= 35);
        }
    }

    #[test]
    fn generated_masters_follow_network_prefixes() {
        let main = generate_hd_master_keypair(Network::Mainnet).unwrap();
        assert!(main.extended_key.starts_with("dgpv"));
        let test = generate_hd_master_keypair(Network::Testnet).unwrap();
        assert!(test.extended_key.starts_with("tprv"));
    }

    #[test]
    fn successive_keypairs_differ() {
        let a = generate_keypair(Network::Mainnet).unwrap();
        let b = generate_keypair(Network::Mainnet).unwrap();
        assert_ne!(a.wif, b.wif);
        assert_ne!(a.address, b.address);
    }
}

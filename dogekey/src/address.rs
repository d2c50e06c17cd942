//! P2PKH address codec: a 20-byte public-key hash behind a network version
//! byte, Base58Check encoded.

use crypto_utils::base58;
use crypto_utils::hash::hash160;
use secp256k1::PublicKey;

use crate::error::DecodeError;
use crate::network::Network;

/// Encodes a 20-byte public-key hash as an address. At most 35 characters.
pub fn encode(hash: &[u8; 20], network: Network) -> String {
    let mut payload = Vec::with_capacity(21);
    payload.push(network.p2pkh_version());
    payload.extend_from_slice(hash);
    base58::check_encode(&payload)
}

/// Address for a public key, hashing its compressed or uncompressed SEC1
/// form to match the WIF compression flag the key was carried with.
pub fn from_public_key(key: &PublicKey, network: Network, compressed: bool) -> String {
    let digest = if compressed {
        hash160(&key.serialize())
    } else {
        hash160(&key.serialize_uncompressed())
    };
    encode(&digest, network)
}

/// Decodes an address into its raw version byte and hash. The version is
/// returned as-is; callers that care about the network compare it themselves.
pub fn decode(s: &str) -> Result<(u8, [u8; 20]), DecodeError> {
    let data = base58::check_decode(s)?;
    if data.len() != 21 {
        return Err(DecodeError::InvalidLength);
    }
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&data[1..]);
    Ok((data[0], hash))
}

/// Pure format-plus-checksum predicate for callers that only need a yes/no
/// answer; `decode` is the diagnostic form.
pub fn verify(s: &str) -> bool {
    decode(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAINNET_ADDRESS: &str = "D7AM5jDQ7xRRK7bMCZ87e4BsFxHxCdDbXd";

    #[test]
    fn reference_address_roundtrips() {
        let (version, hash) = decode(MAINNET_ADDRESS).unwrap();
        assert_eq!(version, Network::Mainnet.p2pkh_version());
        assert_eq!(encode(&hash, Network::Mainnet), MAINNET_ADDRESS);
    }

    #[test]
    fn verify_accepts_valid_rejects_garbage() {
        assert!(verify(MAINNET_ADDRESS));
        // base58 charset but broken checksum
        assert!(!verify("Dasdfasdfasdfasdfasdfasdfasdfasdfx"));
        assert!(!verify("DP6xxxDJxxxJAaWucRfsPvXLPGRyF3DdeP"));
        // outside the charset entirely
        assert!(!verify("D0!!"));
        assert!(!verify(""));
    }

    #[test]
    fn single_character_flip_is_caught() {
        let mut chars: Vec<char> = MAINNET_ADDRESS.chars().collect();
        chars[10] = if chars[10] == 'X' { 'Y' } else { 'X' };
        let corrupted: String = chars.into_iter().collect();
        assert!(!verify(&corrupted));
    }

    #[test]
    fn short_payload_is_invalid_length() {
        let text = base58::check_encode(&[Network::Mainnet.p2pkh_version(); 5]);
        assert_eq!(decode(&text), Err(DecodeError::InvalidLength));
    }

    proptest! {
        #[test]
        fn roundtrip_any_hash(hash in any::<[u8; 20]>()) {
            for network in [Network::Mainnet, Network::Testnet] {
                let text = encode(&hash, network);
                prop_assert!(text.len() <= 35);
                let (version, decoded) = decode(&text).unwrap();
                prop_assert_eq!(version, network.p2pkh_version());
                prop_assert_eq!(decoded, hash);
                prop_assert!(verify(&text));
            }
        }
    }
}

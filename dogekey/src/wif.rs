//! Wallet Import Format: Base58Check text carrying a raw private-key scalar,
//! a network version byte, and an optional compression flag.

use crypto_utils::base58;
use secp256k1::SecretKey;

use crate::error::DecodeError;
use crate::network::Network;

/// Encodes a private key as WIF text. The result is at most 53 characters.
pub fn encode(secret: &SecretKey, network: Network, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(network.wif_version());
    payload.extend_from_slice(&secret.secret_bytes());
    if compressed {
        payload.push(0x01);
    }
    base58::check_encode(&payload)
}

/// Decodes WIF text, validating it against the expected network.
pub fn decode(s: &str, network: Network) -> Result<(SecretKey, bool), DecodeError> {
    let data = base58::check_decode(s)?;
    let compressed = match data.len() {
        33 => false,
        34 => true,
        _ => return Err(DecodeError::InvalidLength),
    };
    if compressed && data[33] != 0x01 {
        return Err(DecodeError::InvalidKeyData);
    }
    if data[0] != network.wif_version() {
        return Err(DecodeError::WrongNetwork);
    }
    let secret = SecretKey::from_slice(&data[1..33]).map_err(|_| DecodeError::InvalidKeyData)?;
    Ok((secret, compressed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use proptest::prelude::*;

    const MAINNET_WIF: &str = "QWgNKvA5LPD1HpopRFghjz6jPipHRAUrLjqTt7paxYX8cTbu5eRs";

    #[test]
    fn reference_wif_roundtrips() {
        let (secret, compressed) = decode(MAINNET_WIF, Network::Mainnet).unwrap();
        assert!(compressed);
        assert_eq!(encode(&secret, Network::Mainnet, true), MAINNET_WIF);
    }

    #[test]
    fn leading_characters_follow_network() {
        let secret = SecretKey::from_slice(&hex!(
            "0000000000000000000000000000000000000000000000000000000000000001"
        ))
        .unwrap();
        assert!(encode(&secret, Network::Mainnet, true).starts_with('Q'));
        assert!(encode(&secret, Network::Testnet, true).starts_with('c'));
    }

    #[test]
    fn network_mismatch_is_rejected() {
        assert_eq!(
            decode(MAINNET_WIF, Network::Testnet),
            Err(DecodeError::WrongNetwork)
        );
    }

    #[test]
    fn corruption_is_rejected() {
        let mut corrupted = String::from(MAINNET_WIF);
        corrupted.pop();
        corrupted.push('t');
        assert_eq!(
            decode(&corrupted, Network::Mainnet),
            Err(DecodeError::ChecksumMismatch)
        );
        assert_eq!(decode("", Network::Mainnet), Err(DecodeError::TooShort));
        assert!(decode("Q0li", Network::Mainnet).is_err());
    }

    #[test]
    fn wrong_payload_length_is_rejected() {
        // 32-byte payload: version byte plus a truncated scalar
        let mut payload = vec![Network::Mainnet.wif_version()];
        payload.extend_from_slice(&[0x42; 31]);
        let text = base58::check_encode(&payload);
        assert_eq!(
            decode(&text, Network::Mainnet),
            Err(DecodeError::InvalidLength)
        );
    }

    proptest! {
        #[test]
        fn roundtrip_any_scalar(bytes in any::<[u8; 32]>(), compressed in any::<bool>()) {
            prop_assume!(SecretKey::from_slice(&bytes).is_ok());
            let secret = SecretKey::from_slice(&bytes).unwrap();
            for network in [Network::Mainnet, Network::Testnet] {
                let text = encode(&secret, network, compressed);
                prop_assert!(text.len() <= 53);
                let (decoded, flag) = decode(&text, network).unwrap();
                prop_assert_eq!(decoded, secret);
                prop_assert_eq!(flag, compressed);
            }
        }
    }
}

//! BIP32-style extended keys: the 78-byte serialized record, master-key
//! construction from a seed, and hardened/non-hardened child derivation.

use crypto_utils::base58;
use crypto_utils::hash::hash160;
use crypto_utils::hmac::hmac_sha512;
use secp256k1::{All, PublicKey, Scalar, Secp256k1, SecretKey};

use crate::address;
use crate::error::{DecodeError, DeriveError};
use crate::network::Network;

/// Child indices at or above this offset derive hardened children.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// HMAC key for master-key generation, kept from the upstream BIP32 scheme.
const MASTER_SEED_KEY: &[u8] = b"Bitcoin seed";

/// Either half of an extended keypair: a private scalar (serialized with a
/// leading 0x00 pad byte) or a compressed public point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyMaterial {
    Private(SecretKey),
    Public(PublicKey),
}

/// An extended key: key material plus the chain code and tree metadata
/// needed to derive children. Immutable once constructed; derivation
/// returns a fresh key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedKey {
    pub network: Network,
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_index: u32,
    pub chain_code: [u8; 32],
    pub key: KeyMaterial,
}

impl ExtendedKey {
    /// Builds a depth-zero master key from a 16..=64 byte seed via
    /// HMAC-SHA512: the left half is the master scalar, the right half the
    /// chain code.
    pub fn master_from_seed(seed: &[u8], network: Network) -> Result<Self, DeriveError> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(DeriveError::InvalidSeed);
        }
        let i = hmac_sha512(MASTER_SEED_KEY, seed);
        let (il, ir) = i.split_at(32);
        let secret = SecretKey::from_slice(il).map_err(|_| DeriveError::InvalidSeed)?;
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(ir);
        Ok(ExtendedKey {
            network,
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_index: 0,
            chain_code,
            key: KeyMaterial::Private(secret),
        })
    }

    pub fn is_private(&self) -> bool {
        matches!(self.key, KeyMaterial::Private(_))
    }

    /// The compressed public point for this key's material.
    pub fn public_key(&self, secp: &Secp256k1<All>) -> PublicKey {
        match &self.key {
            KeyMaterial::Private(sk) => PublicKey::from_secret_key(secp, sk),
            KeyMaterial::Public(pk) => *pk,
        }
    }

    /// First 4 bytes of HASH160 of the compressed public key.
    pub fn fingerprint(&self, secp: &Secp256k1<All>) -> [u8; 4] {
        let digest = hash160(&self.public_key(secp).serialize());
        let mut fp = [0u8; 4];
        fp.copy_from_slice(&digest[..4]);
        fp
    }

    /// The public-only counterpart, sharing chain code and metadata.
    pub fn neuter(&self, secp: &Secp256k1<All>) -> ExtendedKey {
        ExtendedKey {
            network: self.network,
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_index: self.child_index,
            chain_code: self.chain_code,
            key: KeyMaterial::Public(self.public_key(secp)),
        }
    }

    /// P2PKH address of this key's public point, on this key's network.
    pub fn p2pkh_address(&self, secp: &Secp256k1<All>) -> String {
        address::from_public_key(&self.public_key(secp), self.network, true)
    }

    /// Derives the child at `index`. Hardened indices (`>= 2^31`) mix in the
    /// parent private scalar and fail on public-only parents. Deterministic:
    /// the same parent and index always yield the same child. On
    /// `InvalidDerivedKey` the caller retries with the next index.
    pub fn derive_child(&self, secp: &Secp256k1<All>, index: u32) -> Result<Self, DeriveError> {
        let mut data = Vec::with_capacity(37);
        match (&self.key, index >= HARDENED_OFFSET) {
            (KeyMaterial::Private(sk), true) => {
                data.push(0u8);
                data.extend_from_slice(&sk.secret_bytes());
            }
            (KeyMaterial::Private(sk), false) => {
                data.extend_from_slice(&PublicKey::from_secret_key(secp, sk).serialize());
            }
            (KeyMaterial::Public(_), true) => {
                return Err(DeriveError::HardenedRequiresPrivateKey);
            }
            (KeyMaterial::Public(pk), false) => {
                data.extend_from_slice(&pk.serialize());
            }
        }
        data.extend_from_slice(&index.to_be_bytes());

        let i = hmac_sha512(&self.chain_code, &data);
        let (il, ir) = i.split_at(32);
        let il: [u8; 32] = il.try_into().expect("HMAC halves are 32 bytes");

        let key = match &self.key {
            KeyMaterial::Private(sk) => {
                // child scalar = (IL + parent) mod n; zero or overflow is
                // invalid for this index
                let tweak =
                    Scalar::from_be_bytes(il).map_err(|_| DeriveError::InvalidDerivedKey)?;
                let child = sk
                    .clone()
                    .add_tweak(&tweak)
                    .map_err(|_| DeriveError::InvalidDerivedKey)?;
                KeyMaterial::Private(child)
            }
            KeyMaterial::Public(pk) => {
                // child point = IL*G + parent
                let tweak =
                    SecretKey::from_slice(&il).map_err(|_| DeriveError::InvalidDerivedKey)?;
                let tweak_point = PublicKey::from_secret_key(secp, &tweak);
                let child = pk
                    .combine(&tweak_point)
                    .map_err(|_| DeriveError::InvalidDerivedKey)?;
                KeyMaterial::Public(child)
            }
        };

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(ir);
        let depth = self
            .depth
            .checked_add(1)
            .ok_or(DeriveError::InvalidDerivedKey)?;

        Ok(ExtendedKey {
            network: self.network,
            depth,
            parent_fingerprint: self.fingerprint(secp),
            child_index: index,
            chain_code,
            key,
        })
    }

    /// Serializes the 78-byte record and Base58Check-encodes it. At most
    /// 112 characters of text.
    pub fn to_base58(&self) -> String {
        // version (4) | depth (1) | parent_fp (4) | child_index (4) |
        // chain_code (32) | key material (33)
        let mut payload = Vec::with_capacity(78);
        payload.extend_from_slice(&self.network.extended_version(self.is_private()));
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&self.child_index.to_be_bytes());
        payload.extend_from_slice(&self.chain_code);
        match &self.key {
            KeyMaterial::Private(sk) => {
                payload.push(0u8);
                payload.extend_from_slice(&sk.secret_bytes());
            }
            KeyMaterial::Public(pk) => payload.extend_from_slice(&pk.serialize()),
        }
        base58::check_encode(&payload)
    }

    /// Decodes Base58Check text into an extended key, recovering the network
    /// and key visibility from the version word.
    pub fn from_base58(s: &str) -> Result<Self, DecodeError> {
        let data = base58::check_decode(s)?;
        if data.len() != 78 {
            return Err(DecodeError::InvalidLength);
        }
        let version = [data[0], data[1], data[2], data[3]];
        let (network, is_private) =
            Network::from_extended_version(version).ok_or(DecodeError::UnknownVersion)?;
        let depth = data[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let child_index = u32::from_be_bytes([data[9], data[10], data[11], data[12]]);
        // a master key has no parent and no index
        if depth == 0 && (parent_fingerprint != [0u8; 4] || child_index != 0) {
            return Err(DecodeError::InvalidKeyData);
        }
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&data[13..45]);
        let key = if is_private {
            if data[45] != 0 {
                return Err(DecodeError::InvalidKeyData);
            }
            let secret =
                SecretKey::from_slice(&data[46..78]).map_err(|_| DecodeError::InvalidKeyData)?;
            KeyMaterial::Private(secret)
        } else {
            let public =
                PublicKey::from_slice(&data[45..78]).map_err(|_| DecodeError::InvalidKeyData)?;
            KeyMaterial::Public(public)
        };
        Ok(ExtendedKey {
            network,
            depth,
            parent_fingerprint,
            child_index,
            chain_code,
            key,
        })
    }
}

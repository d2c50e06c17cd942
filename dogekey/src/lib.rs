//! Key management for Dogecoin wallets: keypair generation, WIF and P2PKH
//! text codecs, BIP32-style extended keys with HD child derivation, and
//! association checks between keys and addresses.

pub mod address;
pub mod derivation;
pub mod error;
pub mod extended_key;
pub mod generate;
pub mod network;
pub mod verify;
pub mod wif;

pub use derivation::DerivationPath;
pub use error::{DecodeError, DeriveError, Error, GenerateError};
pub use extended_key::{ExtendedKey, KeyMaterial, HARDENED_OFFSET};
pub use generate::{generate_hd_master_keypair, generate_keypair, HdKeypair, Keypair};
pub use network::Network;
pub use verify::{
    derive_address_at, derive_hd_address, verify_address_format, verify_extended_keypair,
    verify_keypair,
};

/// Network selector, passed explicitly to every encode/decode/derive call.
/// Never held as ambient state, so concurrent callers on different networks
/// cannot interfere.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

// Dogecoin chain parameters.
const WIF_MAINNET: u8 = 0x9E; // compressed WIF leads with 'Q'
const WIF_TESTNET: u8 = 0xF1; // 'c'
const P2PKH_MAINNET: u8 = 0x1E; // 'D'
const P2PKH_TESTNET: u8 = 0x71; // 'n'

// Extended-key version words. Testnet keeps the Bitcoin tprv/tpub words,
// as the reference chain parameters do.
const XPRV_MAINNET: [u8; 4] = [0x02, 0xFA, 0xC3, 0x98]; // "dgpv"
const XPUB_MAINNET: [u8; 4] = [0x02, 0xFA, 0xCA, 0xFD]; // "dgub"
const XPRV_TESTNET: [u8; 4] = [0x04, 0x35, 0x83, 0x94]; // "tprv"
const XPUB_TESTNET: [u8; 4] = [0x04, 0x35, 0x87, 0xCF]; // "tpub"

impl Network {
    pub fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => WIF_MAINNET,
            Network::Testnet => WIF_TESTNET,
        }
    }

    pub fn p2pkh_version(self) -> u8 {
        match self {
            Network::Mainnet => P2PKH_MAINNET,
            Network::Testnet => P2PKH_TESTNET,
        }
    }

    pub fn extended_version(self, private: bool) -> [u8; 4] {
        match (self, private) {
            (Network::Mainnet, true) => XPRV_MAINNET,
            (Network::Mainnet, false) => XPUB_MAINNET,
            (Network::Testnet, true) => XPRV_TESTNET,
            (Network::Testnet, false) => XPUB_TESTNET,
        }
    }

    /// Recovers `(network, is_private)` from a serialized version word.
    pub fn from_extended_version(version: [u8; 4]) -> Option<(Network, bool)> {
        match version {
            XPRV_MAINNET => Some((Network::Mainnet, true)),
            XPUB_MAINNET => Some((Network::Mainnet, false)),
            XPRV_TESTNET => Some((Network::Testnet, true)),
            XPUB_TESTNET => Some((Network::Testnet, false)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_version_table_roundtrips() {
        for network in [Network::Mainnet, Network::Testnet] {
            for private in [true, false] {
                let version = network.extended_version(private);
                assert_eq!(
                    Network::from_extended_version(version),
                    Some((network, private))
                );
            }
        }
    }

    #[test]
    fn foreign_versions_are_rejected() {
        // Bitcoin mainnet xprv/xpub words
        assert_eq!(Network::from_extended_version([0x04, 0x88, 0xAD, 0xE4]), None);
        assert_eq!(Network::from_extended_version([0x04, 0x88, 0xB2, 0x1E]), None);
    }

    #[test]
    fn networks_never_share_version_bytes() {
        assert_ne!(Network::Mainnet.wif_version(), Network::Testnet.wif_version());
        assert_ne!(Network::Mainnet.p2pkh_version(), Network::Testnet.p2pkh_version());
    }
}

//! Network identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// Identifies which NEM network a transaction is addressed to.
///
/// Each network has a one-byte code that is also the first byte of every raw
/// address on that network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    #[default]
    Mainnet,
    /// The public test network.
    Testnet,
    /// Private Mijin chains.
    Mijin,
}

impl NetworkId {
    pub const MAINNET_CODE: u8 = 0x68;
    pub const TESTNET_CODE: u8 = 0x98;
    pub const MIJIN_CODE: u8 = 0x60;

    /// Wire code for this network.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Mainnet => Self::MAINNET_CODE,
            Self::Testnet => Self::TESTNET_CODE,
            Self::Mijin => Self::MIJIN_CODE,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            Self::MAINNET_CODE => Some(Self::Mainnet),
            Self::TESTNET_CODE => Some(Self::Testnet),
            Self::MIJIN_CODE => Some(Self::Mijin),
            _ => None,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Mijin => "mijin",
        }
    }

    /// Leading character of a base32-encoded address on this network.
    pub fn address_prefix(&self) -> char {
        match self {
            Self::Mainnet => 'N',
            Self::Testnet => 'T',
            Self::Mijin => 'M',
        }
    }
}

impl TryFrom<u8> for NetworkId {
    type Error = TypesError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(TypesError::UnknownNetwork(code))
    }
}

impl FromStr for NetworkId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            "mijin" => Ok(Self::Mijin),
            other => Err(TypesError::UnknownNetworkName(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Mosaic creation transaction: define a new mosaic under an owned namespace.

use serde::{Deserialize, Serialize};

use crate::error::UnknownCode;

/// Creation of a mosaic definition, paid to a creation sink.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicCreationTx {
    pub definition: Option<MosaicDefinition>,
    /// Creation sink address that receives the fee.
    pub sink: Option<String>,
    /// Creation fee in micro-XEM.
    pub fee: Option<u64>,
}

/// The properties of a mosaic being created.
///
/// `name`, `ticker` and `networks` describe already-known mosaics for display
/// purposes only and are refused on creation requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicDefinition {
    pub name: Option<String>,
    pub ticker: Option<String>,
    pub networks: Vec<u32>,
    pub namespace: Option<String>,
    pub mosaic: Option<String>,
    pub divisibility: Option<u32>,
    pub supply: Option<u64>,
    pub mutable_supply: Option<bool>,
    pub transferable: Option<bool>,
    pub description: Option<String>,
    pub levy: Option<MosaicLevy>,
}

/// A levy charged on every transfer of the mosaic.
///
/// Presence of this record is what makes a levy exist; its fields are still
/// optional on the wire and checked by validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MosaicLevy {
    #[serde(rename = "type")]
    pub kind: Option<LevyType>,
    pub fee: Option<u64>,
    pub address: Option<String>,
    pub namespace: Option<String>,
    pub mosaic: Option<String>,
}

/// How the levy fee is computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LevyType {
    /// A fixed quantity per transfer.
    Absolute = 1,
    /// A fraction of the transferred quantity.
    Percentile = 2,
}

impl TryFrom<u32> for LevyType {
    type Error = UnknownCode;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Absolute),
            2 => Ok(Self::Percentile),
            code => Err(UnknownCode { kind: "levy type", code }),
        }
    }
}

impl From<LevyType> for u32 {
    fn from(kind: LevyType) -> Self {
        kind as u32
    }
}

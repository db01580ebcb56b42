//! Mosaic supply change transaction.

use serde::{Deserialize, Serialize};

/// Supply change type code for minting units.
pub const SUPPLY_INCREASE: u32 = 1;
/// Supply change type code for burning units.
pub const SUPPLY_DECREASE: u32 = 2;

/// The type stays a raw code; only its presence is checked before signing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyChangeTx {
    pub namespace: Option<String>,
    pub mosaic: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<u32>,
    /// Number of whole units to add or remove.
    pub delta: Option<u64>,
}

//! Transfer transaction: send XEM and optionally mosaics to a recipient.

use serde::{Deserialize, Serialize};

/// A transfer of XEM and mosaics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferTx {
    /// Recipient address (base32).
    pub recipient: Option<String>,
    /// Amount in micro-XEM.
    pub amount: Option<u64>,
    /// Message payload. Carried as-is; encryption happens before signing.
    #[serde(with = "nem_types::serde_hex::option")]
    pub payload: Option<Vec<u8>>,
    /// Recipient public key, required by the host only for encrypted messages.
    #[serde(with = "nem_types::serde_hex::option")]
    pub public_key: Option<Vec<u8>>,
    pub mosaics: Vec<TransferMosaic>,
}

/// One mosaic attached to a transfer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferMosaic {
    pub namespace: Option<String>,
    pub mosaic: Option<String>,
    pub quantity: Option<u64>,
}

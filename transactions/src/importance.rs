//! Importance transfer transaction: delegate harvesting to a remote account.

use serde::{Deserialize, Serialize};

/// Mode code for activating a remote harvesting account.
pub const IMPORTANCE_TRANSFER_ACTIVATE: u32 = 1;
/// Mode code for deactivating a remote harvesting account.
pub const IMPORTANCE_TRANSFER_DEACTIVATE: u32 = 2;

/// The mode stays a raw code; only its presence is checked before signing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportanceTransferTx {
    pub mode: Option<u32>,
    /// Public key of the remote harvesting account.
    #[serde(with = "nem_types::serde_hex::option")]
    pub public_key: Option<Vec<u8>>,
}

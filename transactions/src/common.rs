//! Fields shared by every transaction type.

use nem_types::{NetworkId, PublicKey};
use serde::{Deserialize, Serialize};

/// The common header as received from the host.
///
/// `signer` must be present exactly when the header belongs to a transaction
/// embedded in a multisig wrapper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonHeader {
    /// Network code; absent means mainnet.
    pub network: Option<u32>,
    pub timestamp: Option<u32>,
    pub fee: Option<u64>,
    pub deadline: Option<u32>,
    #[serde(with = "nem_types::serde_hex::option")]
    pub signer: Option<Vec<u8>>,
    /// Set by the host when this header is the inner half of a multisig transaction.
    pub is_multisig_wrapped: bool,
}

/// A common header that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionCommon {
    pub network: NetworkId,
    pub timestamp: u32,
    pub fee: u64,
    pub deadline: u32,
    pub signer: Option<PublicKey>,
}

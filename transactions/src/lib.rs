//! NEM sign-request model and the validation gate that runs before signing.
//!
//! Transaction types:
//! - **Transfer**: send XEM and mosaics to a recipient
//! - **ProvisionNamespace**: rent a namespace, paying a rental sink
//! - **MosaicCreation**: define a mosaic, optionally with a levy
//! - **SupplyChange**: grow or shrink the supply of a mutable mosaic
//! - **AggregateModification**: add or remove multisig cosignatories
//! - **ImportanceTransfer**: delegate harvesting to a remote account
//!
//! A host hands over a [`SignTxRequest`] (every slot optional, as received on
//! the wire). [`validate_request`] dispatches it to exactly one
//! [`Transaction`] and checks it, returning either a [`ValidatedRequest`] or
//! the first [`ValidationError`] found.

pub mod aggregate;
pub mod common;
pub mod error;
pub mod importance;
pub mod mosaic;
pub mod provision;
pub mod request;
pub mod supply;
pub mod transfer;
pub mod validation;

pub use common::{CommonHeader, TransactionCommon};
pub use error::{HeaderContext, PublicKeyDefect, ValidationError};
pub use request::{SignTxRequest, TransactionRequest, ValidatedRequest};
pub use validation::{validate, validate_common, validate_request};

use serde::{Deserialize, Serialize};

/// The closed set of operations a sign request can carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transaction {
    Transfer(transfer::TransferTx),
    ProvisionNamespace(provision::ProvisionNamespaceTx),
    MosaicCreation(mosaic::MosaicCreationTx),
    SupplyChange(supply::SupplyChangeTx),
    AggregateModification(aggregate::AggregateModificationTx),
    ImportanceTransfer(importance::ImportanceTransferTx),
}

impl Transaction {
    /// Short name used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transfer(_) => "transfer",
            Self::ProvisionNamespace(_) => "provision_namespace",
            Self::MosaicCreation(_) => "mosaic_creation",
            Self::SupplyChange(_) => "supply_change",
            Self::AggregateModification(_) => "aggregate_modification",
            Self::ImportanceTransfer(_) => "importance_transfer",
        }
    }

    /// NEM transaction type code this operation serializes to.
    pub fn type_code(&self) -> u16 {
        match self {
            Self::Transfer(_) => 0x0101,
            Self::ImportanceTransfer(_) => 0x0801,
            Self::AggregateModification(_) => 0x1001,
            Self::ProvisionNamespace(_) => 0x2001,
            Self::MosaicCreation(_) => 0x4001,
            Self::SupplyChange(_) => 0x4002,
        }
    }
}

/// NEM transaction type code of the multisig wrapper.
pub const MULTISIG_TYPE_CODE: u16 = 0x1004;

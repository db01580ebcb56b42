//! Sign requests: the flat wire shape and the dispatched shape.

use nem_types::NetworkId;
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateModificationTx;
use crate::common::{CommonHeader, TransactionCommon};
use crate::error::ValidationError;
use crate::importance::ImportanceTransferTx;
use crate::mosaic::MosaicCreationTx;
use crate::provision::ProvisionNamespaceTx;
use crate::supply::SupplyChangeTx;
use crate::transfer::TransferTx;
use crate::Transaction;

/// A sign request exactly as a host delivers it.
///
/// Every slot is optional here. Dispatching into a [`TransactionRequest`]
/// enforces that the common header is present and exactly one payload is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignTxRequest {
    /// Common header of the transaction to sign.
    pub transaction: Option<CommonHeader>,
    /// Header of the multisig wrapper, when `transaction` is carried inside one.
    pub multisig: Option<CommonHeader>,
    pub transfer: Option<TransferTx>,
    pub provision_namespace: Option<ProvisionNamespaceTx>,
    pub mosaic_creation: Option<MosaicCreationTx>,
    pub supply_change: Option<SupplyChangeTx>,
    pub aggregate_modification: Option<AggregateModificationTx>,
    pub importance_transfer: Option<ImportanceTransferTx>,
}

impl SignTxRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of payload slots that are set.
    pub fn payload_count(&self) -> usize {
        [
            self.transfer.is_some(),
            self.provision_namespace.is_some(),
            self.mosaic_creation.is_some(),
            self.supply_change.is_some(),
            self.aggregate_modification.is_some(),
            self.importance_transfer.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// A sign request carrying exactly one operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub common: CommonHeader,
    pub multisig: Option<CommonHeader>,
    pub transaction: Transaction,
}

impl TransactionRequest {
    pub fn new(common: CommonHeader, transaction: Transaction) -> Self {
        Self {
            common,
            multisig: None,
            transaction,
        }
    }

    /// Carry this request inside a multisig wrapper with the given header.
    pub fn with_multisig(mut self, wrapper: CommonHeader) -> Self {
        self.multisig = Some(wrapper);
        self
    }
}

impl TryFrom<SignTxRequest> for TransactionRequest {
    type Error = ValidationError;

    fn try_from(request: SignTxRequest) -> Result<Self, Self::Error> {
        let common = request.transaction.ok_or(ValidationError::NoCommonProvided)?;

        let mut payloads = [
            request.transfer.map(Transaction::Transfer),
            request.provision_namespace.map(Transaction::ProvisionNamespace),
            request.mosaic_creation.map(Transaction::MosaicCreation),
            request.supply_change.map(Transaction::SupplyChange),
            request
                .aggregate_modification
                .map(Transaction::AggregateModification),
            request.importance_transfer.map(Transaction::ImportanceTransfer),
        ]
        .into_iter()
        .flatten();

        let transaction = payloads
            .next()
            .ok_or(ValidationError::NoTransactionProvided)?;
        if payloads.next().is_some() {
            return Err(ValidationError::MultipleTransactionsProvided);
        }

        Ok(Self {
            common,
            multisig: request.multisig,
            transaction,
        })
    }
}

/// A request that passed every check and may be serialized and signed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedRequest {
    pub common: TransactionCommon,
    pub multisig: Option<TransactionCommon>,
    pub transaction: Transaction,
}

impl ValidatedRequest {
    /// The resolved network the transaction is addressed to.
    pub fn network(&self) -> NetworkId {
        self.common.network
    }
}

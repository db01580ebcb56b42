//! Transaction validation logic.
//!
//! Every check here is stateless and runs before anything is signed. The first
//! violated rule aborts validation; checks run in a fixed order so that the
//! same request always reports the same reason.

use nem_types::params::{MAX_DIVISIBILITY, MAX_SUPPLY};
use nem_types::{AddressChecksumOracle, NetworkId, PublicKey, PUBLIC_KEY_SIZE};
use tracing::{debug, warn};

use crate::aggregate::{AggregateModificationTx, ModificationType};
use crate::common::{CommonHeader, TransactionCommon};
use crate::error::{HeaderContext, PublicKeyDefect, ValidationError};
use crate::importance::ImportanceTransferTx;
use crate::mosaic::MosaicCreationTx;
use crate::provision::ProvisionNamespaceTx;
use crate::request::{SignTxRequest, TransactionRequest, ValidatedRequest};
use crate::supply::SupplyChangeTx;
use crate::transfer::TransferTx;
use crate::Transaction;

/// Dispatch a wire request to its single operation and validate it.
pub fn validate_request<O>(
    request: SignTxRequest,
    oracle: &O,
) -> Result<ValidatedRequest, ValidationError>
where
    O: AddressChecksumOracle + ?Sized,
{
    let request = TransactionRequest::try_from(request).map_err(|err| {
        warn!(code = err.code(), "sign request rejected: {err}");
        err
    })?;
    validate(request, oracle)
}

/// Validate a dispatched request.
///
/// The transaction header is checked as an inner header exactly when it is
/// marked `is_multisig_wrapped`.
pub fn validate<O>(request: TransactionRequest, oracle: &O) -> Result<ValidatedRequest, ValidationError>
where
    O: AddressChecksumOracle + ?Sized,
{
    let kind = request.transaction.kind();
    debug!(kind, "validating sign request");

    match check_request(&request, oracle) {
        Ok((common, multisig)) => {
            debug!(kind, network = %common.network, "sign request accepted");
            Ok(ValidatedRequest {
                common,
                multisig,
                transaction: request.transaction,
            })
        }
        Err(err) => {
            warn!(kind, code = err.code(), "sign request rejected: {err}");
            Err(err)
        }
    }
}

fn check_request<O>(
    request: &TransactionRequest,
    oracle: &O,
) -> Result<(TransactionCommon, Option<TransactionCommon>), ValidationError>
where
    O: AddressChecksumOracle + ?Sized,
{
    let inner = request.common.is_multisig_wrapped;
    let common = validate_common(&request.common, inner)?;

    let multisig = match &request.multisig {
        Some(wrapper) => Some(validate_multisig_wrapper(wrapper, &common, inner)?),
        None => None,
    };

    validate_transaction(&request.transaction, common.network, oracle)?;
    Ok((common, multisig))
}

/// Run the per-type validator matching `tx`.
pub fn validate_transaction<O>(
    tx: &Transaction,
    network: NetworkId,
    oracle: &O,
) -> Result<(), ValidationError>
where
    O: AddressChecksumOracle + ?Sized,
{
    match tx {
        Transaction::Transfer(transfer) => validate_transfer(transfer, network, oracle),
        Transaction::ProvisionNamespace(provision) => {
            validate_provision_namespace(provision, network, oracle)
        }
        Transaction::MosaicCreation(creation) => validate_mosaic_creation(creation, network, oracle),
        Transaction::SupplyChange(supply) => validate_supply_change(supply),
        Transaction::AggregateModification(aggregate) => validate_aggregate_modification(aggregate),
        Transaction::ImportanceTransfer(importance) => validate_importance_transfer(importance),
    }
}

/// Map an optional network code to a known network. Absent means mainnet.
pub fn resolve_network(code: Option<u32>) -> Result<NetworkId, ValidationError> {
    match code {
        None => Ok(NetworkId::default()),
        Some(code) => u8::try_from(code)
            .ok()
            .and_then(NetworkId::from_code)
            .ok_or(ValidationError::InvalidNetwork(code)),
    }
}

/// Validate the header shared by every transaction type.
///
/// A signer is required on inner headers and forbidden on outer ones. An outer
/// header with a signer is rejected before anything else is reported; an
/// inner header without one is reported as a missing field.
pub fn validate_common(header: &CommonHeader, inner: bool) -> Result<TransactionCommon, ValidationError> {
    let network = resolve_network(header.network)?;

    // Later fields win: deadline over fee over timestamp.
    let mut fields = match (header.timestamp, header.fee, header.deadline) {
        (Some(timestamp), Some(fee), Some(deadline)) => Ok((timestamp, fee, deadline)),
        (_, _, None) => Err("deadline"),
        (_, None, _) => Err("fee"),
        (None, _, _) => Err("timestamp"),
    };

    let has_signer = header.signer.is_some();
    if inner != has_signer {
        if !inner {
            return Err(ValidationError::SignerNotAllowedOuter);
        }
        fields = Err("signer");
    }

    let (timestamp, fee, deadline) = fields.map_err(|field| ValidationError::MissingField {
        field,
        context: HeaderContext::from_inner(inner),
    })?;

    let signer = match header.signer.as_deref() {
        Some(signer) => Some(validate_public_key(
            Some(signer),
            "Invalid signer public key in inner transaction",
        )?),
        None => None,
    };

    Ok(TransactionCommon {
        network,
        timestamp,
        fee,
        deadline,
        signer,
    })
}

/// Validate the header of the multisig wrapper around an inner transaction.
fn validate_multisig_wrapper(
    wrapper: &CommonHeader,
    inner_common: &TransactionCommon,
    inner_marked: bool,
) -> Result<TransactionCommon, ValidationError> {
    if !inner_marked {
        return Err(ValidationError::CrossFieldConstraintViolated(
            "multisig wrapper requires a wrapped inner transaction",
        ));
    }

    let outer = validate_common(wrapper, false)?;
    if outer.network != inner_common.network {
        return Err(ValidationError::CrossFieldConstraintViolated(
            "inner transaction network is different",
        ));
    }
    Ok(outer)
}

/// Check the shape of a public key: present, non-empty, exactly 32 bytes.
pub fn validate_public_key(key: Option<&[u8]>, context: &'static str) -> Result<PublicKey, ValidationError> {
    let key = match key {
        Some(key) if !key.is_empty() => key,
        _ => {
            return Err(ValidationError::InvalidPublicKey {
                context,
                reason: PublicKeyDefect::Missing,
            })
        }
    };
    if key.len() != PUBLIC_KEY_SIZE {
        return Err(ValidationError::InvalidPublicKey {
            context,
            reason: PublicKeyDefect::BadLength,
        });
    }
    PublicKey::try_from(key).map_err(|_| ValidationError::InvalidPublicKey {
        context,
        reason: PublicKeyDefect::BadLength,
    })
}

/// Validate a transfer transaction.
pub fn validate_transfer<O>(tx: &TransferTx, network: NetworkId, oracle: &O) -> Result<(), ValidationError>
where
    O: AddressChecksumOracle + ?Sized,
{
    let recipient = tx
        .recipient
        .as_deref()
        .ok_or(ValidationError::missing("recipient"))?;
    if tx.amount.is_none() {
        return Err(ValidationError::missing("amount"));
    }

    if let Some(public_key) = tx.public_key.as_deref() {
        validate_public_key(Some(public_key), "Invalid recipient public key")?;
    }

    if !oracle.validate_address(recipient, network) {
        return Err(ValidationError::InvalidAddress("recipient"));
    }

    for mosaic in &tx.mosaics {
        if mosaic.namespace.is_none() {
            return Err(ValidationError::missing("mosaic namespace"));
        }
        if mosaic.mosaic.is_none() {
            return Err(ValidationError::missing("mosaic name"));
        }
        if mosaic.quantity.is_none() {
            return Err(ValidationError::missing("mosaic quantity"));
        }
    }

    Ok(())
}

/// Validate a provision namespace transaction.
pub fn validate_provision_namespace<O>(
    tx: &ProvisionNamespaceTx,
    network: NetworkId,
    oracle: &O,
) -> Result<(), ValidationError>
where
    O: AddressChecksumOracle + ?Sized,
{
    if tx.namespace.is_none() {
        return Err(ValidationError::missing("namespace"));
    }
    let sink = tx
        .sink
        .as_deref()
        .ok_or(ValidationError::missing("rental sink"))?;
    if tx.fee.is_none() {
        return Err(ValidationError::missing("rental sink fee"));
    }

    if !oracle.validate_address(sink, network) {
        return Err(ValidationError::InvalidAddress("rental sink"));
    }

    Ok(())
}

/// Validate a mosaic creation transaction.
///
/// Divisibility and supply come as a pair. A levy makes the whole definition
/// mandatory and bounds divisibility and supply.
pub fn validate_mosaic_creation<O>(
    tx: &MosaicCreationTx,
    network: NetworkId,
    oracle: &O,
) -> Result<(), ValidationError>
where
    O: AddressChecksumOracle + ?Sized,
{
    let definition = tx
        .definition
        .as_ref()
        .ok_or(ValidationError::missing("mosaic definition"))?;
    let sink = tx
        .sink
        .as_deref()
        .ok_or(ValidationError::missing("creation sink"))?;
    if tx.fee.is_none() {
        return Err(ValidationError::missing("creation sink fee"));
    }

    if !oracle.validate_address(sink, network) {
        return Err(ValidationError::InvalidAddress("creation sink"));
    }

    if definition.name.is_some() {
        return Err(ValidationError::LegacyFieldNotAllowed("Name"));
    }
    if definition.ticker.is_some() {
        return Err(ValidationError::LegacyFieldNotAllowed("Ticker"));
    }
    if !definition.networks.is_empty() {
        return Err(ValidationError::LegacyFieldNotAllowed("Networks"));
    }

    if definition.namespace.is_none() {
        return Err(ValidationError::missing("mosaic namespace"));
    }
    if definition.mosaic.is_none() {
        return Err(ValidationError::missing("mosaic name"));
    }

    match (definition.divisibility, definition.supply) {
        (None, Some(_)) => {
            return Err(ValidationError::CrossFieldConstraintViolated(
                "Definition divisibility needs to be provided when supply is",
            ))
        }
        (Some(_), None) => {
            return Err(ValidationError::CrossFieldConstraintViolated(
                "Definition supply needs to be provided when divisibility is",
            ))
        }
        _ => {}
    }

    let Some(levy) = &definition.levy else {
        return Ok(());
    };

    if levy.fee.is_none() {
        return Err(ValidationError::missing("levy fee"));
    }
    let levy_address = levy
        .address
        .as_deref()
        .ok_or(ValidationError::missing("levy address"))?;
    if levy.namespace.is_none() {
        return Err(ValidationError::missing("levy namespace"));
    }
    if levy.mosaic.is_none() {
        return Err(ValidationError::missing("levy mosaic name"));
    }

    let divisibility = definition
        .divisibility
        .ok_or(ValidationError::missing("divisibility"))?;
    let supply = definition
        .supply
        .ok_or(ValidationError::missing("supply"))?;
    if definition.mutable_supply.is_none() {
        return Err(ValidationError::missing("supply mutability"));
    }
    if definition.transferable.is_none() {
        return Err(ValidationError::missing("mosaic transferability"));
    }
    if definition.description.is_none() {
        return Err(ValidationError::missing("description"));
    }

    if divisibility > MAX_DIVISIBILITY {
        return Err(ValidationError::ValueOutOfRange {
            field: "divisibility",
            value: u64::from(divisibility),
            max: u64::from(MAX_DIVISIBILITY),
        });
    }
    if supply > MAX_SUPPLY {
        return Err(ValidationError::ValueOutOfRange {
            field: "supply",
            value: supply,
            max: MAX_SUPPLY,
        });
    }

    if !oracle.validate_address(levy_address, network) {
        return Err(ValidationError::InvalidAddress("levy"));
    }

    Ok(())
}

/// Validate a mosaic supply change transaction. Presence checks only.
pub fn validate_supply_change(tx: &SupplyChangeTx) -> Result<(), ValidationError> {
    if tx.namespace.is_none() {
        return Err(ValidationError::missing("namespace"));
    }
    if tx.mosaic.is_none() {
        return Err(ValidationError::missing("mosaic"));
    }
    if tx.kind.is_none() {
        return Err(ValidationError::missing("type"));
    }
    if tx.delta.is_none() {
        return Err(ValidationError::missing("delta"));
    }
    Ok(())
}

/// Validate an aggregate modification transaction.
pub fn validate_aggregate_modification(tx: &AggregateModificationTx) -> Result<(), ValidationError> {
    if tx.creation && tx.modifications.is_empty() {
        return Err(ValidationError::missing("modifications"));
    }

    for modification in &tx.modifications {
        // Code 0 counts as absent.
        let code = modification
            .kind
            .filter(|code| *code != 0)
            .ok_or(ValidationError::missing("modification type"))?;
        let kind =
            ModificationType::try_from(code).map_err(|_| ValidationError::UnknownModificationType(code))?;
        if tx.creation && kind == ModificationType::Delete {
            return Err(ValidationError::InvalidModificationForCreation);
        }
        validate_public_key(
            modification.public_key.as_deref(),
            "Invalid cosignatory public key provided",
        )?;
    }

    Ok(())
}

/// Validate an importance transfer transaction.
///
/// The mode is only required to be present.
pub fn validate_importance_transfer(tx: &ImportanceTransferTx) -> Result<(), ValidationError> {
    if tx.mode.is_none() {
        return Err(ValidationError::missing("mode"));
    }
    validate_public_key(
        tx.public_key.as_deref(),
        "Invalid remote account public key provided",
    )?;
    Ok(())
}

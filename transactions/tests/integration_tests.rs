//! Integration tests exercising the full request pipeline:
//! JSON → dispatch → header checks → per-type checks with real address checksums.

use nem_crypto::{encode_address, NemAddressCodec};
use nem_transactions::{
    validate_request, HeaderContext, PublicKeyDefect, SignTxRequest, Transaction, ValidationError,
};
use nem_types::{NetworkId, PublicKey};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn address(network: NetworkId, seed: u8) -> String {
    encode_address(network, &[seed; 20])
}

fn key_hex(byte: u8, len: usize) -> String {
    hex::encode(vec![byte; len])
}

fn parse(json: &str) -> SignTxRequest {
    SignTxRequest::from_json(json).expect("request json")
}

fn check(json: &str) -> Result<nem_transactions::ValidatedRequest, ValidationError> {
    validate_request(parse(json), &NemAddressCodec)
}

fn transfer_json(network: u8, recipient: &str) -> String {
    format!(
        r#"{{
            "transaction": {{"network": {network}, "timestamp": 74649215, "fee": 2000000, "deadline": 74735615}},
            "transfer": {{"recipient": "{recipient}", "amount": 2000000}}
        }}"#
    )
}

// ---------------------------------------------------------------------------
// Transfer
// ---------------------------------------------------------------------------

#[test]
fn transfer_to_checksummed_address_is_accepted() {
    let recipient = address(NetworkId::Testnet, 7);
    let validated = check(&transfer_json(0x98, &recipient)).unwrap();
    assert_eq!(validated.network(), NetworkId::Testnet);
    assert_eq!(validated.transaction.type_code(), 0x0101);
    match validated.transaction {
        Transaction::Transfer(tx) => assert_eq!(tx.recipient.as_deref(), Some(recipient.as_str())),
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn transfer_to_other_network_address_is_rejected() {
    let recipient = address(NetworkId::Mainnet, 7);
    assert_eq!(
        check(&transfer_json(0x98, &recipient)),
        Err(ValidationError::InvalidAddress("recipient"))
    );
}

#[test]
fn transfer_with_corrupted_checksum_is_rejected() {
    let mut recipient = address(NetworkId::Testnet, 9);
    let last = recipient.pop().unwrap();
    recipient.push(if last == 'A' { 'B' } else { 'A' });
    assert_eq!(
        check(&transfer_json(0x98, &recipient)),
        Err(ValidationError::InvalidAddress("recipient"))
    );
}

#[test]
fn absent_network_means_mainnet_addresses() {
    let recipient = address(NetworkId::Mainnet, 3);
    let json = format!(
        r#"{{
            "transaction": {{"timestamp": 1, "fee": 2, "deadline": 3}},
            "transfer": {{"recipient": "{recipient}", "amount": 1}}
        }}"#
    );
    assert_eq!(check(&json).unwrap().network(), NetworkId::Mainnet);
}

#[test]
fn transfer_with_mosaics_and_public_key() {
    let recipient = address(NetworkId::Mijin, 1);
    let json = format!(
        r#"{{
            "transaction": {{"network": 96, "timestamp": 1, "fee": 2, "deadline": 3}},
            "transfer": {{
                "recipient": "{recipient}",
                "amount": 1000000,
                "payload": "68656c6c6f",
                "public_key": "{key}",
                "mosaics": [
                    {{"namespace": "nem", "mosaic": "xem", "quantity": 5}},
                    {{"namespace": "gimre.games", "mosaic": "paddles", "quantity": 1}}
                ]
            }}
        }}"#,
        key = key_hex(0xab, 32)
    );
    assert!(check(&json).is_ok());

    let broken = json.replace(r#", "quantity": 1}"#, "}");
    assert_eq!(
        check(&broken),
        Err(ValidationError::MissingField {
            field: "mosaic quantity",
            context: HeaderContext::Outer,
        })
    );
}

// ---------------------------------------------------------------------------
// Header and dispatch
// ---------------------------------------------------------------------------

#[test]
fn unknown_network_code_is_rejected() {
    let recipient = address(NetworkId::Testnet, 1);
    assert_eq!(
        check(&transfer_json(0x42, &recipient)),
        Err(ValidationError::InvalidNetwork(0x42))
    );
}

#[test]
fn request_without_header_or_payload() {
    assert_eq!(check("{}"), Err(ValidationError::NoCommonProvided));
    assert_eq!(
        check(r#"{"transaction": {"timestamp": 1, "fee": 2, "deadline": 3}}"#),
        Err(ValidationError::NoTransactionProvided)
    );
}

#[test]
fn outer_signer_is_rejected() {
    let json = format!(
        r#"{{
            "transaction": {{"network": 152, "timestamp": 1, "fee": 2, "deadline": 3, "signer": "{key}"}},
            "supply_change": {{"namespace": "a", "mosaic": "b", "type": 1, "delta": 1}}
        }}"#,
        key = key_hex(0x01, 32)
    );
    assert_eq!(check(&json), Err(ValidationError::SignerNotAllowedOuter));
}

#[test]
fn network_code_wider_than_a_byte_is_rejected() {
    let recipient = address(NetworkId::Testnet, 1);
    let json = transfer_json(0x98, &recipient).replace(r#""network": 152"#, r#""network": 360"#);
    assert_eq!(check(&json), Err(ValidationError::InvalidNetwork(360)));
}

#[test]
fn importance_transfer_with_unlisted_mode_is_accepted() {
    let json = format!(
        r#"{{
            "transaction": {{"network": 152, "timestamp": 1, "fee": 2, "deadline": 3}},
            "importance_transfer": {{"mode": 3, "public_key": "{}"}}
        }}"#,
        key_hex(0x11, 32)
    );
    let validated = check(&json).unwrap();
    assert_eq!(validated.transaction.kind(), "importance_transfer");
}

// ---------------------------------------------------------------------------
// Multisig
// ---------------------------------------------------------------------------

fn multisig_json(inner_network: u8, wrapper_network: u8, signer: &str) -> String {
    format!(
        r#"{{
            "transaction": {{
                "network": {inner_network}, "timestamp": 1, "fee": 2, "deadline": 3,
                "signer": "{signer}", "is_multisig_wrapped": true
            }},
            "multisig": {{"network": {wrapper_network}, "timestamp": 1, "fee": 6000000, "deadline": 3}},
            "aggregate_modification": {{
                "creation": true,
                "modifications": [{{"type": 1, "public_key": "{cosigner}"}}]
            }}
        }}"#,
        cosigner = key_hex(0x44, 32)
    )
}

#[test]
fn multisig_wrapped_aggregate_is_accepted() {
    let validated = check(&multisig_json(0x98, 0x98, &key_hex(0x11, 32))).unwrap();
    assert_eq!(validated.common.signer, Some(PublicKey([0x11; 32])));
    assert_eq!(validated.multisig.map(|m| m.fee), Some(6_000_000));
}

#[test]
fn multisig_network_mismatch_is_rejected() {
    assert_eq!(
        check(&multisig_json(0x98, 0x68, &key_hex(0x11, 32))),
        Err(ValidationError::CrossFieldConstraintViolated(
            "inner transaction network is different"
        ))
    );
}

#[test]
fn inner_signer_with_wrong_length_is_rejected() {
    assert_eq!(
        check(&multisig_json(0x98, 0x98, &key_hex(0x11, 20))),
        Err(ValidationError::InvalidPublicKey {
            context: "Invalid signer public key in inner transaction",
            reason: PublicKeyDefect::BadLength,
        })
    );
}

// ---------------------------------------------------------------------------
// Namespace and mosaics
// ---------------------------------------------------------------------------

#[test]
fn provision_namespace_with_real_sink() {
    let json = r#"{
        "transaction": {"network": 152, "timestamp": 1, "fee": 2, "deadline": 3},
        "provision_namespace": {
            "namespace": "gimre",
            "sink": "TAMESPACEWH4MKFMBCVFERDPOOP4FK7MTDJEYP35",
            "fee": 5000000000
        }
    }"#;
    assert!(check(json).is_ok());

    let mainnet = json.replace("152", "104");
    assert_eq!(check(&mainnet), Err(ValidationError::InvalidAddress("rental sink")));
}

fn mosaic_creation_json(extra_definition: &str, levy: &str) -> String {
    let sink = address(NetworkId::Testnet, 0x20);
    format!(
        r#"{{
            "transaction": {{"network": 152, "timestamp": 1, "fee": 2, "deadline": 3}},
            "mosaic_creation": {{
                "sink": "{sink}",
                "fee": 50000000000,
                "definition": {{
                    "namespace": "hellom",
                    "mosaic": "Hello mosaic",
                    "divisibility": 4,
                    "supply": 1000000,
                    "mutable_supply": true,
                    "transferable": true,
                    "description": "lorem"
                    {extra_definition}
                    {levy}
                }}
            }}
        }}"#
    )
}

#[test]
fn mosaic_creation_with_levy_is_accepted() {
    let levy = format!(
        r#", "levy": {{"type": 2, "fee": 100, "address": "{}", "namespace": "nem", "mosaic": "xem"}}"#,
        address(NetworkId::Testnet, 0x30)
    );
    let validated = check(&mosaic_creation_json("", &levy)).unwrap();
    assert_eq!(validated.transaction.kind(), "mosaic_creation");
}

#[test]
fn mosaic_creation_with_legacy_name_is_rejected() {
    let json = mosaic_creation_json(r#", "name": "Hello""#, "");
    assert_eq!(check(&json), Err(ValidationError::LegacyFieldNotAllowed("Name")));
}

#[test]
fn mosaic_creation_with_wide_legacy_network_is_rejected() {
    let json = mosaic_creation_json(r#", "networks": [300]"#, "");
    assert_eq!(check(&json), Err(ValidationError::LegacyFieldNotAllowed("Networks")));
}

#[test]
fn mosaic_creation_levy_without_type_runs_levy_checks() {
    let levy = r#", "levy": {"fee": 1, "namespace": "nem", "mosaic": "xem"}"#;
    assert_eq!(
        check(&mosaic_creation_json("", levy)),
        Err(ValidationError::MissingField {
            field: "levy address",
            context: HeaderContext::Outer,
        })
    );
}

#[test]
fn mosaic_creation_levy_address_is_checksummed() {
    let levy = format!(
        r#", "levy": {{"type": 1, "fee": 100, "address": "{}", "namespace": "nem", "mosaic": "xem"}}"#,
        address(NetworkId::Mainnet, 0x30)
    );
    assert_eq!(
        check(&mosaic_creation_json("", &levy)),
        Err(ValidationError::InvalidAddress("levy"))
    );
}

#[test]
fn supply_change_and_importance_transfer() {
    let supply = r#"{
        "transaction": {"network": 104, "timestamp": 1, "fee": 2, "deadline": 3},
        "supply_change": {"namespace": "gimre.games.pong", "mosaic": "paddles", "type": 2, "delta": 1}
    }"#;
    assert_eq!(check(supply).unwrap().transaction.type_code(), 0x4002);

    let importance = format!(
        r#"{{
            "transaction": {{"network": 104, "timestamp": 1, "fee": 2, "deadline": 3}},
            "importance_transfer": {{"mode": 2, "public_key": "{}"}}
        }}"#,
        key_hex(0x55, 32)
    );
    assert_eq!(check(&importance).unwrap().transaction.type_code(), 0x0801);
}

#[test]
fn validated_request_serializes_to_json() {
    let recipient = address(NetworkId::Testnet, 7);
    let validated = check(&transfer_json(0x98, &recipient)).unwrap();
    let value = serde_json::to_value(&validated).unwrap();
    assert_eq!(value["common"]["network"], "testnet");
    assert_eq!(value["transaction"]["transfer"]["recipient"], recipient.as_str());
}

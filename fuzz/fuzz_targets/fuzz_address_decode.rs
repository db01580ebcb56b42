#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use nem_crypto::{decode_address, encode_address, validate_address};
use nem_types::NetworkId;

#[derive(Debug, Arbitrary)]
struct AddressInput {
    network: u8,
    address: String,
    account_hash: [u8; 20],
}

// Decoding arbitrary strings must never panic, and every encoded address
// must validate on its own network.
fuzz_target!(|input: AddressInput| {
    let _ = decode_address(&input.address);

    let Some(network) = NetworkId::from_code(input.network) else {
        let _ = validate_address(&input.address, NetworkId::Mainnet);
        return;
    };
    let _ = validate_address(&input.address, network);

    let encoded = encode_address(network, &input.account_hash);
    assert!(validate_address(&encoded, network));
});

#![no_main]

use libfuzzer_sys::fuzz_target;

use nem_crypto::NemAddressCodec;
use nem_transactions::{validate_request, SignTxRequest};

// Feed arbitrary bytes through the JSON request surface and the validator.
// Validation must never panic and must give the same verdict twice.
fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<SignTxRequest>(data) else {
        return;
    };

    let first = validate_request(request.clone(), &NemAddressCodec);
    let second = validate_request(request, &NemAddressCodec);
    assert_eq!(first, second);
});

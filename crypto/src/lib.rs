//! Cryptographic primitives for NEM address handling.
//!
//! - **Keccak-256** (pre-standard SHA-3 padding) for address checksums
//! - RFC 4648 base32 address encoding and checksum validation

pub mod address;
pub mod hash;

pub use address::{decode_address, encode_address, validate_address, validate_raw_address, NemAddressCodec};
pub use hash::keccak_256;

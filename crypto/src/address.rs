//! NEM address encoding and checksum validation.
//!
//! Address format: base32(raw) where raw is 25 bytes:
//! `network_code (1) || account_hash (20) || checksum (4)`.
//!
//! Checksum: first 4 bytes of Keccak-256(network_code || account_hash).
//! Base32 alphabet: RFC 4648 upper case, no padding (200 bits → 40 chars).

use nem_types::params::{ACCOUNT_HASH_LEN, ADDRESS_CHECKSUM_LEN, ADDRESS_LEN, ADDRESS_RAW_LEN};
use nem_types::{AddressChecksumOracle, NetworkId};

/// RFC 4648 base32 alphabet.
const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const BASE32_DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let alpha = BASE32_ALPHABET;
    let mut i = 0;
    while i < 32 {
        table[alpha[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Bytes covered by the checksum.
const CHECKED_LEN: usize = 1 + ACCOUNT_HASH_LEN;

/// Encode a byte slice as base32 without padding.
fn encode_base32(bytes: &[u8]) -> String {
    let total_bits = bytes.len() * 8;
    let num_chars = total_bits.div_ceil(5);
    let mut result = String::with_capacity(num_chars);

    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u64;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[idx] as char);
        }
    }
    if bits_in_buffer > 0 {
        let idx = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(BASE32_ALPHABET[idx] as char);
    }

    result
}

/// Decode a base32 string into a fixed-size byte array. Returns `None` on
/// invalid characters or if the input is too short to fill `N` bytes.
fn decode_base32_fixed<const N: usize>(s: &str) -> Option<[u8; N]> {
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;
    let mut result = [0u8; N];
    let mut pos = 0;

    for c in s.bytes() {
        if c >= 128 {
            return None;
        }
        let val = BASE32_DECODE[c as usize];
        if val == 0xFF {
            return None;
        }
        buffer = (buffer << 5) | val as u64;
        bits_in_buffer += 5;
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            if pos < N {
                result[pos] = (buffer >> bits_in_buffer) as u8;
                pos += 1;
            }
        }
    }

    if pos < N {
        return None;
    }
    Some(result)
}

fn checksum(checked: &[u8]) -> [u8; ADDRESS_CHECKSUM_LEN] {
    let digest = crate::keccak_256(checked);
    let mut out = [0u8; ADDRESS_CHECKSUM_LEN];
    out.copy_from_slice(&digest[..ADDRESS_CHECKSUM_LEN]);
    out
}

/// Build the base32 address for an account hash on `network`.
pub fn encode_address(network: NetworkId, account_hash: &[u8; ACCOUNT_HASH_LEN]) -> String {
    let mut raw = [0u8; ADDRESS_RAW_LEN];
    raw[0] = network.code();
    raw[1..CHECKED_LEN].copy_from_slice(account_hash);
    let sum = checksum(&raw[..CHECKED_LEN]);
    raw[CHECKED_LEN..].copy_from_slice(&sum);
    encode_base32(&raw)
}

/// Decode an address string into its 25 raw bytes.
///
/// Only the length and the alphabet are checked; use [`validate_raw_address`]
/// for the network byte and checksum.
pub fn decode_address(address: &str) -> Option<[u8; ADDRESS_RAW_LEN]> {
    if address.len() != ADDRESS_LEN {
        return None;
    }
    decode_base32_fixed(address)
}

/// Check the network byte and checksum of a raw address.
pub fn validate_raw_address(raw: &[u8; ADDRESS_RAW_LEN], network: NetworkId) -> bool {
    if raw[0] != network.code() {
        return false;
    }
    checksum(&raw[..CHECKED_LEN]) == raw[CHECKED_LEN..]
}

/// Validate that an address string is well-formed for `network` and its checksum is correct.
pub fn validate_address(address: &str, network: NetworkId) -> bool {
    decode_address(address).is_some_and(|raw| validate_raw_address(&raw, network))
}

/// [`AddressChecksumOracle`] backed by the real NEM address codec.
#[derive(Clone, Copy, Debug, Default)]
pub struct NemAddressCodec;

impl AddressChecksumOracle for NemAddressCodec {
    fn validate_address(&self, address: &str, network: NetworkId) -> bool {
        validate_address(address, network)
    }
}

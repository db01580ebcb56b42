//! Protocol limits enforced on mosaic definitions and addresses.

/// Maximum number of decimal places a mosaic may declare.
pub const MAX_DIVISIBILITY: u32 = 6;

/// Maximum initial supply of a mosaic, in whole units.
pub const MAX_SUPPLY: u64 = 9_000_000_000;

/// Length of a base32-encoded address.
pub const ADDRESS_LEN: usize = 40;

/// Length of a decoded address: network byte, 20-byte account hash, 4-byte checksum.
pub const ADDRESS_RAW_LEN: usize = 25;

/// Length of the account hash embedded in an address.
pub const ACCOUNT_HASH_LEN: usize = 20;

/// Length of the checksum trailing a raw address.
pub const ADDRESS_CHECKSUM_LEN: usize = 4;

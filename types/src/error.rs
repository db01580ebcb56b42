//! Errors raised by the conversions in this crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("unknown NEM network code 0x{0:02x}")]
    UnknownNetwork(u8),

    #[error("unknown NEM network name: {0}")]
    UnknownNetworkName(String),

    #[error("public key must be {expected} bytes, got {actual}")]
    InvalidPublicKeyLength { expected: usize, actual: usize },
}

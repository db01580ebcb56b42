//! The address checksum seam.
//!
//! Validation consults an oracle instead of decoding addresses itself. The
//! concrete codec lives in `nem-crypto`; tests use `nem-nullables`.

use crate::NetworkId;

/// Answers whether an address string carries a valid checksum for a network.
///
/// Implementations must be pure: the same inputs always yield the same answer.
pub trait AddressChecksumOracle {
    fn validate_address(&self, address: &str, network: NetworkId) -> bool;
}

impl<T: AddressChecksumOracle + ?Sized> AddressChecksumOracle for &T {
    fn validate_address(&self, address: &str, network: NetworkId) -> bool {
        (**self).validate_address(address, network)
    }
}

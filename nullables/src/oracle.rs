//! Nullable address oracle with scripted checksum answers and call recording.

use std::cell::RefCell;
use std::collections::HashSet;

use nem_types::{AddressChecksumOracle, NetworkId};

/// A test oracle that accepts every address except the ones it was told to reject.
///
/// Every lookup is recorded so tests can assert which addresses were checked
/// and on which network.
pub struct NullAddressOracle {
    rejected: HashSet<String>,
    calls: RefCell<Vec<(String, NetworkId)>>,
}

impl NullAddressOracle {
    /// An oracle that accepts every address.
    pub fn accepting() -> Self {
        Self {
            rejected: HashSet::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// An oracle that rejects exactly the given addresses.
    pub fn rejecting<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rejected: addresses.into_iter().map(Into::into).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// All lookups made so far, in order.
    pub fn calls(&self) -> Vec<(String, NetworkId)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Forget recorded lookups.
    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Default for NullAddressOracle {
    fn default() -> Self {
        Self::accepting()
    }
}

impl AddressChecksumOracle for NullAddressOracle {
    fn validate_address(&self, address: &str, network: NetworkId) -> bool {
        self.calls
            .borrow_mut()
            .push((address.to_string(), network));
        !self.rejected.contains(address)
    }
}

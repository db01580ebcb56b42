//! Provision namespace transaction: rent a root namespace or a sub-namespace.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionNamespaceTx {
    pub namespace: Option<String>,
    /// Parent namespace when provisioning a sub-namespace.
    pub parent: Option<String>,
    /// Rental sink address that receives the fee.
    pub sink: Option<String>,
    /// Rental fee in micro-XEM.
    pub fee: Option<u64>,
}

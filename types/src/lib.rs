//! Fundamental types for NEM sign-request validation.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! network identifiers, public-key shape, protocol limits, the address checksum
//! oracle seam, and hex serde helpers for byte fields.

pub mod error;
pub mod keys;
pub mod network;
pub mod oracle;
pub mod params;
pub mod serde_hex;

pub use error::TypesError;
pub use keys::{PublicKey, PUBLIC_KEY_SIZE};
pub use network::NetworkId;
pub use oracle::AddressChecksumOracle;

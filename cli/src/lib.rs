//! Command-line front end for the NEM sign-request validator.
//!
//! The binary reads a JSON sign request, runs it through
//! [`nem_transactions::validate_request`] with the real address checksum
//! codec and prints a [`CheckReport`].

pub mod config;
pub mod error;
pub mod report;

pub use config::{CliConfig, OutputFormat};
pub use error::CliError;
pub use report::{AddressReport, CheckReport};

use std::io::Read;

use nem_crypto::NemAddressCodec;
use nem_transactions::{validate_request, SignTxRequest};
use nem_types::{AddressChecksumOracle, NetworkId};

/// Read a request from a file, or from stdin when `source` is `-`.
pub fn read_request(source: &str, limit: usize) -> Result<String, CliError> {
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut buf = String::new();
    let read = if source == "-" {
        std::io::stdin().lock().take(cap).read_to_string(&mut buf)
    } else {
        std::fs::File::open(source).and_then(|file| file.take(cap).read_to_string(&mut buf))
    };
    read.map_err(|source_err| CliError::Io {
        path: source.to_string(),
        source: source_err,
    })?;
    if buf.len() > limit {
        return Err(CliError::RequestTooLarge { limit });
    }
    Ok(buf)
}

/// Parse and validate one JSON sign request.
pub fn check_request_json<O>(json: &str, oracle: &O) -> Result<CheckReport, CliError>
where
    O: AddressChecksumOracle + ?Sized,
{
    let request = SignTxRequest::from_json(json)?;
    let outcome = validate_request(request, oracle);
    Ok(CheckReport::from_outcome(&outcome))
}

/// Check an address checksum against a network.
pub fn check_address(address: &str, network: NetworkId) -> AddressReport {
    AddressReport {
        address: address.to_string(),
        network,
        valid: NemAddressCodec.validate_address(address, network),
    }
}

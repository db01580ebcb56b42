//! Human and machine-readable verdicts.

use nem_transactions::{ValidatedRequest, ValidationError, MULTISIG_TYPE_CODE};
use nem_types::NetworkId;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::CliError;

/// Verdict on one sign request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckReport {
    Accepted {
        kind: &'static str,
        type_code: u16,
        network: NetworkId,
        /// Type code of the multisig wrapper, when the request carries one.
        #[serde(skip_serializing_if = "Option::is_none")]
        wrapper_type_code: Option<u16>,
    },
    Rejected {
        code: &'static str,
        reason: String,
    },
}

impl CheckReport {
    pub fn from_outcome(outcome: &Result<ValidatedRequest, ValidationError>) -> Self {
        match outcome {
            Ok(validated) => Self::Accepted {
                kind: validated.transaction.kind(),
                type_code: validated.transaction.type_code(),
                network: validated.network(),
                wrapper_type_code: validated.multisig.map(|_| MULTISIG_TYPE_CODE),
            },
            Err(err) => Self::Rejected {
                code: err.code(),
                reason: err.to_string(),
            },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(match self {
                Self::Accepted {
                    kind,
                    type_code,
                    network,
                    wrapper_type_code,
                } => {
                    let mut line = format!("accepted: {kind} (0x{type_code:04x}) on {network}");
                    if let Some(wrapper) = wrapper_type_code {
                        line.push_str(&format!(", multisig wrapped (0x{wrapper:04x})"));
                    }
                    line
                }
                Self::Rejected { code, reason } => format!("rejected: {reason} [{code}]"),
            }),
        }
    }
}

/// Verdict on one address checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressReport {
    pub address: String,
    pub network: NetworkId,
    pub valid: bool,
}

impl AddressReport {
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text if self.valid => {
                Ok(format!("{} is a valid {} address", self.address, self.network))
            }
            OutputFormat::Text => Ok(format!("{} is not a valid {} address", self.address, self.network)),
        }
    }
}

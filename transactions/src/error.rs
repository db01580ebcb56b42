use std::fmt;
use thiserror::Error;

/// Which header a missing common field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderContext {
    /// A top-level transaction, or a field outside the common header.
    Outer,
    /// A transaction carried inside a multisig wrapper.
    Inner,
}

impl HeaderContext {
    pub fn from_inner(inner: bool) -> Self {
        if inner {
            Self::Inner
        } else {
            Self::Outer
        }
    }
}

impl fmt::Display for HeaderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outer => Ok(()),
            Self::Inner => f.write_str(" in inner transaction"),
        }
    }
}

/// Why a public key failed the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyDefect {
    Missing,
    BadLength,
}

impl fmt::Display for PublicKeyDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("none provided"),
            Self::BadLength => f.write_str("invalid length"),
        }
    }
}

/// The first invariant a sign request violated.
///
/// Any of these means "do not sign". The message is meant to be shown to the
/// user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No common provided")]
    NoCommonProvided,

    #[error("No transaction provided")]
    NoTransactionProvided,

    #[error("More than one transaction provided")]
    MultipleTransactionsProvided,

    #[error("Invalid NEM network (code 0x{0:02x})")]
    InvalidNetwork(u32),

    #[error("No {field} provided{context}")]
    MissingField {
        field: &'static str,
        context: HeaderContext,
    },

    #[error("Signer not allowed in outer transaction")]
    SignerNotAllowedOuter,

    #[error("{context} ({reason})")]
    InvalidPublicKey {
        context: &'static str,
        reason: PublicKeyDefect,
    },

    #[error("Invalid {0} address")]
    InvalidAddress(&'static str),

    #[error("{0} not allowed in mosaic creation transactions")]
    LegacyFieldNotAllowed(&'static str),

    #[error("{0}")]
    CrossFieldConstraintViolated(&'static str),

    #[error("Invalid {field} provided ({value} exceeds maximum {max})")]
    ValueOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Unknown aggregate modification type {0}")]
    UnknownModificationType(u32),

    #[error("Cannot remove cosignatory when converting account")]
    InvalidModificationForCreation,
}

impl ValidationError {
    /// Shorthand for a missing field outside any header.
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingField {
            field,
            context: HeaderContext::Outer,
        }
    }

    /// Stable machine-readable identifier of the rejection kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoCommonProvided => "no_common_provided",
            Self::NoTransactionProvided => "no_transaction_provided",
            Self::MultipleTransactionsProvided => "multiple_transactions_provided",
            Self::InvalidNetwork(_) => "invalid_network",
            Self::MissingField { .. } => "missing_field",
            Self::SignerNotAllowedOuter => "signer_not_allowed_outer",
            Self::InvalidPublicKey { .. } => "invalid_public_key",
            Self::InvalidAddress(_) => "invalid_address",
            Self::LegacyFieldNotAllowed(_) => "legacy_field_not_allowed",
            Self::CrossFieldConstraintViolated(_) => "cross_field_constraint_violated",
            Self::ValueOutOfRange { .. } => "value_out_of_range",
            Self::UnknownModificationType(_) => "unknown_modification_type",
            Self::InvalidModificationForCreation => "invalid_modification_for_creation",
        }
    }
}

/// An integer code that does not name any variant of a wire enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: u32,
}

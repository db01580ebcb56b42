//! Aggregate modification transaction: add or remove multisig cosignatories.

use serde::{Deserialize, Serialize};

use crate::error::UnknownCode;

/// A batch of cosignatory changes on a multisig account.
///
/// With `creation` set, the batch converts a regular account into a multisig
/// account, so it must add at least one cosignatory and may not remove any.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateModificationTx {
    pub modifications: Vec<CosignatoryModification>,
    pub creation: bool,
}

/// One cosignatory change.
///
/// The type stays a raw code so that unknown values reach validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosignatoryModification {
    #[serde(rename = "type")]
    pub kind: Option<u32>,
    #[serde(with = "nem_types::serde_hex::option")]
    pub public_key: Option<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModificationType {
    Add = 1,
    Delete = 2,
}

impl TryFrom<u32> for ModificationType {
    type Error = UnknownCode;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Add),
            2 => Ok(Self::Delete),
            code => Err(UnknownCode {
                kind: "modification type",
                code,
            }),
        }
    }
}

impl From<ModificationType> for u32 {
    fn from(kind: ModificationType) -> Self {
        kind as u32
    }
}

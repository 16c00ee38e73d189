use rewind_nbt::NbtError;
use thiserror::Error;

use crate::codec::CodecError;
use crate::entity_data::EntityDataError;

/// Failure while translating a single packet. Every variant drops only that packet.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("tag error: {0}")]
    Nbt(#[from] NbtError),
    #[error("entity data index {index} has unmapped type {type_id}")]
    UnmappedDataType { index: u8, type_id: i32 },
    #[error("entity data index {index} is missing")]
    MissingIndex { index: u8 },
    #[error("connection has no {0} state")]
    MissingStorage(&'static str),
}

impl TranslateError {
    /// Internal invariant violations, as opposed to malformed or unmappable input.
    pub fn is_internal(&self) -> bool {
        matches!(self, TranslateError::MissingStorage(_))
    }
}

impl From<EntityDataError> for TranslateError {
    fn from(err: EntityDataError) -> Self {
        match err {
            EntityDataError::Codec(err) => TranslateError::Codec(err),
            EntityDataError::UnknownType { index, type_id } => {
                TranslateError::UnmappedDataType { index, type_id }
            }
        }
    }
}

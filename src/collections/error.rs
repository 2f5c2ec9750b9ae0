use derive_more::{Display, Error, From, IsVariant, TryInto};

#[cfg(feature = "hash")]
use super::hash::map::{AddError, DuplicateKey, KeyNotFound, NullKey};
pub use crate::util::error::{EmptyCollection, IndexOutOfRange};

/// Any error produced by a collection in this crate.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    EmptyCollection(EmptyCollection),
    IndexOutOfRange(IndexOutOfRange),
    #[cfg(feature = "hash")]
    DuplicateKey(DuplicateKey),
    #[cfg(feature = "hash")]
    KeyNotFound(KeyNotFound),
    #[cfg(feature = "hash")]
    NullKey(NullKey),
}

#[cfg(feature = "hash")]
impl From<AddError> for CollectionError {
    fn from(value: AddError) -> Self {
        match value {
            AddError::NullKey(e) => e.into(),
            AddError::DuplicateKey(e) => e.into(),
        }
    }
}

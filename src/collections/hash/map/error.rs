use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An entry with an equal key is already present in the map.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("An entry with an equal key already exists in the HashMap!")]
pub struct DuplicateKey;

/// No entry in the map has a key equal to the one requested.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("No entry with the provided key exists in the HashMap!")]
pub struct KeyNotFound;

/// A key was required, but none was provided.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to hash a missing key!")]
pub struct NullKey;

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    NullKey(NullKey),
    DuplicateKey(DuplicateKey),
}

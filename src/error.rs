use std::result;

/// The ways a map operation can fail.
///
/// All of these are ordinary outcomes of querying or filling a map and leave it unchanged.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The requested key is not in the map.
    #[error("key not found")]
    NotFound,
    /// The key is the map's minimum.
    #[error("key is the first in the map and has no predecessor")]
    NoPredecessor,
    /// The key is the map's maximum.
    #[error("key is the last in the map and has no successor")]
    NoSuccessor,
    /// The map has no entries.
    #[error("map is empty")]
    EmptyTree,
    /// An insert named a key the map already holds.
    #[error("key is already present")]
    DuplicateKey,
}

/// The result of a fallible map operation.
pub type Result<T> = result::Result<T, Error>;

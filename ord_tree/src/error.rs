use thiserror::Error;

/// Errors returned by fallible `OrdTree` operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The key is not in the tree
    #[error("key not found")]
    NotFound,
    /// A tree was built without a required strategy
    #[error("invalid construction: {0}")]
    InvalidConstruction(&'static str),
    /// `try_insert` found an equal key already in the tree
    #[error("an equal key is already in the tree")]
    DuplicateKey,
}

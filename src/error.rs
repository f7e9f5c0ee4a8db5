//! Errors reported by [`OrderedTree`][crate::tree::OrderedTree].

use thiserror::Error;

/// Convenience alias for results of fallible tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// The ways a tree operation can fail. Both are checked preconditions - when
/// one is returned the tree has not been modified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs at least one element but the tree has none.
    #[error("{operation}(): tree is empty")]
    EmptyTree {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// `remove` was asked for an element the tree doesn't hold.
    #[error("remove(): element not found")]
    NotFound,
}

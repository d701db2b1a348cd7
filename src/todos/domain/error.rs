//! Error types for todo list operations.

use thiserror::Error;

/// Result type for fallible list operations.
pub type TodoListResult<T> = Result<T, TodoListError>;

/// Errors returned while mutating or indexing a todo list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoListError {
    /// The value offered for insertion is not a member of the todo family.
    #[error("can only add todo items")]
    InvalidArgument,

    /// The index lies outside the populated range of the list.
    #[error("index {index} is out of range for a list of {len} items")]
    IndexOutOfRange {
        /// Offending zero-based index.
        index: usize,
        /// List length at the time of the call.
        len: usize,
    },
}

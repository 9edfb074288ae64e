use thiserror::Error;

/// Result type for fallible [`LinkedList`](super::LinkedList) operations.
pub type ListResult<T> = Result<T, ListError>;

/// Errors reported by [`LinkedList`](super::LinkedList) operations.
///
/// A failed operation never modifies the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index value was not of an integer type.
    #[error("linked list indices must be integers, not {found}")]
    InvalidIndexType { found: &'static str },

    /// The index fell outside `[0, len)`.
    #[error("linked list index out of range: {index} (length {len})")]
    IndexOutOfRange { index: isize, len: usize },

    /// Removal from a list with no elements.
    #[error("pop from empty linked list")]
    Empty,
}

use thiserror::Error;

/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The cursor references no node of this list (the end position, or a
    /// slot that has been freed).
    #[error("cursor does not reference a node in this list")]
    InvalidCursor,

    /// The anchor is the last node, so there is nothing after it to erase.
    #[error("no element follows the cursor")]
    NoSuccessor,
}

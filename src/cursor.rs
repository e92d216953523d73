/// A position inside a [`ForwardList`](crate::ForwardList).
///
/// Cursors are plain `Copy` values: they borrow nothing and stay usable
/// across mutations of the list, but they are only as fresh as the caller
/// keeps them. A cursor whose node has been erased no longer references
/// anything; if its slot has been reused it references the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor(pub(crate) Option<usize>);

impl Cursor {
    /// The position one past the last element.
    pub fn end() -> Self {
        Cursor(None)
    }

    /// Does this cursor sit past the last element?
    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

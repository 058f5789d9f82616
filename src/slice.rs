use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor over a borrowed slice - the leaf producer of every pipeline
///
/// Borrows the underlying collection, so the borrow checker guarantees the
/// collection outlives the pipeline built on top of it.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    /// Index of the current element (0-based); `items.len()` means exhausted
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        SliceCursor { items, position: 0 }
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = T;

    fn valid(&mut self) -> bool {
        self.position < self.items.len()
    }

    fn current(&mut self) -> Result<&T, CursorError> {
        self.items
            .get(self.position)
            .ok_or(CursorError::EmptySequence)
    }

    fn advance(&mut self) -> &mut Self {
        if self.position < self.items.len() {
            self.position += 1;
        }
        self
    }
}

/// Originate a pipeline over a slice
///
/// This is the only way to start a chain. A subrange is expressed by slicing
/// the collection first, e.g. `from(&values[1..4])`.
pub fn from<T>(items: &[T]) -> SliceCursor<'_, T> {
    SliceCursor::new(items)
}

use crate::error::CursorError;

/// Pull-based cursor over a sequence of elements
///
/// A cursor is a single-pass position in a sequence: it can report whether a
/// current element exists, hand out a reference to it, and advance. Decorator
/// cursors own their upstream cursor and reshape this protocol (limiting,
/// skipping, mapping, filtering, truncating), so a whole pipeline is a single
/// owned value driven one pull at a time.
///
/// Cursors are not restartable: once `valid()` reports false for the stream,
/// the cursor stays exhausted.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Item;

    /// Check whether the cursor currently points at an element
    ///
    /// Takes `&mut self` because implementations may memoize a per-position
    /// decision here; observable behavior is read-only.
    fn valid(&mut self) -> bool;

    /// Get a reference to the element at the current position
    ///
    /// Returns `CursorError::EmptySequence` if the cursor is exhausted.
    /// Repeated calls without an intervening `advance()` return the same
    /// value.
    fn current(&mut self) -> Result<&Self::Item, CursorError>;

    /// Move to the next position
    ///
    /// Returns `self` so manual pulls can chain. Advancing an exhausted
    /// cursor is a no-op.
    fn advance(&mut self) -> &mut Self;
}

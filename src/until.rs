use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor that truncates its upstream at the first element matching a
/// predicate
///
/// Presents the longest prefix strictly before the first match; the matching
/// element itself is excluded. This boundary is deliberately asymmetric with
/// `filter`, which keeps matching elements.
///
/// The per-position stop decision is memoized, so repeated `valid()` calls
/// evaluate the predicate once. Advancing re-evaluates at the new position.
pub struct UntilCursor<C, F> {
    upstream: C,
    predicate: F,
    /// Memoized keep/stop decision for the current position
    decision: Option<bool>,
}

impl<C, F> UntilCursor<C, F> {
    pub fn new(upstream: C, predicate: F) -> Self {
        UntilCursor {
            upstream,
            predicate,
            decision: None,
        }
    }
}

impl<C, F> Cursor for UntilCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn valid(&mut self) -> bool {
        if !self.upstream.valid() {
            return false;
        }
        if self.decision.is_none() {
            let keep = match self.upstream.current() {
                Ok(value) => !(self.predicate)(value),
                Err(_) => false,
            };
            self.decision = Some(keep);
        }
        self.decision.unwrap_or(false)
    }

    fn current(&mut self) -> Result<&Self::Item, CursorError> {
        if !self.valid() {
            return Err(CursorError::EmptySequence);
        }
        self.upstream.current()
    }

    fn advance(&mut self) -> &mut Self {
        self.upstream.advance();
        self.decision = None;
        self
    }
}

/// Convenience function to create an UntilCursor
pub fn until<C, F>(cursor: C, predicate: F) -> UntilCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    UntilCursor::new(cursor, predicate)
}

/// Extension trait to add .until() and .until_eq() method support for cursors
pub trait UntilExt: Cursor + Sized {
    fn until<F>(self, predicate: F) -> UntilCursor<Self, F>
    where
        F: Fn(&Self::Item) -> bool,
    {
        UntilCursor::new(self, predicate)
    }

    /// Truncate at the first element equal to `value`
    fn until_eq(self, value: Self::Item) -> UntilCursor<Self, impl Fn(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        UntilCursor::new(self, move |element: &Self::Item| *element == value)
    }
}

impl<C> UntilExt for C where C: Cursor {}

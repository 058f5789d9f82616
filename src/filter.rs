use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor that keeps only upstream elements satisfying a predicate
///
/// Construction and every `advance()` silently loop-advance upstream past
/// failing elements, so whenever the cursor is valid its current element
/// satisfies the predicate. Matching elements are kept; compare `until`,
/// which excludes its matching element.
pub struct FilterCursor<C, F> {
    upstream: C,
    predicate: F,
}

impl<C, F> FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    pub fn new(upstream: C, predicate: F) -> Self {
        let mut cursor = FilterCursor {
            upstream,
            predicate,
        };
        cursor.settle();
        cursor
    }

    /// Advance upstream until it points at a satisfying element or exhausts
    fn settle(&mut self) {
        while self.upstream.valid() {
            let keep = match self.upstream.current() {
                Ok(value) => (self.predicate)(value),
                Err(_) => return,
            };
            if keep {
                return;
            }
            self.upstream.advance();
        }
    }
}

impl<C, F> Cursor for FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn valid(&mut self) -> bool {
        self.upstream.valid()
    }

    fn current(&mut self) -> Result<&Self::Item, CursorError> {
        self.upstream.current()
    }

    fn advance(&mut self) -> &mut Self {
        self.upstream.advance();
        self.settle();
        self
    }
}

/// Convenience function to create a FilterCursor
pub fn filter<C, F>(cursor: C, predicate: F) -> FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    FilterCursor::new(cursor, predicate)
}

/// Extension trait to add .filter() and .filter_ne() method support for
/// cursors
pub trait FilterExt: Cursor + Sized {
    fn filter<F>(self, predicate: F) -> FilterCursor<Self, F>
    where
        F: Fn(&Self::Item) -> bool,
    {
        FilterCursor::new(self, predicate)
    }

    /// Keep only elements not equal to `value`
    fn filter_ne(self, value: Self::Item) -> FilterCursor<Self, impl Fn(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        FilterCursor::new(self, move |element: &Self::Item| *element != value)
    }
}

impl<C> FilterExt for C where C: Cursor {}

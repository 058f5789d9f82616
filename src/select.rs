use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor that maps upstream elements through a transform function
///
/// The transform runs lazily on the first `current()` call per position and
/// the result is memoized until the next `advance()`. A position advanced
/// past without a read never invokes the transform at all. Validity mirrors
/// upstream exactly.
pub struct SelectCursor<C, F, U> {
    upstream: C,
    func: F,
    cached: Option<U>,
}

impl<C, F, U> SelectCursor<C, F, U> {
    pub fn new(upstream: C, func: F) -> Self {
        SelectCursor {
            upstream,
            func,
            cached: None,
        }
    }
}

impl<C, F, U> Cursor for SelectCursor<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> U,
{
    type Item = U;

    fn valid(&mut self) -> bool {
        self.upstream.valid()
    }

    fn current(&mut self) -> Result<&U, CursorError> {
        if self.cached.is_none() {
            let value = (self.func)(self.upstream.current()?);
            self.cached = Some(value);
        }
        self.cached.as_ref().ok_or(CursorError::EmptySequence)
    }

    fn advance(&mut self) -> &mut Self {
        self.upstream.advance();
        self.cached = None;
        self
    }
}

/// Convenience function to create a SelectCursor
pub fn select<C, F, U>(cursor: C, func: F) -> SelectCursor<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> U,
{
    SelectCursor::new(cursor, func)
}

/// Extension trait to add .select() method support for cursors
pub trait SelectExt: Cursor + Sized {
    fn select<F, U>(self, func: F) -> SelectCursor<Self, F, U>
    where
        F: Fn(&Self::Item) -> U,
    {
        SelectCursor::new(self, func)
    }
}

impl<C> SelectExt for C where C: Cursor {}

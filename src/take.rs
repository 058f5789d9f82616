use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor that yields at most a fixed number of upstream elements
///
/// The count is the primary stop condition: once it hits zero the cursor is
/// exhausted even if upstream still has elements.
pub struct TakeCursor<C> {
    upstream: C,
    remaining: usize,
}

impl<C> TakeCursor<C> {
    pub fn new(upstream: C, amount: usize) -> Self {
        TakeCursor {
            upstream,
            remaining: amount,
        }
    }
}

impl<C> Cursor for TakeCursor<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn valid(&mut self) -> bool {
        self.remaining > 0 && self.upstream.valid()
    }

    fn current(&mut self) -> Result<&Self::Item, CursorError> {
        if self.remaining == 0 {
            return Err(CursorError::EmptySequence);
        }
        self.upstream.current()
    }

    fn advance(&mut self) -> &mut Self {
        self.remaining = self.remaining.saturating_sub(1);
        self.upstream.advance();
        self
    }
}

/// Convenience function to create a TakeCursor
pub fn take<C>(cursor: C, amount: usize) -> TakeCursor<C>
where
    C: Cursor,
{
    TakeCursor::new(cursor, amount)
}

/// Extension trait to add .take() method support for cursors
pub trait TakeExt: Cursor + Sized {
    fn take(self, amount: usize) -> TakeCursor<Self> {
        TakeCursor::new(self, amount)
    }
}

impl<C> TakeExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::CollectExt;
    use crate::slice::from;

    #[test]
    fn test_take_shorter_than_source() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(from(&data).take(3).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_longer_than_source() {
        let data = [1, 2];
        assert_eq!(from(&data).take(10).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_take_zero_is_immediately_invalid() {
        let data = [1, 2, 3];
        let mut cursor = from(&data).take(0);

        assert!(!cursor.valid());
        assert_eq!(cursor.current(), Err(CursorError::EmptySequence));
        assert_eq!(cursor.to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_exhausted_errors_even_with_upstream_left() {
        let data = [1, 2, 3];
        let mut cursor = from(&data).take(1);

        assert_eq!(cursor.current().unwrap(), &1);
        cursor.advance();

        // Upstream still holds 2 and 3, but the count is spent
        assert!(!cursor.valid());
        assert_eq!(cursor.current(), Err(CursorError::EmptySequence));
    }

    #[test]
    fn test_take_on_empty_source() {
        let data: [i32; 0] = [];
        assert_eq!(from(&data).take(5).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_current_is_idempotent() {
        let data = [9, 8];
        let mut cursor = from(&data).take(2);

        assert_eq!(cursor.current().unwrap(), &9);
        assert_eq!(cursor.current().unwrap(), &9);
    }

    #[test]
    fn test_take_manual_pull() {
        let data = [5, 6, 7];
        let mut cursor = from(&data).take(2);

        assert!(cursor.valid());
        assert_eq!(cursor.current().unwrap(), &5);
        cursor.advance();
        assert!(cursor.valid());
        assert_eq!(cursor.current().unwrap(), &6);
        cursor.advance();
        assert!(!cursor.valid());
    }

    #[test]
    fn test_function_syntax() {
        let data = [1, 2, 3];
        assert_eq!(take(from(&data), 2).to_vec(), vec![1, 2]);
    }
}

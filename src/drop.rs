use crate::cursor::Cursor;
use crate::error::CursorError;

/// Cursor that skips a fixed-length prefix of its upstream
///
/// The skip happens eagerly at construction (or stops early if upstream
/// exhausts first); the skipped prefix is never observable. Everything after
/// construction is a pure passthrough.
pub struct DropCursor<C> {
    upstream: C,
}

impl<C> DropCursor<C>
where
    C: Cursor,
{
    pub fn new(mut upstream: C, amount: usize) -> Self {
        for _ in 0..amount {
            if !upstream.valid() {
                break;
            }
            upstream.advance();
        }
        DropCursor { upstream }
    }
}

impl<C> Cursor for DropCursor<C>
where
    C: Cursor,
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
        self
    }
}

/// Convenience function to create a DropCursor
pub fn drop<C>(cursor: C, amount: usize) -> DropCursor<C>
where
    C: Cursor,
{
    DropCursor::new(cursor, amount)
}

/// Extension trait to add .drop() method support for cursors
pub trait DropExt: Cursor + Sized {
    fn drop(self, amount: usize) -> DropCursor<Self> {
        DropCursor::new(self, amount)
    }
}

impl<C> DropExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::CollectExt;
    use crate::slice::from;
    use crate::take::TakeExt;

    #[test]
    fn test_drop_prefix() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(from(&data).drop(2).to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_drop_zero_is_passthrough() {
        let data = [1, 2, 3];
        assert_eq!(from(&data).drop(0).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_drop_more_than_source() {
        let data = [1, 2];
        let mut cursor = from(&data).drop(10);

        assert!(!cursor.valid());
        assert_eq!(cursor.current(), Err(CursorError::EmptySequence));
    }

    #[test]
    fn test_drop_entire_source() {
        let data = [1, 2, 3];
        assert_eq!(from(&data).drop(3).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_drop_on_empty_source() {
        let data: [i32; 0] = [];
        assert_eq!(from(&data).drop(4).to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_drop_skips_before_first_observation() {
        let data = [1, 2, 3, 4];
        let mut cursor = from(&data).drop(2);

        // The first observable element is already past the skipped prefix
        assert_eq!(cursor.current().unwrap(), &3);
    }

    #[test]
    fn test_drop_current_is_idempotent() {
        let data = [1, 2, 3];
        let mut cursor = from(&data).drop(1);

        assert_eq!(cursor.current().unwrap(), &2);
        assert_eq!(cursor.current().unwrap(), &2);
    }

    #[test]
    fn test_drop_then_take() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(from(&data).drop(2).take(2).to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_function_syntax() {
        let data = [1, 2, 3];
        assert_eq!(drop(from(&data), 1).to_vec(), vec![2, 3]);
    }
}

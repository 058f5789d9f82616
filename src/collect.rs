use crate::cursor::Cursor;

/// Extension trait providing the terminal operations that drain a cursor
///
/// These are the only operations that materialize a pipeline; everything
/// upstream of them stays lazy until the drain runs. Both consume the cursor
/// in a single forward pass from its current position.
pub trait CollectExt: Cursor + Sized {
    /// Drain the cursor into a freshly allocated `Vec`, preserving order
    fn to_vec(mut self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut result = Vec::new();
        while self.valid() {
            if let Ok(value) = self.current() {
                result.push(value.clone());
            }
            self.advance();
        }
        result
    }

    /// Drain the cursor into an external sink, appending in traversal order
    ///
    /// Any `Extend` implementor works as a sink: a `Vec`, a `VecDeque`, a
    /// `String` for char cursors, and so on.
    fn copy_to<S>(mut self, sink: &mut S)
    where
        S: Extend<Self::Item>,
        Self::Item: Clone,
    {
        while self.valid() {
            if let Ok(value) = self.current() {
                sink.extend(std::iter::once(value.clone()));
            }
            self.advance();
        }
    }
}

impl<C> CollectExt for C where C: Cursor {}

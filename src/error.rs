use thiserror::Error;

/// Error type for cursor operations
///
/// The only checked misuse is reading a value from an exhausted cursor.
/// Counts passed to `take`/`drop` are `usize`, so the negative-count case
/// cannot arise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor has no current element to read
    #[error("cursor is exhausted, no current element")]
    EmptySequence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_display() {
        let error = CursorError::EmptySequence;
        assert_eq!(
            error.to_string(),
            "cursor is exhausted, no current element"
        );
    }
}

//! Edit errors

use thiserror::Error;

/// Errors raised by destructive and clipboard operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Offset falls outside `[0, len)` of the addressed text
    #[error("Offset {offset} out of bounds for text of length {len}")]
    OutOfRange { offset: usize, len: usize },
}

/// Edit result
pub type EditResult<T> = Result<T, EditError>;

/// Rejects offsets at or past the end of the addressed text.
///
/// An offset equal to `len` is rejected too, so appending at the very end
/// is never possible.
pub(crate) fn check_offset(offset: usize, len: usize) -> EditResult<()> {
    if offset >= len {
        Err(EditError::OutOfRange { offset, len })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_inside_text() {
        assert_eq!(check_offset(0, 1), Ok(()));
        assert_eq!(check_offset(4, 5), Ok(()));
    }

    #[test]
    fn test_offset_at_end_rejected() {
        assert_eq!(
            check_offset(5, 5),
            Err(EditError::OutOfRange { offset: 5, len: 5 })
        );
    }

    #[test]
    fn test_any_offset_rejected_for_empty_text() {
        assert!(check_offset(0, 0).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = EditError::OutOfRange { offset: 9, len: 3 };
        assert_eq!(err.to_string(), "Offset 9 out of bounds for text of length 3");
    }
}

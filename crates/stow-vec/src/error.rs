//! Container error types.

use std::error::Error;
use std::fmt;

use stow_alloc::AllocError;

/// Errors returned by [`StowVec`](crate::StowVec) operations.
///
/// A failed operation leaves the container exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// Bounds-checked access past the logical end.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
    /// The allocation strategy could not provide a buffer.
    Alloc(AllocError),
}

impl SeqError {
    /// Whether this error came from the allocator running out of memory.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::Alloc(e) if e.is_out_of_memory())
    }
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Alloc(e) => write!(f, "allocation failed: {e}"),
        }
    }
}

impl Error for SeqError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl From<AllocError> for SeqError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}

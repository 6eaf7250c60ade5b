//! Allocation error types.

use std::error::Error;
use std::fmt;

/// Errors returned by [`AllocStrategy::allocate`](crate::AllocStrategy::allocate).
///
/// Every variant is an out-of-memory condition: the strategy could not hand
/// out the requested block. No variant is ever retried or recovered
/// internally; the caller decides what to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The arena pool does not have enough room left for the request.
    PoolExhausted {
        /// Number of elements requested.
        requested: usize,
        /// Number of elements still available in the pool.
        remaining: usize,
    },
    /// The system allocator could not satisfy the request.
    HeapExhausted {
        /// Number of bytes requested from the system.
        bytes: usize,
    },
    /// The request cannot be expressed as a valid memory layout
    /// (the byte size overflows `isize::MAX`).
    LayoutOverflow {
        /// Number of elements requested.
        requested: usize,
    },
}

impl AllocError {
    /// Whether this error is an out-of-memory condition.
    ///
    /// Always `true` today; kept as a method so callers can classify
    /// failures without matching on every variant.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(
            self,
            Self::PoolExhausted { .. } | Self::HeapExhausted { .. } | Self::LayoutOverflow { .. }
        )
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolExhausted {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena pool exhausted: requested {requested} elements, {remaining} remaining"
                )
            }
            Self::HeapExhausted { bytes } => {
                write!(f, "system allocator failed to provide {bytes} bytes")
            }
            Self::LayoutOverflow { requested } => {
                write!(f, "allocation of {requested} elements overflows the address space")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_exhausted_message_names_counts() {
        let err = AllocError::PoolExhausted {
            requested: 64,
            remaining: 37,
        };
        assert_eq!(
            err.to_string(),
            "arena pool exhausted: requested 64 elements, 37 remaining"
        );
    }

    #[test]
    fn every_variant_is_out_of_memory() {
        assert!(AllocError::PoolExhausted {
            requested: 1,
            remaining: 0
        }
        .is_out_of_memory());
        assert!(AllocError::HeapExhausted { bytes: 8 }.is_out_of_memory());
        assert!(AllocError::LayoutOverflow { requested: usize::MAX }.is_out_of_memory());
    }
}

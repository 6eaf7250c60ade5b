//! Growable sequence container with a pluggable allocation strategy.
//!
//! [`StowVec<T>`] is an amortized-O(1)-append sequence with bounds-checked
//! access. It does not name its allocator in its type: the caller hands it
//! a [`Strategy`](stow_alloc::Strategy) at construction, either the system
//! heap or a shared bump arena.
//!
//! ```
//! use stow_alloc::Arena;
//! use stow_vec::StowVec;
//!
//! let arena = Arena::<u64>::with_capacity(100).into_shared();
//! let mut v: StowVec<u64> = StowVec::new_in(&arena);
//! for i in 0..10 {
//!     v.push(i * i).unwrap();
//! }
//! assert_eq!(v.at(3), Ok(&9));
//! assert!(v.at(10).is_err());
//! // 1 + 2 + 4 + 8 + 16 elements: outgrown buffers are not reclaimed.
//! assert_eq!(arena.used(), 31);
//! ```
//!
//! # Growth
//!
//! Capacity doubles from 1 when the container is full. Live elements are
//! cloned into the new buffer through the strategy's `construct`, and the
//! old values are finalized through `destroy` before the old buffer is
//! released. Nothing changes if the new buffer cannot be allocated.
//!
//! # Removal
//!
//! [`StowVec::remove_last`] is a logical pop: only the length shrinks. The
//! value is finalized when its slot is reused or the container is dropped.
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] borrow the container, so they cannot
//! outlive a reallocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod cursor;
pub mod error;
pub mod growth;
pub mod vec;

pub use cursor::{Cursor, CursorMut};
pub use error::SeqError;
pub use growth::{growth_footprint, next_capacity};
pub use vec::StowVec;

//! Stow: growable containers over pluggable allocation strategies.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the stow sub-crates. For most users, adding `stow` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stow::prelude::*;
//!
//! // Two containers drawing from one 100-element arena.
//! let arena = Arena::<u32>::new(ArenaConfig::default()).into_shared();
//! let mut a: StowVec<u32> = StowVec::new_in(&arena);
//! let mut b: StowVec<u32> = StowVec::new_in(&arena);
//! a.try_extend(0..8).unwrap();
//! b.try_extend(0..8).unwrap();
//! assert_eq!(arena.used(), 2 * (1 + 2 + 4 + 8));
//!
//! // The heap never runs dry in practice.
//! let mut c = StowVec::new();
//! c.try_extend(0..1000u32).unwrap();
//! assert_eq!(c.at(999), Ok(&999));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`alloc`] | `stow-alloc` | `AllocStrategy`, `Strategy`, `DefaultHeap`, `Arena`, events |
//! | [`vec`] | `stow-vec` | `StowVec`, cursors, growth policy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Allocation strategies (`stow-alloc`).
///
/// Contains the capability trait, the system heap strategy and the
/// logging bump arena with its configuration and counters.
pub use stow_alloc as alloc;

/// The growable container and its cursors (`stow-vec`).
pub use stow_vec as vec;

/// Commonly used types, importable with `use stow::prelude::*`.
pub mod prelude {
    pub use stow_alloc::{
        AllocError, AllocStrategy, Arena, ArenaConfig, DefaultHeap, SharedArena, Strategy,
    };
    pub use stow_vec::{Cursor, CursorMut, SeqError, StowVec};
}

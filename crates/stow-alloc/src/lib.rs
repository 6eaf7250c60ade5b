//! Allocation strategies for stow containers.
//!
//! Containers talk to memory through the [`AllocStrategy`] capability set:
//! `allocate`, `release`, `construct` and `destroy`. Two strategies are
//! provided and selected at runtime through the [`Strategy`] handle:
//!
//! ```text
//! Strategy<T>
//! ├── Heap(DefaultHeap)      global system allocator, reclaims on release
//! └── Arena(SharedArena<T>)  Rc<Arena<T>>: fixed pool, bump offset,
//!                            release is a no-op, every call is logged
//! ```
//!
//! # Arena semantics
//!
//! An [`Arena`] reserves its pool on the first allocation and hands out
//! consecutive blocks until the pool is exhausted, at which point
//! `allocate` fails with [`AllocError::PoolExhausted`]. It never falls
//! back to the heap and never reuses released blocks. Every operation is
//! emitted as a `tracing` event at `debug` level and folded into
//! [`ArenaStats`]; with [`ArenaConfig::record_events`] set the events are
//! also kept in memory.
//!
//! Arenas are single-threaded. [`SharedArena`] is an `Rc`, so neither the
//! handle nor any container holding it can cross threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod arena;
pub mod config;
pub mod error;
pub mod event;
pub mod heap;
mod raw;
pub mod strategy;

// Public re-exports for the primary API surface.
pub use arena::{Arena, SharedArena};
pub use config::ArenaConfig;
pub use error::AllocError;
pub use event::{AllocEvent, AllocOp, ArenaStats};
pub use heap::DefaultHeap;
pub use strategy::{AllocStrategy, Strategy};

//! Test fixtures shared across the stow workspace.
//!
//! - [`factorial`] / [`factorials`]: the reference value sequence used by
//!   scenario tests, benches and the demo.
//! - [`DropCounter`]: a clonable value that counts how often it is dropped,
//!   for checking that containers finalize every value exactly once.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{factorial, factorials, DropCounter, FACTORIALS_0_TO_9};

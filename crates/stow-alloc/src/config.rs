//! Arena configuration parameters.

/// Configuration for an [`Arena`](crate::Arena).
///
/// Controls pool sizing and whether allocation events are kept in memory
/// in addition to being logged. All values are immutable once the arena
/// is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Size of the pool in elements of the bound type.
    ///
    /// Default: 100. A capacity of zero is valid; such an arena only
    /// satisfies zero-length requests.
    pub capacity: usize,

    /// Keep every [`AllocEvent`](crate::AllocEvent) in an in-memory journal.
    ///
    /// Default: `false`. Events are always emitted through `tracing`; the
    /// journal exists for tests and diagnostics that need to inspect them.
    /// It is unbounded: construct/destroy churn keeps adding entries after
    /// the pool stops advancing. Drain it with
    /// [`Arena::take_events`](crate::Arena::take_events).
    pub record_events: bool,
}

impl ArenaConfig {
    /// Default pool size in elements.
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Create a config for a pool of `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            record_events: false,
        }
    }

    /// Enable the in-memory event journal.
    #[must_use]
    pub fn with_event_journal(mut self) -> Self {
        self.record_events = true;
        self
    }

    /// Size of the pool in bytes for element type `T`.
    ///
    /// Returns `None` if the size overflows `usize`.
    pub fn pool_bytes<T>(&self) -> Option<usize> {
        self.capacity.checked_mul(std::mem::size_of::<T>())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

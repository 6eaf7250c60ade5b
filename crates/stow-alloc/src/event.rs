//! Allocation events and cumulative arena counters.
//!
//! Every capability call on an [`Arena`](crate::Arena) produces one
//! [`AllocEvent`]. Events are always logged; [`ArenaStats`] folds them into
//! running totals.

use std::fmt;

/// Which capability of the allocator was exercised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocOp {
    /// A block was handed out.
    Allocate,
    /// A block was handed back. Arenas do not reclaim it.
    Release,
    /// A value was initialized in place.
    Construct,
    /// A value was finalized in place.
    Destroy,
}

impl AllocOp {
    /// Lower-case name used in log records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allocate => "allocate",
            Self::Release => "release",
            Self::Construct => "construct",
            Self::Destroy => "destroy",
        }
    }
}

impl fmt::Display for AllocOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged allocator operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocEvent {
    /// The capability that was exercised.
    pub op: AllocOp,
    /// Number of elements involved. Always 1 for construct and destroy.
    pub count: usize,
    /// Address of the block or slot the operation targeted.
    pub addr: usize,
}

impl fmt::Display for AllocEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [n = {}] @ {:#x}", self.op, self.count, self.addr)
    }
}

/// Running totals of arena activity.
///
/// `elements_allocated` equals the arena's high-water offset;
/// `elements_released` only grows and is never subtracted from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Successful `allocate` calls.
    pub allocations: u64,
    /// `allocate` calls rejected because the pool was exhausted.
    pub failed_allocations: u64,
    /// `release` calls.
    pub releases: u64,
    /// `construct` calls.
    pub constructs: u64,
    /// `destroy` calls.
    pub destroys: u64,
    /// Total elements handed out.
    pub elements_allocated: usize,
    /// Total elements handed back (but not reclaimed).
    pub elements_released: usize,
}

impl ArenaStats {
    /// Fold one event into the totals.
    pub(crate) fn record(&mut self, event: &AllocEvent) {
        match event.op {
            AllocOp::Allocate => {
                self.allocations += 1;
                self.elements_allocated += event.count;
            }
            AllocOp::Release => {
                self.releases += 1;
                self.elements_released += event.count;
            }
            AllocOp::Construct => self.constructs += 1,
            AllocOp::Destroy => self.destroys += 1,
        }
    }

    /// Constructed values not yet destroyed.
    pub fn live_values(&self) -> u64 {
        self.constructs.saturating_sub(self.destroys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = ArenaStats::default();
        assert_eq!(s.allocations, 0);
        assert_eq!(s.failed_allocations, 0);
        assert_eq!(s.releases, 0);
        assert_eq!(s.constructs, 0);
        assert_eq!(s.destroys, 0);
        assert_eq!(s.elements_allocated, 0);
        assert_eq!(s.elements_released, 0);
        assert_eq!(s.live_values(), 0);
    }

    #[test]
    fn record_accumulates_per_op() {
        let mut s = ArenaStats::default();
        let at = |op, count| AllocEvent { op, count, addr: 0x1000 };
        s.record(&at(AllocOp::Allocate, 4));
        s.record(&at(AllocOp::Allocate, 8));
        s.record(&at(AllocOp::Construct, 1));
        s.record(&at(AllocOp::Construct, 1));
        s.record(&at(AllocOp::Destroy, 1));
        s.record(&at(AllocOp::Release, 4));

        assert_eq!(s.allocations, 2);
        assert_eq!(s.elements_allocated, 12);
        assert_eq!(s.releases, 1);
        assert_eq!(s.elements_released, 4);
        assert_eq!(s.live_values(), 1);
    }

    #[test]
    fn event_display_is_readable() {
        let e = AllocEvent {
            op: AllocOp::Allocate,
            count: 2,
            addr: 0x10,
        };
        assert_eq!(e.to_string(), "allocate [n = 2] @ 0x10");
    }
}

//! Value fixtures.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// `0! ..= 9!`, the sequence the demo and scenario tests push.
pub const FACTORIALS_0_TO_9: [u64; 10] = [1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880];

/// `n!`, with `0! == 1! == 1`.
///
/// # Panics
///
/// Panics on overflow (`n > 20`).
pub const fn factorial(n: u64) -> u64 {
    if n < 2 {
        1
    } else {
        n * factorial(n - 1)
    }
}

/// The first `n` factorials, starting at `0!`.
pub fn factorials(n: u64) -> Vec<u64> {
    (0..n).map(factorial).collect()
}

/// A value that increments a shared counter when dropped.
///
/// Clones share the counter, so a container that copies values during
/// growth must drop every original and every copy exactly once.
pub struct DropCounter {
    value: u64,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new(value: u64, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: Rc::clone(drops),
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}

impl Clone for DropCounter {
    fn clone(&self) -> Self {
        Self::new(self.value, &self.drops)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DropCounter").field(&self.value).finish()
    }
}

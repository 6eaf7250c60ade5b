//! Capacity growth policy.
//!
//! Capacity goes 0 → 1 → 2 → 4 → ... Doubling bounds the total copy work
//! over `n` pushes to O(n).

/// Capacity after one growth step from `current`.
///
/// Returns `None` if doubling overflows `usize`.
pub fn next_capacity(current: usize) -> Option<usize> {
    if current == 0 {
        Some(1)
    } else {
        current.checked_mul(2)
    }
}

/// Total elements a fresh container requests from its strategy over
/// `pushes` appends.
///
/// Each growth step allocates a whole new buffer, so the footprint is the
/// sum of every capacity the container passes through. With an arena,
/// which never reclaims outgrown buffers, this is how much of the pool
/// the container consumes. Returns `None` on overflow.
pub fn growth_footprint(pushes: usize) -> Option<usize> {
    if pushes == 0 {
        return Some(0);
    }
    let final_capacity = pushes.checked_next_power_of_two()?;
    final_capacity.checked_mul(2).map(|n| n - 1)
}

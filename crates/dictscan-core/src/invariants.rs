//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// Narrow an arena or sequence index to a `u32` id.
///
/// Panics instead of wrapping when `index` exceeds `u32::MAX`.
pub fn ensure_u32_index(index: usize, kind: &str) -> u32 {
    u32::try_from(index).unwrap_or_else(|_| {
        panic!("{kind}: index {index} does not fit a u32 id (max {})", u32::MAX)
    })
}

//! The increment computation shared by every boundary.

/// Returns `a + 1`.
///
/// Arithmetic is two's-complement with wraparound, so `increment(i32::MAX)`
/// is `i32::MIN`, matching a native 32-bit `int`.
#[inline]
pub fn increment(a: i32) -> i32 {
    a.wrapping_add(1)
}

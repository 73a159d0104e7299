//! Increment exported under the plain C symbol `add`.

use crate::increment::increment;

/// `int32_t add(int32_t a)`: returns `a + 1`, wrapping at `INT32_MAX`.
#[no_mangle]
pub extern "C" fn add(a: i32) -> i32 {
    increment(a)
}

use crate::ffi::add;
use crate::increment::increment;
use rayon::prelude::*;

#[test]
fn test_ffi_matches_core() {
    for a in [i32::MIN, -1000, -1, 0, 1, 1000, i32::MAX] {
        assert_eq!(add(a), increment(a), "mismatch for {}", a);
    }
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let inputs: Vec<i32> = (-50_000..50_000).collect();

    let sequential: Vec<i32> = inputs.iter().map(|&a| increment(a)).collect();
    let parallel: Vec<i32> = inputs.par_iter().map(|&a| increment(a)).collect();
    assert_eq!(sequential, parallel);

    // Same through the exported symbol
    let via_ffi: Vec<i32> = inputs.par_iter().map(|&a| add(a)).collect();
    assert_eq!(sequential, via_ffi);
}

#[test]
fn test_no_hidden_state_across_threads() {
    let results: Vec<i32> = (0..10_000).into_par_iter().map(|_| add(7)).collect();
    assert!(results.iter().all(|&r| r == 8));
}

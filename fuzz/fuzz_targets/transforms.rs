//! Fuzz target for the container transforms.
//!
//! Transforms cannot fail, so the only thing that can go wrong is the output.
//! Every path is checked against the reference models in `flagged::testing`.

#![no_main]

use flagged::policy::{Sorted, Unique, UniqueAndSorted};
use flagged::testing::{collapse_runs, is_permutation, is_sorted, sorted_set};
use flagged::Flagged;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    // Property 1: Sorted is an ordered permutation
    let sorted = Flagged::<_, Sorted>::normalize(data.clone());
    assert!(is_sorted(&sorted), "Sorted output out of order");
    assert!(is_permutation(&data, &sorted), "Sorted lost or invented elements");

    // Property 2: Unique is exactly the single-pass run collapse
    let unique = Flagged::<_, Unique>::normalize(data.clone());
    assert_eq!(*unique, collapse_runs(&data), "Unique diverged from run collapse");

    // Property 3: every UniqueAndSorted path yields the sorted set
    let expected = sorted_set(&data);
    let raw = Flagged::<_, UniqueAndSorted>::normalize(data);
    let via_sorted = Flagged::<_, UniqueAndSorted>::from(sorted);
    let via_unique = Flagged::<_, UniqueAndSorted>::from(unique);

    assert_eq!(*raw, expected, "raw path is not the sorted set");
    assert_eq!(*via_sorted, expected, "Sorted path is not the sorted set");
    assert_eq!(*via_unique, expected, "Unique path is not the sorted set");
});

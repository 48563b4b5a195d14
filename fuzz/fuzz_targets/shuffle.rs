//! Fuzz target for the Shuffled policy.
//!
//! Whatever the seed, a shuffle must keep every element and the same seed must
//! give the same order.

#![no_main]

use arbitrary::Arbitrary;
use flagged::policy::Shuffled;
use flagged::testing::{is_permutation, seeded_rng};
use flagged::Flagged;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ShuffleInput {
    seed: u64,
    items: Vec<u16>,
}

fuzz_target!(|input: ShuffleInput| {
    let a = Flagged::<_, Shuffled>::shuffle(input.items.clone(), &mut seeded_rng(input.seed));
    let b = Flagged::<_, Shuffled>::shuffle(input.items.clone(), &mut seeded_rng(input.seed));

    assert!(is_permutation(&input.items, &a), "shuffle changed the multiset");
    assert_eq!(a, b, "same seed produced different orders");
});

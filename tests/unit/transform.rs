//! Container-transform policies.

use super::common::{all_set_paths, SEPARATED_DUPLICATES, SHUFFLED_REPEATS};
use flagged::policy::{Sorted, Unique, UniqueAndSorted};
use flagged::Flagged;
#[cfg(feature = "shuffle")]
use flagged::{
    policy::Shuffled,
    testing::{is_permutation, seeded_rng},
};

#[test]
fn sorted_example() {
    assert_eq!(Flagged::<_, Sorted>::normalize(vec![3, 1, 2]).extract(), vec![1, 2, 3]);
}

#[test]
fn sorted_is_idempotent() {
    let once = Flagged::<_, Sorted>::normalize(vec![5, 3, 9, 3]).extract();
    let twice = Flagged::<_, Sorted>::normalize(once.clone()).extract();
    assert_eq!(once, twice);
}

#[test]
fn sorted_strings_use_their_natural_order() {
    let words = Flagged::<_, Sorted>::normalize(vec!["pear", "apple", "fig"]);
    assert_eq!(*words, ["apple", "fig", "pear"]);
}

#[test]
fn unique_keeps_separated_duplicates() {
    let unique = Flagged::<_, Unique>::normalize(SEPARATED_DUPLICATES.to_vec());
    assert_eq!(unique.extract(), vec![1, 2, 3, 1]);
}

#[test]
fn unique_and_sorted_is_a_true_set() {
    let set = Flagged::<_, UniqueAndSorted>::normalize(SHUFFLED_REPEATS.to_vec());
    assert_eq!(set.extract(), vec![1, 2, 3]);
}

#[test]
fn every_set_path_agrees() {
    for input in [&SEPARATED_DUPLICATES[..], &SHUFFLED_REPEATS[..], &[][..]] {
        let [raw, via_sorted, via_unique] = all_set_paths(input);
        assert_eq!(raw, via_sorted);
        assert_eq!(raw, via_unique);
    }
}

#[cfg(feature = "shuffle")]
#[test]
fn shuffle_keeps_every_element() {
    let input: Vec<u16> = (0..100).chain(0..10).collect();
    for seed in 0..8 {
        let shuffled = Flagged::<_, Shuffled>::shuffle(input.clone(), &mut seeded_rng(seed));
        assert!(is_permutation(&input, &shuffled));
    }
}

#[cfg(feature = "shuffle")]
#[test]
fn shuffle_depends_only_on_the_seed() {
    let input: Vec<u16> = (0..50).collect();
    let a = Flagged::<_, Shuffled>::shuffle(input.clone(), &mut seeded_rng(42)).extract();
    let b = Flagged::<_, Shuffled>::shuffle(input.clone(), &mut seeded_rng(42)).extract();
    let c = Flagged::<_, Shuffled>::shuffle(input, &mut seeded_rng(43)).extract();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[cfg(feature = "shuffle")]
#[test]
fn shuffle_accepts_a_trait_object_rng() {
    let mut rng = seeded_rng(1);
    let dyn_rng: &mut dyn rand::RngCore = &mut rng;
    let shuffled = Flagged::<_, Shuffled>::shuffle(vec![1, 2, 3], dyn_rng);
    assert_eq!(shuffled.len(), 3);
}

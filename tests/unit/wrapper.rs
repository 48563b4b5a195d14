//! Behaviour of the owning wrapper itself, independent of any one policy.

use flagged::policy::{NonEmpty, Positive, Sorted, UniqueAndSorted};
use flagged::Flagged;
use std::collections::{BTreeSet, HashSet};

#[test]
fn borrow_does_not_consume() {
    let xs = Flagged::<_, NonEmpty>::new(vec![1, 2]).unwrap();
    assert_eq!(xs.borrow().len(), 2);
    assert_eq!(xs.borrow().len(), 2);
    assert_eq!(xs.extract(), vec![1, 2]);
}

#[test]
fn clones_are_independent_and_still_valid() {
    let a = Flagged::<_, Sorted>::normalize(vec![2, 1]);
    let b = a.clone();
    drop(a);
    assert_eq!(*b, [1, 2]);
}

#[test]
fn hashes_and_orders_like_the_inner_value() {
    let values = [3, 1, 2, 3].map(|v| Flagged::<u8, Positive>::new(v).unwrap());

    let distinct: HashSet<_> = values.iter().cloned().collect();
    assert_eq!(distinct.len(), 3);
    assert!(distinct.contains(&3u8));

    let ordered: BTreeSet<_> = values.into_iter().collect();
    let raw: Vec<u8> = ordered.into_iter().map(Flagged::extract).collect();
    assert_eq!(raw, vec![1, 2, 3]);
}

#[test]
fn debug_names_the_policy() {
    let set = Flagged::<_, UniqueAndSorted>::normalize(vec![2, 2, 1]);
    assert_eq!(format!("{:?}", set), "UniqueAndSorted([1, 2])");
}

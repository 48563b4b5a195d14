//! Test utilities shared across unit, property, fuzz and bench code.
//!
//! This module is always compiled but hidden from documentation.
//! It provides reference models the transform policies are checked against.

#![doc(hidden)]

use std::collections::BTreeSet;

/// Non-decreasing order.
pub fn is_sorted<U: Ord>(items: &[U]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// Strictly increasing order (sorted, no repeats).
pub fn is_strictly_ascending<U: Ord>(items: &[U]) -> bool {
    items.windows(2).all(|w| w[0] < w[1])
}

/// Whether any two neighbours are equal.
pub fn has_adjacent_duplicates<U: PartialEq>(items: &[U]) -> bool {
    items.windows(2).any(|w| w[0] == w[1])
}

/// Same elements with the same multiplicities.
pub fn is_permutation<U: Ord + Clone>(a: &[U], b: &[U]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// Single left-to-right pass keeping the first element of every run.
pub fn collapse_runs<U: PartialEq + Clone>(items: &[U]) -> Vec<U> {
    let mut out: Vec<U> = Vec::with_capacity(items.len());
    for item in items {
        if out.last() != Some(item) {
            out.push(item.clone());
        }
    }
    out
}

/// The distinct elements in ascending order.
pub fn sorted_set<U: Ord + Clone>(items: &[U]) -> Vec<U> {
    items
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A deterministic generator for reproducible shuffles.
#[cfg(feature = "shuffle")]
pub fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(seed)
}

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use flagged::policy::{Sorted, Unique, UniqueAndSorted};
use flagged::Flagged;

// Re-export canonical reference models from flagged::testing
pub use flagged::testing::{
    collapse_runs, has_adjacent_duplicates, is_permutation, is_sorted, is_strictly_ascending,
    sorted_set,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Input with a duplicate that only becomes adjacent after sorting.
pub const SEPARATED_DUPLICATES: [i32; 6] = [1, 1, 2, 3, 3, 1];

/// Input with repeats in arbitrary order.
pub const SHUFFLED_REPEATS: [i32; 5] = [3, 1, 2, 1, 3];

// ============================================================================
// CONSTRUCTION PATHS
// ============================================================================

/// Build a `UniqueAndSorted` three ways: from raw, via `Sorted`, via `Unique`.
pub fn all_set_paths<U: Ord + Clone>(input: &[U]) -> [Vec<U>; 3] {
    let raw = Flagged::<_, UniqueAndSorted>::normalize(input.to_vec());
    let via_sorted =
        Flagged::<_, UniqueAndSorted>::from(Flagged::<_, Sorted>::normalize(input.to_vec()));
    let via_unique =
        Flagged::<_, UniqueAndSorted>::from(Flagged::<_, Unique>::normalize(input.to_vec()));
    [raw.extract(), via_sorted.extract(), via_unique.extract()]
}

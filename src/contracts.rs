//! Runtime contracts for the transform policies.
//!
//! Predicate policies prove their invariant by returning `Ok`. Transform
//! policies cannot fail, so nothing at runtime says the rewrite actually
//! produced what the policy promises. These checks do:
//!
//! 1. They are **zero-cost in release builds** (`debug_assert!`)
//! 2. They run after every transform in debug builds and in tests
//! 3. They panic with the position of the first offending pair
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract function              | Checked after                       |
//! |--------------------------------|-------------------------------------|
//! | `check_sorted`                 | `Sorted`                            |
//! | `check_no_adjacent_duplicates` | `Unique`                            |
//! | `check_strictly_ascending`     | every `UniqueAndSorted` path        |
//! | `check_same_len`               | `Shuffled`                          |

// ============================================================================
// ORDERING CONTRACTS
// ============================================================================

/// Check that `items` is in non-decreasing order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sorted<U: Ord>(items: &[U]) {
    if cfg!(debug_assertions) {
        for i in 1..items.len() {
            debug_assert!(
                items[i - 1] <= items[i],
                "Contract violation: Sorted - items[{}] > items[{}]",
                i - 1,
                i
            );
        }
    }
}

/// Check that `items` is strictly ascending: sorted and free of duplicates.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is equal or out of order.
#[inline]
pub fn check_strictly_ascending<U: Ord>(items: &[U]) {
    if cfg!(debug_assertions) {
        for i in 1..items.len() {
            debug_assert!(
                items[i - 1] < items[i],
                "Contract violation: UniqueAndSorted - items[{}] >= items[{}]",
                i - 1,
                i
            );
        }
    }
}

// ============================================================================
// DEDUPLICATION CONTRACTS
// ============================================================================

/// Check that no two neighbouring elements are equal.
///
/// # Panics (debug builds only)
/// Panics on the first equal adjacent pair.
#[inline]
pub fn check_no_adjacent_duplicates<U: PartialEq>(items: &[U]) {
    if cfg!(debug_assertions) {
        for i in 1..items.len() {
            debug_assert!(
                items[i - 1] != items[i],
                "Contract violation: Unique - items[{}] == items[{}]",
                i - 1,
                i
            );
        }
    }
}

// ============================================================================
// REORDERING CONTRACTS
// ============================================================================

/// Check that a reordering transform kept every element.
///
/// # Panics (debug builds only)
/// Panics if the length changed.
#[inline]
pub fn check_same_len(policy: &str, before: usize, after: usize) {
    debug_assert_eq!(
        before, after,
        "Contract violation: {} - length changed from {} to {}",
        policy, before, after
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_inputs() {
        check_sorted::<u8>(&[]);
        check_sorted(&[1, 1, 2, 3]);
        check_strictly_ascending(&[1, 2, 3]);
        check_no_adjacent_duplicates(&[1, 2, 1, 2]);
        check_same_len("Sorted", 4, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation: Sorted")]
    fn rejects_unsorted() {
        check_sorted(&[2, 1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation: UniqueAndSorted")]
    fn rejects_repeated_element() {
        check_strictly_ascending(&[1, 2, 2]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation: Unique")]
    fn rejects_adjacent_duplicate() {
        check_no_adjacent_duplicates(&[1, 1]);
    }
}

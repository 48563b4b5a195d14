//! Container-transform policies.
//!
//! These never reject. Construction rewrites the sequence into canonical form,
//! so their `Policy::Error` is `Infallible` and [`Flagged::normalize`] is the
//! usual entry point:
//!
//! ```
//! use flagged::{policy::{Sorted, Unique, UniqueAndSorted}, Flagged};
//!
//! let sorted = Flagged::<_, Sorted>::normalize(vec![3, 1, 2]);
//! assert_eq!(*sorted, [1, 2, 3]);
//!
//! let unique = Flagged::<_, Unique>::normalize(vec![1, 1, 2, 3, 3, 1]);
//! assert_eq!(*unique, [1, 2, 3, 1]);
//!
//! let set = Flagged::<_, UniqueAndSorted>::from(unique);
//! assert_eq!(*set, [1, 2, 3]);
//! ```

use crate::contracts;
use crate::flagged::{Flagged, Implies, Invariant, Policy};
use crate::shape::Sequence;
use std::convert::Infallible;
use tracing::{debug, trace};

/// Elements in ascending order.
pub enum Sorted {}

/// Elements in a random order drawn from a caller-supplied generator.
#[cfg(feature = "shuffle")]
pub enum Shuffled {}

/// No two neighbouring elements are equal.
///
/// Only runs of consecutive equal elements are collapsed; `[1, 2, 1]` stays
/// as it is. Use [`UniqueAndSorted`] for a duplicate-free sequence.
pub enum Unique {}

/// Strictly ascending: sorted, and no element appears twice.
pub enum UniqueAndSorted {}

impl Invariant for Sorted {
    const NAME: &'static str = "Sorted";
}

#[cfg(feature = "shuffle")]
impl Invariant for Shuffled {
    const NAME: &'static str = "Shuffled";
}

impl Invariant for Unique {
    const NAME: &'static str = "Unique";
}

impl Invariant for UniqueAndSorted {
    const NAME: &'static str = "UniqueAndSorted";
}

fn sort_in_place<T>(value: &mut T)
where
    T: Sequence,
    T::Item: Ord,
{
    let items = value.as_mut_slice();
    items.sort();
    contracts::check_sorted(items);
    trace!(policy = "Sorted", len = items.len(), "sorted in place");
}

fn collapse_adjacent<T>(value: &mut T)
where
    T: Sequence,
    T::Item: PartialEq,
{
    let before = value.len();
    if before == 0 {
        return;
    }
    value.dedup_adjacent();
    contracts::check_no_adjacent_duplicates(value.as_mut_slice());
    trace!(
        policy = "Unique",
        before,
        removed = before - value.len(),
        "collapsed adjacent duplicates"
    );
}

impl<T> Policy<T> for Sorted
where
    T: Sequence,
    T::Item: Ord,
{
    type Error = Infallible;

    fn establish(value: &mut T) -> Result<(), Infallible> {
        sort_in_place(value);
        Ok(())
    }
}

impl<T> Policy<T> for Unique
where
    T: Sequence,
    T::Item: PartialEq,
{
    type Error = Infallible;

    fn establish(value: &mut T) -> Result<(), Infallible> {
        collapse_adjacent(value);
        Ok(())
    }
}

impl<T> Policy<T> for UniqueAndSorted
where
    T: Sequence,
    T::Item: Ord,
{
    type Error = Infallible;

    fn establish(value: &mut T) -> Result<(), Infallible> {
        sort_in_place(value);
        collapse_adjacent(value);
        contracts::check_strictly_ascending(value.as_mut_slice());
        Ok(())
    }
}

impl Implies<Sorted> for UniqueAndSorted {}
impl Implies<Unique> for UniqueAndSorted {}

impl<T> From<Flagged<T, Sorted>> for Flagged<T, UniqueAndSorted>
where
    T: Sequence,
    T::Item: Ord,
{
    /// Already sorted, so every duplicate is adjacent: collapsing is enough.
    fn from(sorted: Flagged<T, Sorted>) -> Self {
        let mut value = sorted.extract();
        collapse_adjacent(&mut value);
        contracts::check_strictly_ascending(value.as_mut_slice());
        Flagged::assume(value)
    }
}

impl<T> From<Flagged<T, Unique>> for Flagged<T, UniqueAndSorted>
where
    T: Sequence,
    T::Item: Ord,
{
    /// Sorts, then collapses again.
    ///
    /// `Unique` only removed runs in the original order. Equal elements that
    /// were apart become neighbours once sorted, so the second pass is needed.
    fn from(unique: Flagged<T, Unique>) -> Self {
        let mut value = unique.extract();
        let before = value.len();
        sort_in_place(&mut value);
        collapse_adjacent(&mut value);
        contracts::check_strictly_ascending(value.as_mut_slice());
        if value.len() < before {
            debug!(
                policy = "UniqueAndSorted",
                removed = before - value.len(),
                "duplicates survived Unique and were removed after sorting"
            );
        }
        Flagged::assume(value)
    }
}

#[cfg(feature = "shuffle")]
impl<T: Sequence> Flagged<T, Shuffled> {
    /// Permute `value` uniformly at random using `rng`.
    ///
    /// Randomness is always injected; seed the generator for a reproducible
    /// order.
    pub fn shuffle<R>(mut value: T, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        use rand::seq::SliceRandom;

        let before = value.len();
        value.as_mut_slice().shuffle(rng);
        contracts::check_same_len(Shuffled::NAME, before, value.len());
        trace!(policy = "Shuffled", len = before, "shuffled in place");
        Flagged::assume(value)
    }
}

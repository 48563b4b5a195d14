//! One type alias per policy, for call sites that prefer `NonZero<u32>` over
//! `Flagged<u32, policy::NonZero>`.
//!
//! ```
//! use flagged::alias::{Bounded, MoreThan, Sorted};
//!
//! fn median(samples: &Sorted<Vec<u32>>) -> u32 {
//!     samples[samples.len() / 2]
//! }
//!
//! let samples = Sorted::normalize(vec![9, 1, 5]);
//! assert_eq!(median(&samples), 5);
//!
//! let level = Bounded::<i32, 1, 5>::new(3)?;
//! let crowd = MoreThan::<_, 1>::new(vec!["a", "b"])?;
//! # let _ = (level, crowd);
//! # Ok::<(), flagged::InvariantError>(())
//! ```

use crate::policy;
use crate::Flagged;

pub type NonNull<T> = Flagged<T, policy::NonNull>;
pub type NonZero<T> = Flagged<T, policy::NonZero>;
pub type Positive<T> = Flagged<T, policy::Positive>;
pub type Negative<T> = Flagged<T, policy::Negative>;
pub type NonPositive<T> = Flagged<T, policy::NonPositive>;
pub type NonNegative<T> = Flagged<T, policy::NonNegative>;

pub type CeiledInclusive<T, const MAX: i128> = Flagged<T, policy::CeiledInclusive<MAX>>;
pub type CeiledExclusive<T, const MAX: i128> = Flagged<T, policy::CeiledExclusive<MAX>>;
pub type FlooredInclusive<T, const MIN: i128> = Flagged<T, policy::FlooredInclusive<MIN>>;
pub type FlooredExclusive<T, const MIN: i128> = Flagged<T, policy::FlooredExclusive<MIN>>;
pub type Bounded<T, const MIN: i128, const MAX: i128> = Flagged<T, policy::Bounded<MIN, MAX>>;

pub type NonEmpty<T> = Flagged<T, policy::NonEmpty>;
pub type MoreThan<T, const N: usize> = Flagged<T, policy::MoreThan<N>>;
pub type LessThan<T, const N: usize> = Flagged<T, policy::LessThan<N>>;
pub type FixedSized<T, const N: usize> = Flagged<T, policy::FixedSized<N>>;

pub type Sorted<T> = Flagged<T, policy::Sorted>;
#[cfg(feature = "shuffle")]
pub type Shuffled<T> = Flagged<T, policy::Shuffled>;
pub type Unique<T> = Flagged<T, policy::Unique>;
pub type UniqueAndSorted<T> = Flagged<T, policy::UniqueAndSorted>;

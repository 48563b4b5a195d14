//! The invariant policies.
//!
//! Each policy is an uninhabited marker type; it only ever appears as the `P`
//! in `Flagged<T, P>`.
//!
//! | Module      | Policies                                                    | Fails? |
//! |-------------|-------------------------------------------------------------|--------|
//! | `scalar`    | NonNull, NonZero, Positive, Negative, NonPositive, NonNegative | yes |
//! | `range`     | CeiledInclusive, CeiledExclusive, FlooredInclusive, FlooredExclusive, Bounded | yes |
//! | `size`      | NonEmpty, MoreThan, LessThan, FixedSized                    | yes    |
//! | `transform` | Sorted, Shuffled, Unique, UniqueAndSorted                   | never  |
//!
//! Derived policies reuse their parent's `establish`:
//!
//! ```text
//! NonZero ──▶ Positive, Negative
//! NonEmpty ─▶ MoreThan<N>
//! Sorted ───▶ UniqueAndSorted ◀── Unique
//! ```

mod range;
mod scalar;
mod size;
mod transform;

pub use range::{Bounded, CeiledExclusive, CeiledInclusive, FlooredExclusive, FlooredInclusive};
pub use scalar::{Negative, NonNegative, NonNull, NonPositive, NonZero, Positive};
pub use size::{FixedSized, LessThan, MoreThan, NonEmpty};
#[cfg(feature = "shuffle")]
pub use transform::Shuffled;
pub use transform::{Sorted, Unique, UniqueAndSorted};

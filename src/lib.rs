//! Refinement-type wrappers: values that carry their precondition in their type.
//!
//! A `Flagged<T, P>` owns a `T` that satisfied policy `P` when it was built.
//! Checks run once, at construction. After that the type is the proof, and
//! functions that take a `Flagged<Vec<u32>, UniqueAndSorted>` never need to
//! sort or dedup again.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐     ┌──────────────────────────┐
//! │        flagged.rs        │◀────│        policy/*          │
//! │ (Flagged<T, P>, Policy,  │     │ scalar, range, size,     │
//! │  Invariant, Implies)     │     │ transform                │
//! └──────────────────────────┘     └──────────────────────────┘
//!        ▲                                 │           │
//!        │                                 ▼           ▼
//! ┌──────────────┐              ┌─────────────┐ ┌──────────────┐
//! │  serde_impl  │              │  shape.rs   │ │ contracts.rs │
//! │  (feature)   │              │ (Container, │ │ (debug-build │
//! └──────────────┘              │  Sequence)  │ │  postconds)  │
//!                               └─────────────┘ └──────────────┘
//! ```
//!
//! # Policies
//!
//! | Policy                | Rule                                  | On violation               |
//! |-----------------------|---------------------------------------|----------------------------|
//! | `NonNull`             | not `None` / null pointer             | `InvariantError::Null`     |
//! | `NonZero`             | `!= 0`                                | `Zero`                     |
//! | `Positive`            | NonZero, then `> 0`                   | `Zero` / `WrongSign`       |
//! | `Negative`            | NonZero, then `< 0`                   | `Zero` / `WrongSign`       |
//! | `NonPositive`         | `<= 0`                                | `WrongSign`                |
//! | `NonNegative`         | `>= 0`                                | `WrongSign`                |
//! | `CeiledInclusive<M>`  | `<= M`                                | `TooLarge`                 |
//! | `CeiledExclusive<M>`  | `< M`                                 | `TooLarge`                 |
//! | `FlooredInclusive<M>` | `>= M`                                | `TooSmall`                 |
//! | `FlooredExclusive<M>` | `> M`                                 | `TooSmall`                 |
//! | `Bounded<A, B>`       | `A <= x <= B`                         | `TooSmall` / `TooLarge`    |
//! | `NonEmpty`            | `len > 0`                             | `Empty`                    |
//! | `MoreThan<N>`         | NonEmpty, then `len > N`              | `Empty` / `TooFew`         |
//! | `LessThan<N>`         | `len < N`                             | `TooMany`                  |
//! | `FixedSized<N>`       | `len == N`                            | `WrongSize`                |
//! | `Sorted`              | sorts ascending                       | never                      |
//! | `Shuffled`            | random permutation (injected RNG)     | never                      |
//! | `Unique`              | collapses adjacent duplicates         | never                      |
//! | `UniqueAndSorted`     | sorts, then collapses                 | never                      |
//!
//! # Usage
//!
//! ```
//! use flagged::policy::{NonEmpty, Positive, UniqueAndSorted};
//! use flagged::{Flagged, InvariantError};
//!
//! fn mean(xs: &Flagged<Vec<f64>, NonEmpty>) -> f64 {
//!     // Cannot divide by zero: the type says there is at least one element.
//!     xs.iter().sum::<f64>() / xs.len() as f64
//! }
//!
//! let xs = Flagged::<_, NonEmpty>::new(vec![1.0, 2.0, 3.0])?;
//! assert_eq!(mean(&xs), 2.0);
//!
//! assert_eq!(
//!     Flagged::<i32, Positive>::new(0).unwrap_err(),
//!     InvariantError::Zero
//! );
//!
//! let ids = Flagged::<_, UniqueAndSorted>::normalize(vec![3, 1, 2, 1, 3]);
//! assert_eq!(ids.extract(), vec![1, 2, 3]);
//! # Ok::<(), InvariantError>(())
//! ```

pub mod alias;
pub mod contracts;
mod error;
mod flagged;
pub mod policy;
pub mod shape;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;

pub use error::{InvariantError, SignRule};
pub use flagged::{Flagged, Implies, Invariant, Policy};
pub use shape::{Container, Nullable, Sequence};

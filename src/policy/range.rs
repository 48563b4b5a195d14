//! Static range policies.
//!
//! Bounds are `i128` const generics, so every bound pair is its own type and
//! nothing is configured at runtime:
//!
//! ```
//! use flagged::{policy::Bounded, Flagged};
//!
//! type Percent = Flagged<u8, Bounded<0, 100>>;
//!
//! assert!(Percent::new(100).is_ok());
//! assert!(Percent::new(101).is_err());
//! ```
//!
//! A bound outside `T`'s range compares as lying past the end of that range,
//! so `Flagged<u8, FlooredInclusive<-5>>` accepts every `u8`.

use crate::error::InvariantError;
use crate::flagged::{Invariant, Policy};
use crate::shape::cmp_bound;
use num_traits::NumCast;
use std::cmp::Ordering;

/// Fails if `value > MAX`.
pub enum CeiledInclusive<const MAX: i128> {}

/// Fails if `value >= MAX`.
pub enum CeiledExclusive<const MAX: i128> {}

/// Fails if `value < MIN`.
pub enum FlooredInclusive<const MIN: i128> {}

/// Fails if `value <= MIN`.
pub enum FlooredExclusive<const MIN: i128> {}

/// Fails if `value < MIN` or `value > MAX`. Both ends inclusive.
pub enum Bounded<const MIN: i128, const MAX: i128> {}

impl<const MAX: i128> Invariant for CeiledInclusive<MAX> {
    const NAME: &'static str = "CeiledInclusive";
}

impl<const MAX: i128> Invariant for CeiledExclusive<MAX> {
    const NAME: &'static str = "CeiledExclusive";
}

impl<const MIN: i128> Invariant for FlooredInclusive<MIN> {
    const NAME: &'static str = "FlooredInclusive";
}

impl<const MIN: i128> Invariant for FlooredExclusive<MIN> {
    const NAME: &'static str = "FlooredExclusive";
}

impl<const MIN: i128, const MAX: i128> Invariant for Bounded<MIN, MAX> {
    const NAME: &'static str = "Bounded";
}

fn ceiling<T>(value: &T, max: i128, inclusive: bool) -> Result<(), InvariantError>
where
    T: NumCast + PartialOrd,
{
    match cmp_bound(value, max) {
        None => Err(InvariantError::Unordered),
        Some(Ordering::Less) => Ok(()),
        Some(Ordering::Equal) if inclusive => Ok(()),
        Some(_) => Err(InvariantError::TooLarge {
            limit: max,
            inclusive,
        }),
    }
}

fn floor<T>(value: &T, min: i128, inclusive: bool) -> Result<(), InvariantError>
where
    T: NumCast + PartialOrd,
{
    match cmp_bound(value, min) {
        None => Err(InvariantError::Unordered),
        Some(Ordering::Greater) => Ok(()),
        Some(Ordering::Equal) if inclusive => Ok(()),
        Some(_) => Err(InvariantError::TooSmall {
            limit: min,
            inclusive,
        }),
    }
}

impl<T: NumCast + PartialOrd, const MAX: i128> Policy<T> for CeiledInclusive<MAX> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        ceiling(value, MAX, true)
    }
}

impl<T: NumCast + PartialOrd, const MAX: i128> Policy<T> for CeiledExclusive<MAX> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        ceiling(value, MAX, false)
    }
}

impl<T: NumCast + PartialOrd, const MIN: i128> Policy<T> for FlooredInclusive<MIN> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        floor(value, MIN, true)
    }
}

impl<T: NumCast + PartialOrd, const MIN: i128> Policy<T> for FlooredExclusive<MIN> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        floor(value, MIN, false)
    }
}

impl<const MIN: i128, const MAX: i128> Bounded<MIN, MAX> {
    // Evaluated per instantiation: an empty range fails to compile.
    const NON_EMPTY: () = assert!(MIN <= MAX, "Bounded<MIN, MAX> requires MIN <= MAX");
}

impl<T: NumCast + PartialOrd, const MIN: i128, const MAX: i128> Policy<T> for Bounded<MIN, MAX> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        floor(value, MIN, true)?;
        ceiling(value, MAX, true)
    }
}

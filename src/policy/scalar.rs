//! Nullability and sign policies for single values.
//!
//! Sign checks are generic over `num_traits::Zero + PartialOrd`, so they work
//! for every primitive integer and float. NaN is not zero, and it is neither
//! greater nor less than zero, so only `NonZero` accepts it.

use crate::error::{InvariantError, SignRule};
use crate::flagged::{Implies, Invariant, Policy};
use crate::shape::Nullable;
use num_traits::Zero;

/// Rejects `None` and null pointers.
pub enum NonNull {}

impl Invariant for NonNull {
    const NAME: &'static str = "NonNull";
}

impl<T: Nullable> Policy<T> for NonNull {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        if value.is_null() {
            return Err(InvariantError::Null);
        }
        Ok(())
    }
}

/// Rejects zero.
pub enum NonZero {}

impl Invariant for NonZero {
    const NAME: &'static str = "NonZero";
}

impl<T: Zero> Policy<T> for NonZero {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        if value.is_zero() {
            return Err(InvariantError::Zero);
        }
        Ok(())
    }
}

/// Accepts only `value > 0`. Builds on [`NonZero`].
pub enum Positive {}

impl Invariant for Positive {
    const NAME: &'static str = "Positive";
}

impl<T: Zero + PartialOrd> Policy<T> for Positive {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        <NonZero as Policy<T>>::establish(value)?;
        require_sign(*value > T::zero(), SignRule::Positive)
    }
}

impl Implies<NonZero> for Positive {}
impl Implies<NonNegative> for Positive {}

/// Accepts only `value < 0`. Builds on [`NonZero`].
pub enum Negative {}

impl Invariant for Negative {
    const NAME: &'static str = "Negative";
}

impl<T: Zero + PartialOrd> Policy<T> for Negative {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        <NonZero as Policy<T>>::establish(value)?;
        require_sign(*value < T::zero(), SignRule::Negative)
    }
}

impl Implies<NonZero> for Negative {}
impl Implies<NonPositive> for Negative {}

/// Accepts only `value <= 0`.
pub enum NonPositive {}

impl Invariant for NonPositive {
    const NAME: &'static str = "NonPositive";
}

impl<T: Zero + PartialOrd> Policy<T> for NonPositive {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        require_sign(*value <= T::zero(), SignRule::NonPositive)
    }
}

/// Accepts only `value >= 0`.
pub enum NonNegative {}

impl Invariant for NonNegative {
    const NAME: &'static str = "NonNegative";
}

impl<T: Zero + PartialOrd> Policy<T> for NonNegative {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        require_sign(*value >= T::zero(), SignRule::NonNegative)
    }
}

fn require_sign(holds: bool, expected: SignRule) -> Result<(), InvariantError> {
    if holds {
        Ok(())
    } else {
        Err(InvariantError::WrongSign { expected })
    }
}

//! Container-size policies.

use crate::error::InvariantError;
use crate::flagged::{Implies, Invariant, Policy};
use crate::shape::Container;

/// Rejects empty containers.
pub enum NonEmpty {}

/// Rejects containers with `N` or fewer elements. Builds on [`NonEmpty`].
pub enum MoreThan<const N: usize> {}

/// Rejects containers with `N` or more elements.
pub enum LessThan<const N: usize> {}

/// Rejects containers that do not hold exactly `N` elements.
pub enum FixedSized<const N: usize> {}

impl Invariant for NonEmpty {
    const NAME: &'static str = "NonEmpty";
}

impl<const N: usize> Invariant for MoreThan<N> {
    const NAME: &'static str = "MoreThan";
}

impl<const N: usize> Invariant for LessThan<N> {
    const NAME: &'static str = "LessThan";
}

impl<const N: usize> Invariant for FixedSized<N> {
    const NAME: &'static str = "FixedSized";
}

impl<T: Container> Policy<T> for NonEmpty {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        if value.is_empty() {
            return Err(InvariantError::Empty);
        }
        Ok(())
    }
}

impl<T: Container, const N: usize> Policy<T> for MoreThan<N> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        <NonEmpty as Policy<T>>::establish(value)?;
        let len = value.len();
        if len <= N {
            return Err(InvariantError::TooFew { len, more_than: N });
        }
        Ok(())
    }
}

impl<const N: usize> Implies<NonEmpty> for MoreThan<N> {}

impl<T: Container, const N: usize> Policy<T> for LessThan<N> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        let len = value.len();
        if len >= N {
            return Err(InvariantError::TooMany { len, less_than: N });
        }
        Ok(())
    }
}

impl<T: Container, const N: usize> Policy<T> for FixedSized<N> {
    type Error = InvariantError;

    fn establish(value: &mut T) -> Result<(), InvariantError> {
        let len = value.len();
        if len != N {
            return Err(InvariantError::WrongSize { len, expected: N });
        }
        Ok(())
    }
}

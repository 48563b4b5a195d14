//! The one error type every predicate policy reports.
//!
//! Transform policies never fail and use [`core::convert::Infallible`] instead,
//! so a `Result<_, InvariantError>` always means "this value was rejected".

use std::fmt;
use thiserror::Error;

/// Which sign rule a value failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignRule {
    /// `value > 0`
    Positive,
    /// `value < 0`
    Negative,
    /// `value <= 0`
    NonPositive,
    /// `value >= 0`
    NonNegative,
}

impl fmt::Display for SignRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self {
            SignRule::Positive => "> 0",
            SignRule::Negative => "< 0",
            SignRule::NonPositive => "<= 0",
            SignRule::NonNegative => ">= 0",
        };
        f.write_str(rule)
    }
}

/// Error type for invariant violations.
///
/// Raised synchronously by `Flagged::new` and nowhere else. The rejected value
/// is dropped; no partially built wrapper ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvariantError {
    /// Value is `None` or a null pointer.
    #[error("value is null")]
    Null,
    /// Value equals zero.
    #[error("value is zero")]
    Zero,
    /// Value has the wrong sign.
    #[error("value must be {expected}")]
    WrongSign { expected: SignRule },
    /// Value lies above the ceiling.
    #[error("value must be {} {limit}", upper(.inclusive))]
    TooLarge { limit: i128, inclusive: bool },
    /// Value lies below the floor.
    #[error("value must be {} {limit}", lower(.inclusive))]
    TooSmall { limit: i128, inclusive: bool },
    /// Value has no defined ordering against the bound (NaN).
    #[error("value cannot be compared against its bound")]
    Unordered,
    /// Container holds no elements.
    #[error("container is empty")]
    Empty,
    /// Container has `len <= more_than` elements.
    #[error("container has {len} elements, needs more than {more_than}")]
    TooFew { len: usize, more_than: usize },
    /// Container has `len >= less_than` elements.
    #[error("container has {len} elements, needs fewer than {less_than}")]
    TooMany { len: usize, less_than: usize },
    /// Container does not have exactly `expected` elements.
    #[error("container has {len} elements, needs exactly {expected}")]
    WrongSize { len: usize, expected: usize },
}

fn upper(inclusive: &bool) -> &'static str {
    if *inclusive {
        "<="
    } else {
        "<"
    }
}

fn lower(inclusive: &bool) -> &'static str {
    if *inclusive {
        ">="
    } else {
        ">"
    }
}

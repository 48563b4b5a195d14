//! Nullability and sign policies.

use flagged::alias;
use flagged::policy::{Negative, NonNegative, NonNull, NonPositive, NonZero, Positive};
use flagged::{Flagged, InvariantError, SignRule};

#[test]
fn non_null_keeps_the_value_unchanged() {
    let name = Flagged::<_, NonNull>::new(Some(String::from("ada"))).unwrap();
    assert_eq!(name.borrow().as_deref(), Some("ada"));
    assert_eq!(
        Flagged::<Option<String>, NonNull>::new(None).unwrap_err(),
        InvariantError::Null
    );
}

#[test]
fn zero_boundary_across_sign_policies() {
    assert!(Flagged::<i32, NonZero>::new(0).is_err());
    assert!(Flagged::<i32, Positive>::new(0).is_err());
    assert!(Flagged::<i32, Negative>::new(0).is_err());
    assert!(Flagged::<i32, NonPositive>::new(0).is_ok());
    assert!(Flagged::<i32, NonNegative>::new(0).is_ok());
}

#[test]
fn one_either_side_of_zero() {
    assert!(Flagged::<i32, Positive>::new(1).is_ok());
    assert!(Flagged::<i32, Negative>::new(-1).is_ok());
    assert!(Flagged::<i32, NonPositive>::new(-1).is_ok());
    assert!(Flagged::<i32, NonNegative>::new(1).is_ok());

    assert_eq!(
        Flagged::<i32, NonPositive>::new(1).unwrap_err(),
        InvariantError::WrongSign {
            expected: SignRule::NonPositive
        }
    );
}

#[test]
fn unsigned_zero_is_the_only_non_positive() {
    assert!(Flagged::<u64, NonPositive>::new(0).is_ok());
    assert!(Flagged::<u64, NonPositive>::new(1).is_err());
    assert!(Flagged::<u64, NonNegative>::new(u64::MAX).is_ok());
}

#[test]
fn aliases_build_the_same_wrapper() {
    let divisor = alias::NonZero::<u32>::new(4).unwrap();
    assert_eq!(100 / *divisor, 25);
    assert_eq!(divisor.policy_name(), "NonZero");
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(InvariantError::Zero);
    assert_eq!(err.to_string(), "value is zero");
}

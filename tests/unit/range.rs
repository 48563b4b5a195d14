//! Static range policies.

use flagged::policy::{Bounded, CeiledExclusive, CeiledInclusive, FlooredExclusive, FlooredInclusive};
use flagged::{Flagged, InvariantError};

#[test]
fn bounded_zero_to_ten() {
    for ok in [0, 5, 10] {
        assert!(Flagged::<i32, Bounded<0, 10>>::new(ok).is_ok(), "{} rejected", ok);
    }
    for bad in [-1, 11, i32::MIN, i32::MAX] {
        assert!(Flagged::<i32, Bounded<0, 10>>::new(bad).is_err(), "{} accepted", bad);
    }
}

#[test]
fn ceiled_exclusive_ten() {
    assert!(Flagged::<i32, CeiledExclusive<10>>::new(9).is_ok());
    assert!(Flagged::<i32, CeiledExclusive<10>>::new(10).is_err());
}

#[test]
fn inclusive_and_exclusive_differ_only_at_the_bound() {
    assert!(Flagged::<i16, CeiledInclusive<7>>::new(7).is_ok());
    assert!(Flagged::<i16, CeiledExclusive<7>>::new(7).is_err());
    assert!(Flagged::<i16, FlooredInclusive<7>>::new(7).is_ok());
    assert!(Flagged::<i16, FlooredExclusive<7>>::new(7).is_err());

    assert!(Flagged::<i16, CeiledInclusive<7>>::new(6).is_ok());
    assert!(Flagged::<i16, CeiledExclusive<7>>::new(6).is_ok());
    assert!(Flagged::<i16, FlooredInclusive<7>>::new(8).is_ok());
    assert!(Flagged::<i16, FlooredExclusive<7>>::new(8).is_ok());
}

#[test]
fn bounds_are_part_of_the_type() {
    let small = Flagged::<u32, CeiledInclusive<10>>::new(3).unwrap();
    let large = Flagged::<u32, CeiledInclusive<1000>>::new(small.extract()).unwrap();
    assert_eq!(*large, 3);
}

#[test]
fn error_reports_the_bound() {
    assert_eq!(
        Flagged::<i64, FlooredExclusive<-10>>::new(-10)
            .unwrap_err()
            .to_string(),
        "value must be > -10"
    );
    assert_eq!(
        Flagged::<u8, Bounded<1, 6>>::new(0).unwrap_err(),
        InvariantError::TooSmall {
            limit: 1,
            inclusive: true
        }
    );
}

#[test]
fn full_width_unsigned_values() {
    assert!(Flagged::<u128, FlooredInclusive<0>>::new(u128::MAX).is_ok());
    assert!(Flagged::<u128, CeiledInclusive<{ i128::MAX }>>::new(u128::MAX).is_err());
    assert!(Flagged::<usize, CeiledExclusive<-1>>::new(0).is_err());
}

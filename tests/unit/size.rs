//! Container-size policies.

use flagged::policy::{FixedSized, LessThan, MoreThan, NonEmpty};
use flagged::{Flagged, InvariantError};
use std::collections::{BTreeSet, VecDeque};

#[test]
fn more_than_two() {
    assert!(Flagged::<Vec<i32>, MoreThan<2>>::new(vec![1, 2]).is_err());
    assert!(Flagged::<Vec<i32>, MoreThan<2>>::new(vec![1, 2, 3]).is_ok());
}

#[test]
fn fixed_sized_three_only_at_three() {
    for len in 0..6 {
        let result = Flagged::<Vec<u8>, FixedSized<3>>::new(vec![0; len]);
        assert_eq!(result.is_ok(), len == 3, "len {}", len);
    }
}

#[test]
fn less_than_rejects_at_the_limit() {
    assert!(Flagged::<String, LessThan<4>>::new("abc".into()).is_ok());
    assert_eq!(
        Flagged::<String, LessThan<4>>::new("abcd".into()).unwrap_err(),
        InvariantError::TooMany {
            len: 4,
            less_than: 4
        }
    );
}

#[test]
fn less_than_zero_rejects_everything() {
    assert!(Flagged::<Vec<u8>, LessThan<0>>::new(Vec::new()).is_err());
}

#[test]
fn works_across_collection_types() {
    assert!(Flagged::<VecDeque<u8>, NonEmpty>::new(VecDeque::new()).is_err());
    assert!(Flagged::<BTreeSet<u8>, NonEmpty>::new([1].into()).is_ok());
    assert!(Flagged::<[u8; 3], FixedSized<3>>::new([0; 3]).is_ok());
    assert!(Flagged::<&[u8], MoreThan<1>>::new(&[1, 2][..]).is_ok());
    assert!(Flagged::<Box<[u8]>, NonEmpty>::new(Box::new([])).is_err());
}

#[test]
fn more_than_can_be_used_where_non_empty_is_required() {
    fn first(xs: &Flagged<Vec<u8>, NonEmpty>) -> u8 {
        xs[0]
    }

    let xs = Flagged::<_, MoreThan<3>>::new(vec![9, 8, 7, 6]).unwrap();
    assert_eq!(first(&xs.weaken()), 9);
}

//! Fuzz target for the predicate policies.
//!
//! A predicate must accept exactly the values its rule allows, and when it
//! accepts, the wrapped value must be the input untouched.

#![no_main]

use arbitrary::Arbitrary;
use flagged::policy::{
    Bounded, CeiledExclusive, FixedSized, FlooredInclusive, LessThan, MoreThan, NonEmpty,
    NonNegative, Positive,
};
use flagged::Flagged;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PredicateInput {
    scalar: i64,
    float: f64,
    items: Vec<u8>,
}

fuzz_target!(|input: PredicateInput| {
    let x = input.scalar;

    // Property 1: scalar policies agree with the plain comparison
    assert_eq!(Flagged::<i64, Positive>::new(x).is_ok(), x > 0);
    assert_eq!(Flagged::<i64, NonNegative>::new(x).is_ok(), x >= 0);
    assert_eq!(
        Flagged::<i64, Bounded<-1000, 1000>>::new(x).is_ok(),
        (-1000..=1000).contains(&x)
    );
    assert_eq!(Flagged::<i64, CeiledExclusive<0>>::new(x).is_ok(), x < 0);

    // Property 2: floats follow IEEE comparison, NaN is never in range
    let f = input.float;
    assert_eq!(Flagged::<f64, Positive>::new(f).is_ok(), f > 0.0);
    assert_eq!(Flagged::<f64, FlooredInclusive<1>>::new(f).is_ok(), f >= 1.0);

    // Property 3: accepted values come back untouched
    if let Ok(wrapped) = Flagged::<i64, Positive>::new(x) {
        assert_eq!(wrapped.extract(), x);
    }

    // Property 4: size policies agree with len()
    let len = input.items.len();
    assert_eq!(Flagged::<_, NonEmpty>::new(input.items.clone()).is_ok(), len > 0);
    assert_eq!(Flagged::<_, MoreThan<4>>::new(input.items.clone()).is_ok(), len > 4);
    assert_eq!(Flagged::<_, LessThan<4>>::new(input.items.clone()).is_ok(), len < 4);
    assert_eq!(Flagged::<_, FixedSized<4>>::new(input.items).is_ok(), len == 4);
});

//! What a wrapped value has to expose for a policy to inspect or rewrite it.
//!
//! | Trait       | Needed by                          |
//! |-------------|------------------------------------|
//! | `Nullable`  | `NonNull`                          |
//! | `Container` | `NonEmpty`, `MoreThan`, `LessThan`, `FixedSized` |
//! | `Sequence`  | `Sorted`, `Shuffled`, `Unique`, `UniqueAndSorted` |
//!
//! Sign and range policies use `num_traits` directly and need nothing here
//! beyond [`cmp_bound`].

use num_traits::{NumCast, ToPrimitive};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// A type with a null-equivalent state.
pub trait Nullable {
    /// True when the value is in its null state.
    fn is_null(&self) -> bool;
}

impl<U> Nullable for Option<U> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<U: ?Sized> Nullable for *const U {
    fn is_null(&self) -> bool {
        <*const U>::is_null(*self)
    }
}

impl<U: ?Sized> Nullable for *mut U {
    fn is_null(&self) -> bool {
        <*mut U>::is_null(*self)
    }
}

/// A collection with a known element count.
pub trait Container {
    /// Number of elements (entries for maps, bytes for strings).
    fn len(&self) -> usize;

    /// True when there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! container_by_len {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Container for $ty {
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }
            }
        )*
    };
}

container_by_len! {
    [U] Vec<U>,
    [U] VecDeque<U>,
    [U] LinkedList<U>,
    [K, V] BTreeMap<K, V>,
    [U] BTreeSet<U>,
    [K, V, S] HashMap<K, V, S>,
    [U, S] HashSet<U, S>,
}

impl Container for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

impl Container for &str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl<U> Container for Box<[U]> {
    fn len(&self) -> usize {
        <[U]>::len(self)
    }
}

impl<U> Container for &[U] {
    fn len(&self) -> usize {
        <[U]>::len(self)
    }
}

impl<U, const N: usize> Container for [U; N] {
    fn len(&self) -> usize {
        N
    }
}

/// An ordered, growable sequence the transform policies can rewrite in place.
pub trait Sequence: Container {
    type Item;

    /// All elements, in order, as one contiguous slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Drop consecutive equal elements, keeping the first of each run.
    fn dedup_adjacent(&mut self)
    where
        Self::Item: PartialEq;
}

impl<U> Sequence for Vec<U> {
    type Item = U;

    fn as_mut_slice(&mut self) -> &mut [U] {
        Vec::as_mut_slice(self)
    }

    fn dedup_adjacent(&mut self)
    where
        U: PartialEq,
    {
        self.dedup();
    }
}

impl<U> Sequence for VecDeque<U> {
    type Item = U;

    fn as_mut_slice(&mut self) -> &mut [U] {
        self.make_contiguous()
    }

    fn dedup_adjacent(&mut self)
    where
        U: PartialEq,
    {
        let mut items = Vec::from(std::mem::take(self));
        items.dedup();
        *self = VecDeque::from(items);
    }
}

/// Compare `value` against a const-generic `i128` bound.
///
/// A bound that does not fit in `T` lies past the end of `T`'s range, so every
/// `T` compares as greater (negative bound) or less (positive bound).
/// Returns `None` only when `value` itself is unordered (NaN).
///
/// Floats may round the bound to a neighbour. Since `value` is representable
/// and nothing representable lies between the bound and its rounded form,
/// only a tie with the rounded bound needs settling, and the rounding
/// direction decides it.
pub fn cmp_bound<T>(value: &T, bound: i128) -> Option<Ordering>
where
    T: NumCast + PartialOrd,
{
    match <T as NumCast>::from(bound) {
        Some(rounded) => match value.partial_cmp(&rounded)? {
            Ordering::Equal => match rounded.to_i128() {
                Some(exact) => Some(exact.cmp(&bound)),
                // Rounded past i128::MAX or below i128::MIN.
                None if bound < 0 => Some(Ordering::Less),
                None => Some(Ordering::Greater),
            },
            unequal => Some(unequal),
        },
        None if value.partial_cmp(value).is_none() => None,
        None if bound < 0 => Some(Ordering::Greater),
        None => Some(Ordering::Less),
    }
}

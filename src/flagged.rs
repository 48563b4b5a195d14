//! The owning wrapper every policy builds on.
//!
//! `Flagged<T, P>` owns one `T` that satisfied policy `P` when it was built.
//! There is no way to get a `&mut T` back out, so the value keeps satisfying
//! `P` until it is dropped or handed back with [`Flagged::extract`].
//!
//! ```
//! use flagged::{policy::Positive, Flagged};
//!
//! let n = Flagged::<i32, Positive>::new(7)?;
//! assert_eq!(*n.borrow(), 7);
//! assert_eq!(n.extract(), 7);
//! # Ok::<(), flagged::InvariantError>(())
//! ```
//!
//! Extraction consumes the wrapper, so a second read does not compile:
//!
//! ```compile_fail
//! use flagged::{policy::Positive, Flagged};
//!
//! let n = Flagged::<i32, Positive>::new(7).unwrap();
//! let raw = n.extract();
//! let again = n.borrow();
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

/// A named invariant or normalisation.
///
/// Every policy marker implements this, including ones (like `Shuffled`)
/// that need extra input and therefore cannot implement [`Policy`].
pub trait Invariant {
    /// Short name used in `Debug` output and error reports.
    const NAME: &'static str;
}

/// How a policy establishes its invariant on a raw `T`.
///
/// Predicate policies inspect the value and return `Err` on violation.
/// Transform policies rewrite the value in place and use `Infallible`.
/// A policy that extends another calls the parent's `establish` first.
pub trait Policy<T>: Invariant {
    /// What a rejected value reports.
    type Error;

    /// Check or normalise `value`. On `Err` the value is discarded by the caller.
    fn establish(value: &mut T) -> Result<(), Self::Error>;
}

/// `Self`'s invariant is at least as strong as `Q`'s.
///
/// Lets an already-built value be relabelled with a weaker policy without
/// re-running any check. See [`Flagged::weaken`].
pub trait Implies<Q: Invariant>: Invariant {}

/// A value of type `T` that satisfies policy `P` for its whole lifetime.
///
/// No `Default`, no `DerefMut`, no setter: the only ways in are the policy's
/// constructors and the only way to mutate is to [`extract`](Self::extract)
/// and build again.
pub struct Flagged<T, P> {
    value: T,
    policy: PhantomData<fn() -> P>,
}

impl<T, P> Flagged<T, P> {
    // INVARIANT: callers guarantee `value` satisfies `P`.
    pub(crate) fn assume(value: T) -> Self {
        Self {
            value,
            policy: PhantomData,
        }
    }

    /// Read access, valid as long as the wrapper lives.
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &T {
        &self.value
    }

    /// Hand the value back, consuming the wrapper.
    pub fn extract(self) -> T {
        self.value
    }

    /// Relabel with a weaker policy. No check runs.
    pub fn weaken<Q>(self) -> Flagged<T, Q>
    where
        P: Implies<Q>,
        Q: Invariant,
    {
        Flagged::assume(self.value)
    }

    /// Name of the policy this value satisfies.
    pub fn policy_name(&self) -> &'static str
    where
        P: Invariant,
    {
        P::NAME
    }
}

impl<T, P: Policy<T>> Flagged<T, P> {
    /// Build from a raw value. All or nothing: either the returned wrapper
    /// satisfies `P`, or `value` is dropped and the error comes back.
    pub fn new(mut value: T) -> Result<Self, P::Error> {
        P::establish(&mut value)?;
        Ok(Self::assume(value))
    }
}

impl<T, P: Policy<T, Error = Infallible>> Flagged<T, P> {
    /// Build from a raw value with a policy that cannot reject.
    pub fn normalize(value: T) -> Self {
        match Self::new(value) {
            Ok(flagged) => flagged,
            Err(never) => match never {},
        }
    }
}

impl<T, P> Deref for Flagged<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, P> AsRef<T> for Flagged<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P> Borrow<T> for Flagged<T, P> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

// Trait forwarding below is written by hand so that no bound lands on `P`.
// `Copy` is left out: a copyable wrapper would survive `extract`.

impl<T: Clone, P> Clone for Flagged<T, P> {
    fn clone(&self) -> Self {
        Self::assume(self.value.clone())
    }
}

impl<T: PartialEq, P> PartialEq for Flagged<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P> Eq for Flagged<T, P> {}

impl<T: PartialOrd, P> PartialOrd for Flagged<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P> Ord for Flagged<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P> Hash for Flagged<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, P: Invariant> fmt::Debug for Flagged<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(P::NAME).field(&self.value).finish()
    }
}

impl<T: fmt::Display, P> fmt::Display for Flagged<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

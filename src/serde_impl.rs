//! Serde support (`serde` feature).
//!
//! Serialization is transparent: a `Flagged<T, P>` serializes exactly like its
//! `T`. Deserialization goes through `Flagged::new`, so predicate policies
//! reject invalid input and transform policies normalise it. A value that
//! arrives over the wire is held to the same invariant as one built in code.

use crate::flagged::{Flagged, Policy};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl<T: Serialize, P> Serialize for Flagged<T, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.borrow().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Flagged<T, P>
where
    T: Deserialize<'de>,
    P: Policy<T>,
    P::Error: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Flagged::new(value).map_err(|e| D::Error::custom(format_args!("{}: {}", P::NAME, e)))
    }
}

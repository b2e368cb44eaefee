//! Immutable two-element tuple.

use std::fmt;

use serde::{Deserialize, Serialize};

const HASH_MULTIPLIER: i32 = 31;

/// An immutable pair. Equality is element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Build a pair. No validation is applied.
    #[must_use]
    pub const fn of(first: A, second: B) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub const fn first(&self) -> &A {
        &self.first
    }

    #[must_use]
    pub const fn second(&self) -> &B {
        &self.second
    }

    #[must_use]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: fmt::Display, B: fmt::Display> Pair<A, B> {
    /// 32-bit hash folded from the UTF-16 code units of each element's
    /// display form, combined with [`HASH_MULTIPLIER`].
    ///
    /// Stable across runs and platforms, unlike [`std::hash::Hash`].
    #[must_use]
    pub fn hash_code(&self) -> i32 {
        fold(&self.first.to_string())
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(fold(&self.second.to_string()))
    }
}

fn fold(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
    })
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::of(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({}, {})", self.first, self.second)
    }
}

//! The "has a usable value" test applied to [`Result`](crate::Result) success values.
//!
//! By default zero numbers, `false` and empty strings count as absent, the
//! same way the reference containers treat falsy values. Enabling the
//! `strict-presence` feature makes only `None` (and JSON `null`) absent.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// Whether a value counts as present.
///
/// Implement it with an empty body for your own types to make them always
/// present:
///
/// ```
/// use outcome_core::{Presence, Result};
///
/// struct User {
///     name: String,
/// }
///
/// impl Presence for User {}
///
/// let user = Result::ok(User { name: "ada".into() });
/// assert_eq!(user.get().map(|u| u.name.as_str()), Ok("ada"));
/// ```
pub trait Presence {
    fn is_present_value(&self) -> bool {
        true
    }
}

const STRICT: bool = cfg!(feature = "strict-presence");

macro_rules! zero_is_absent {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_present_value(&self) -> bool {
                    STRICT || *self != 0
                }
            }
        )*
    };
}

zero_is_absent!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_zero_is_absent {
    ($($ty:ty),*) => {
        $(
            impl Presence for $ty {
                fn is_present_value(&self) -> bool {
                    STRICT || !(*self == 0.0 || self.is_nan())
                }
            }
        )*
    };
}

float_zero_is_absent!(f32, f64);

impl Presence for bool {
    fn is_present_value(&self) -> bool {
        STRICT || *self
    }
}

impl Presence for str {
    fn is_present_value(&self) -> bool {
        STRICT || !self.is_empty()
    }
}

impl Presence for String {
    fn is_present_value(&self) -> bool {
        self.as_str().is_present_value()
    }
}

impl Presence for Cow<'_, str> {
    fn is_present_value(&self) -> bool {
        (**self).is_present_value()
    }
}

impl<T> Presence for Option<T> {
    fn is_present_value(&self) -> bool {
        self.is_some()
    }
}

impl<T> Presence for crate::Option<T> {
    fn is_present_value(&self) -> bool {
        self.is_ok()
    }
}

impl Presence for serde_json::Value {
    fn is_present_value(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => flag.is_present_value(),
            Self::Number(number) => {
                STRICT || number.as_f64().is_none_or(|value| value.is_present_value())
            }
            Self::String(text) => text.is_present_value(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present_value(&self) -> bool {
        (**self).is_present_value()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_present_value(&self) -> bool {
        (**self).is_present_value()
    }
}

impl<T: Presence + ?Sized> Presence for Arc<T> {
    fn is_present_value(&self) -> bool {
        (**self).is_present_value()
    }
}

impl<T: Presence + ?Sized> Presence for Rc<T> {
    fn is_present_value(&self) -> bool {
        (**self).is_present_value()
    }
}

impl Presence for () {}
impl Presence for char {}
impl<T> Presence for Vec<T> {}
impl<T> Presence for [T] {}
impl<T, const N: usize> Presence for [T; N] {}
impl<T> Presence for VecDeque<T> {}
impl<K, V, S> Presence for HashMap<K, V, S> {}
impl<T, S> Presence for HashSet<T, S> {}
impl<K, V> Presence for BTreeMap<K, V> {}
impl<T> Presence for BTreeSet<T> {}
impl<A, B> Presence for (A, B) {}
impl<A, B, C> Presence for (A, B, C) {}
impl<A, B> Presence for crate::Pair<A, B> {}
impl Presence for crate::Failure {}

//! Optional container.
//!
//! [`Option`] expresses "maybe absent", never "failed with a reason":
//! [`Option::of`] collapses any failure of its supplier to empty.

use std::future::Future;

use crate::capture;
use crate::cause::Cause;
use crate::failure::Failure;

/// A present value or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Option<T> {
    value: std::option::Option<T>,
}

impl<T> Option<T> {
    /// Wrap a value. Absence is ruled out by the type; see [`Option::try_ok`]
    /// for nullable input.
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Wrap a value that must be there.
    ///
    /// # Errors
    ///
    /// Returns an `IllegalArgument` failure when `value` is `None`.
    pub fn try_ok(value: std::option::Option<T>) -> Result<Self, Failure> {
        value
            .map(Self::ok)
            .ok_or_else(|| Failure::illegal_argument("Option.ok requires a value"))
    }

    /// Empty when `value` is `None`, present otherwise.
    #[must_use]
    pub const fn from_nullable(value: std::option::Option<T>) -> Self {
        Self { value }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The value.
    ///
    /// # Errors
    ///
    /// Returns an `IllegalArgument` failure when empty.
    pub fn get(&self) -> Result<&T, Failure> {
        self.value
            .as_ref()
            .ok_or_else(|| Failure::illegal_argument("attempted to get value from an empty Option"))
    }

    /// The value, or `default` when empty.
    #[must_use]
    pub fn get_or_else(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Borrowing view as a std option.
    #[must_use]
    pub const fn value(&self) -> std::option::Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn into_inner(self) -> std::option::Option<T> {
        self.value
    }

    /// `f` is expected not to panic; a panic propagates to the caller.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        match self.value {
            Some(value) => Option::ok(f(value)),
            None => Option::empty(),
        }
    }

    #[must_use]
    pub fn flat_map<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        match self.value {
            Some(value) => f(value),
            None => Option::empty(),
        }
    }

    /// Run `supplier` and await its future. Success wraps the produced value
    /// (whatever it is); an error or a panic yields empty. `supplier` is
    /// called on first poll.
    pub async fn of<F, Fut, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<Cause>,
    {
        Self::collapse(capture::run_async(supplier).await)
    }

    /// Synchronous form of [`Option::of`].
    pub fn of_sync<F, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Cause>,
    {
        Self::collapse(capture::run_sync(supplier))
    }

    fn collapse(outcome: Result<T, Cause>) -> Self {
        match outcome {
            Ok(value) => Self::ok(value),
            Err(cause) => {
                tracing::debug!("supplier failed, discarding cause: {}", cause.render());
                Self::empty()
            }
        }
    }
}

impl<T> Default for Option<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(option: Option<T>) -> Self {
        option.into_inner()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;
    use crate::kind::FailureKind;

    #[test]
    fn test_ok_and_empty_are_complementary() {
        let present = Option::ok(3);
        assert!(present.is_ok());
        assert!(!present.is_empty());

        let empty = Option::<i32>::empty();
        assert!(empty.is_empty());
        assert!(!empty.is_ok());
    }

    #[test]
    fn test_try_ok_rejects_none() {
        let failure = Option::<i32>::try_ok(None).unwrap_err();
        assert!(failure.is_a(FailureKind::IllegalArgument));
        assert_eq!(Option::try_ok(Some(1)).unwrap(), Option::ok(1));
    }

    #[test]
    fn test_from_nullable() {
        assert!(Option::<&str>::from_nullable(None).is_empty());
        assert_eq!(Option::from_nullable(Some("x")).get().unwrap(), &"x");
    }

    #[test]
    fn test_falsy_values_are_present() {
        assert!(Option::ok(0).is_ok());
        assert!(Option::ok(false).is_ok());
        assert_eq!(Option::ok(String::new()).get().unwrap(), "");
    }

    #[test]
    fn test_get_on_empty_fails() {
        let failure = Option::<i32>::empty().get().unwrap_err();
        assert!(failure.is_present());
        assert_eq!(failure.message(), "attempted to get value from an empty Option");
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(Option::ok(1).get_or_else(9), 1);
        assert_eq!(Option::empty().get_or_else(9), 9);
    }

    #[test]
    fn test_map_and_flat_map() {
        assert_eq!(Option::ok(2).map(|n| n * 10), Option::ok(20));
        assert!(Option::<i32>::empty().map(|n| n * 10).is_empty());

        let half = |n: i32| {
            if n % 2 == 0 {
                Option::ok(n / 2)
            } else {
                Option::empty()
            }
        };
        assert_eq!(Option::ok(8).flat_map(half).flat_map(half), Option::ok(2));
        assert!(Option::ok(6).flat_map(half).flat_map(half).is_empty());
        assert!(Option::<i32>::empty().flat_map(half).is_empty());
    }

    #[test]
    fn test_std_conversions() {
        let option: Option<u8> = Some(4).into();
        assert_eq!(option.value(), Some(&4));
        let back: std::option::Option<u8> = option.into();
        assert_eq!(back, Some(4));
    }

    #[test]
    fn test_of_sync_collapses_errors() {
        assert_eq!(Option::of_sync(|| "12".parse::<u8>()), Option::ok(12));
        assert!(Option::of_sync(|| "nope".parse::<u8>()).is_empty());
        assert!(Option::<u8>::of_sync(|| -> Result<u8, String> { panic!("gone") }).is_empty());
    }

    #[tokio::test]
    async fn test_of_resolves_deferred_value() {
        let option = Option::of(|| async { Ok::<_, std::convert::Infallible>(0) }).await;
        assert_eq!(option, Option::ok(0));
    }

    #[tokio::test]
    async fn test_of_collapses_rejection() {
        let option = Option::<i32>::of(|| async { Err(Failure::internal("down")) }).await;
        assert!(option.is_empty());
    }
}

//! Success/failure container for Railway-Oriented Programming.
//!
//! A [`Result`] holds either a success value or a present [`Failure`],
//! never both and never neither. Transformations build new results and
//! short-circuit on the first failure, handing the original failure through
//! untouched.
//!
//! Success values are checked with [`Presence`] before they are handed out:
//! by default `0`, `false` and `""` behave like a missing value for
//! [`Result::get`], [`Result::expect`], [`Result::map`] and friends, even
//! though [`Result::is_ok`] still reports success.

use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::capture;
use crate::cause::Cause;
use crate::failure::Failure;
use crate::presence::Presence;

/// Prefix used by [`Result::get`].
pub const GET_PREFIX: &str = "Failed to get value from Result";

const NO_VALUE: &str = "no value present";

/// Either a success value or a present [`Failure`].
///
/// ```
/// use outcome_core::{Failure, Result};
///
/// fn divide(a: i32, b: i32) -> Result<i32> {
///     if b == 0 {
///         Result::failure_with_message("Division by zero is not allowed.")
///     } else {
///         Result::ok(a / b)
///     }
/// }
///
/// let chained = divide(100, 10)
///     .flat_map(|n| divide(n, 2))
///     .flat_map(|n| divide(n, 0));
///
/// assert!(chained.is_failure());
/// assert_eq!(
///     chained.failure().map(Failure::message),
///     Ok("Division by zero is not allowed.")
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Result<T> {
    state: State<T>,
}

#[derive(Debug, Clone, PartialEq)]
enum State<T> {
    Ok(T),
    Failure(Failure),
}

impl<T> Result<T> {
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self {
            state: State::Ok(value),
        }
    }

    /// A failed result.
    ///
    /// # Errors
    ///
    /// Returns an `IllegalArgument` failure when `failure` is the empty instance.
    pub fn of_failure(failure: Failure) -> std::result::Result<Self, Failure> {
        if failure.is_empty() {
            return Err(Failure::illegal_argument(
                "Result.failure requires a present Failure",
            ));
        }
        Ok(Self::held(failure))
    }

    /// A failed result carrying [`Failure::of_message`].
    #[must_use]
    pub fn failure_with_message(message: impl Into<String>) -> Self {
        Self::held(Failure::of_message(message))
    }

    /// Callers guarantee `failure` is present.
    const fn held(failure: Failure) -> Self {
        Self {
            state: State::Failure(failure),
        }
    }

    /// Run `supplier` and await its future.
    ///
    /// `supplier` is called on first poll, not when `of` is called.
    /// An error or a panic becomes a failed result whose failure wraps the
    /// original as its cause; see [`Failure::of`] for the message rules.
    pub async fn of<F, Fut, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Into<Cause>,
    {
        Self::settle(capture::run_async(supplier).await)
    }

    /// Synchronous form of [`Result::of`].
    pub fn of_sync<F, E>(supplier: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: Into<Cause>,
    {
        Self::settle(capture::run_sync(supplier))
    }

    fn settle(outcome: std::result::Result<T, Cause>) -> Self {
        match outcome {
            Ok(value) => Self::ok(value),
            Err(cause) => Self::held(Failure::captured(cause)),
        }
    }

    /// Whether no failure is held. Does not look at the value itself.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// The held failure.
    ///
    /// # Errors
    ///
    /// Returns an `IllegalArgument` failure when called on a success.
    pub fn failure(&self) -> std::result::Result<&Failure, Failure> {
        match &self.state {
            State::Failure(failure) => Ok(failure),
            State::Ok(_) => Err(Failure::illegal_argument(
                "Cannot get failure from a successful Result",
            )),
        }
    }

    /// The raw success value, without the presence check.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            State::Ok(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    pub fn if_failure<F: FnOnce(&Failure)>(&self, action: F) {
        if let State::Failure(failure) = &self.state {
            action(failure);
        }
    }

    #[must_use]
    pub fn inspect_failure<F: FnOnce(&Failure)>(self, action: F) -> Self {
        self.if_failure(action);
        self
    }

    /// Convert into a std result, without the presence check.
    ///
    /// # Errors
    ///
    /// Returns the held failure.
    pub fn into_std(self) -> std::result::Result<T, Failure> {
        match self.state {
            State::Ok(value) => Ok(value),
            State::Failure(failure) => Err(failure),
        }
    }
}

impl<T: Presence> Result<T> {
    fn present_value(&self) -> Option<&T> {
        self.value().filter(|value| value.is_present_value())
    }

    fn absent_value(prefix: &str) -> Failure {
        Failure::of_message(format!("{prefix}: {NO_VALUE}"))
    }

    /// The value, or the held failure itself (same instance).
    fn into_present(self) -> std::result::Result<T, Failure> {
        match self.state {
            State::Ok(value) if value.is_present_value() => Ok(value),
            State::Ok(_) => Err(Self::absent_value(GET_PREFIX)),
            State::Failure(failure) => Err(failure),
        }
    }

    /// The success value.
    ///
    /// # Errors
    ///
    /// Returns a failure with message `"<prefix>: <held message>"` wrapping
    /// the held failure, or `"<prefix>: no value present"` when the success
    /// value is not [`Presence::is_present_value`].
    pub fn expect(&self, prefix: &str) -> std::result::Result<&T, Failure> {
        match &self.state {
            State::Failure(failure) => Err(Failure::wrap(
                format!("{prefix}: {}", failure.message()),
                failure.clone(),
            )),
            State::Ok(_) => self
                .present_value()
                .ok_or_else(|| Self::absent_value(prefix)),
        }
    }

    /// [`Result::expect`] with [`GET_PREFIX`].
    ///
    /// # Errors
    ///
    /// See [`Result::expect`].
    pub fn get(&self) -> std::result::Result<&T, Failure> {
        self.expect(GET_PREFIX)
    }

    pub fn if_ok<F: FnOnce(&T)>(&self, action: F) {
        if let Some(value) = self.present_value() {
            action(value);
        }
    }

    #[must_use]
    pub fn inspect_ok<F: FnOnce(&T)>(self, action: F) -> Self {
        self.if_ok(action);
        self
    }

    /// Transform the success value. A panic in `f` becomes a failed result.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U> {
        match self.into_present() {
            Ok(value) => match capture::run_infallible(|| f(value)) {
                Ok(mapped) => Result::ok(mapped),
                Err(cause) => Result::held(Failure::captured(cause)),
            },
            Err(failure) => short_circuit(failure),
        }
    }

    /// Chain a computation producing its own result. A panic in `f` becomes
    /// a failed result.
    #[must_use]
    pub fn flat_map<U, F: FnOnce(T) -> Result<U>>(self, f: F) -> Result<U> {
        match self.into_present() {
            Ok(value) => {
                capture::run_infallible(|| f(value)).unwrap_or_else(|cause| {
                    Result::held(Failure::captured(cause))
                })
            }
            Err(failure) => short_circuit(failure),
        }
    }

    /// Transform the success value with a fallible function; its error
    /// becomes the cause of a new failure.
    #[must_use]
    pub fn try_map<U, E, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
        E: Into<Cause>,
    {
        match self.into_present() {
            Ok(value) => Result::settle(capture::run_sync(|| f(value))),
            Err(failure) => short_circuit(failure),
        }
    }
}

fn short_circuit<U>(failure: Failure) -> Result<U> {
    tracing::trace!("short-circuiting on {failure}");
    Result::held(failure)
}

impl<T> TryFrom<std::result::Result<T, Failure>> for Result<T> {
    type Error = Failure;

    fn try_from(result: std::result::Result<T, Failure>) -> std::result::Result<Self, Failure> {
        match result {
            Ok(value) => Ok(Self::ok(value)),
            Err(failure) => Self::of_failure(failure),
        }
    }
}

/// `Result.Ok(<json>)` or `Result.Failure(<failure>)`.
impl<T: Serialize> fmt::Display for Result<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ok(value) => {
                let json = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
                write!(f, "Result.Ok({json})")
            }
            State::Failure(failure) => write!(f, "Result.Failure({failure})"),
        }
    }
}

//! Chained failure values.
//!
//! A [`Failure`] is an immutable, cheaply clonable error value: a kind, a
//! message and an optional [`Cause`]. One process-wide empty instance means
//! "no failure"; it is recognised by identity, never by content.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, LazyLock};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::capture;
use crate::cause::Cause;
use crate::kind::{FailureKind, Reasons};

/// Message used when a failure is built without a usable one.
pub const DEFAULT_MESSAGE: &str = "An unexpected error occurred.";

/// Message used by [`Failure::from_cause`] when nothing else describes the cause.
pub const UNKNOWN_CAUSE: &str = "unknown cause";

static EMPTY: LazyLock<Failure> = LazyLock::new(|| Failure {
    inner: Arc::new(Inner {
        kind: FailureKind::Failure,
        message: String::new(),
        cause: None,
        reasons: None,
    }),
});

struct Inner {
    kind: FailureKind,
    message: String,
    cause: Option<Cause>,
    reasons: Option<Reasons>,
}

/// An error value with a message and an optional chained cause.
///
/// Clones share the same instance, so [`Failure::ptr_eq`] survives cloning.
///
/// ```
/// use outcome_core::{Failure, FailureKind};
///
/// let root = Failure::entity_not_found("user 7");
/// let outer = Failure::wrap("loading profile", root.clone());
///
/// assert!(outer.unwrap().ptr_eq(&root));
/// assert!(root.is_a(FailureKind::Failure));
/// assert_eq!(
///     outer.to_string(),
///     "Failure{message='loading profile', cause=EntityNotFound('user 7')}"
/// );
/// ```
#[derive(Clone)]
pub struct Failure {
    inner: Arc<Inner>,
}

impl Failure {
    /// The single empty instance.
    #[must_use]
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    #[must_use]
    pub fn of_message(message: impl Into<String>) -> Self {
        Self::build(FailureKind::Failure, message.into(), None, None)
    }

    /// A failure of the given kind, without a cause.
    #[must_use]
    pub fn of_kind(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::build(kind, message.into(), None, None)
    }

    /// A failure chaining `cause` under `message`.
    #[must_use]
    pub fn wrap(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::build(FailureKind::Failure, message.into(), Some(cause.into()), None)
    }

    /// Turn an arbitrary cause into a failure.
    ///
    /// A present failure is returned as-is rather than wrapped again.
    /// Otherwise the message is, in order: `message`, the cause's error
    /// message, the cause in string form, [`UNKNOWN_CAUSE`].
    #[must_use]
    pub fn from_cause(cause: impl Into<Cause>, message: Option<&str>) -> Self {
        let cause = cause.into();
        if let Some(failure) = cause.as_failure().filter(|failure| failure.is_present()) {
            return failure.clone();
        }
        let message = message
            .filter(|message| !message.trim().is_empty())
            .map(str::to_string)
            .or_else(|| cause.error_message())
            .or_else(|| match &cause {
                Cause::Opaque => None,
                other => Some(other.to_string()).filter(|text| !text.trim().is_empty()),
            })
            .unwrap_or_else(|| UNKNOWN_CAUSE.to_string());
        Self::build(FailureKind::Failure, message, Some(cause), None)
    }

    pub(crate) fn with_reasons(message: String, reasons: Reasons) -> Self {
        Self::build(FailureKind::InvalidRequest, message, None, Some(reasons))
    }

    /// Failure recording a captured error or panic; the cause is kept as-is.
    pub(crate) fn captured(cause: Cause) -> Self {
        let message = cause
            .message()
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
        let failure = Self::build(FailureKind::Failure, message, Some(cause), None);
        tracing::debug!(kind = %failure.kind(), "captured failure: {}", failure.message());
        failure
    }

    fn build(
        kind: FailureKind,
        message: String,
        cause: Option<Cause>,
        reasons: Option<Reasons>,
    ) -> Self {
        let message = if message.trim().is_empty() {
            DEFAULT_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            inner: Arc::new(Inner {
                kind,
                message,
                cause,
                reasons,
            }),
        }
    }

    /// Run `thunk` and await the future it returns.
    ///
    /// Like any future, nothing runs until it is first polled; `thunk` is
    /// called then. Resolves to the empty failure on success. An error or a panic
    /// becomes the cause of a new present failure whose message is the
    /// error's message, the thrown string, or [`DEFAULT_MESSAGE`].
    pub async fn of<F, Fut, T, E>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<Cause>,
    {
        match capture::run_async(thunk).await {
            Ok(_) => Self::empty(),
            Err(cause) => Self::captured(cause),
        }
    }

    /// Synchronous form of [`Failure::of`].
    pub fn of_sync<F, T, E>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Cause>,
    {
        match capture::run_sync(thunk) {
            Ok(_) => Self::empty(),
            Err(cause) => Self::captured(cause),
        }
    }

    /// Whether `self` and `other` are the same instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ptr_eq(&EMPTY)
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.inner.kind
    }

    /// The message; blank only for the empty instance.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.inner.cause.as_ref()
    }

    /// Per-field reasons, set only on [`FailureKind::InvalidRequest`] failures.
    #[must_use]
    pub fn reasons(&self) -> Option<&Reasons> {
        self.inner.reasons.as_ref()
    }

    /// The chained failure one level down, or `self` when there is none.
    #[must_use]
    pub fn unwrap(&self) -> Self {
        self.cause()
            .and_then(Cause::as_failure)
            .filter(|cause| cause.is_present())
            .map_or_else(|| self.clone(), Clone::clone)
    }

    /// Whether this is a present failure whose kind is or specializes `kind`.
    #[must_use]
    pub fn is_a(&self, kind: FailureKind) -> bool {
        self.is_present() && self.kind().is_a(kind)
    }

    pub fn if_present<F: FnOnce(&Self)>(&self, action: F) {
        if self.is_present() {
            action(self);
        }
    }

    pub fn if_empty<F: FnOnce()>(&self, action: F) {
        if self.is_empty() {
            action();
        }
    }

    /// Like [`Failure::if_present`], returning `self` for chaining.
    #[must_use]
    pub fn inspect_present<F: FnOnce(&Self)>(self, action: F) -> Self {
        self.if_present(action);
        self
    }

    /// Like [`Failure::if_empty`], returning `self` for chaining.
    #[must_use]
    pub fn inspect_empty<F: FnOnce()>(self, action: F) -> Self {
        self.if_empty(action);
        self
    }

    /// `Err(self)` when present, `Ok(())` when empty.
    ///
    /// # Errors
    ///
    /// Returns this failure when it is present.
    pub fn or_err(&self) -> Result<(), Self> {
        if self.is_present() {
            Err(self.clone())
        } else {
            Ok(())
        }
    }
}

impl Default for Failure {
    fn default() -> Self {
        Self::empty()
    }
}

/// Same instance, or both present with equal messages and equal causes.
impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.message() == other.message() && self.cause() == other.cause()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Failure.EMPTY");
        }
        write!(f, "{}{{message='{}'", self.kind(), self.message())?;
        if let Some(cause) = self.cause() {
            write!(f, ", cause={}", cause.render())?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Failure.EMPTY");
        }
        let mut debug = f.debug_struct("Failure");
        debug
            .field("kind", &self.kind())
            .field("message", &self.message());
        if let Some(cause) = self.cause() {
            debug.field("cause", cause);
        }
        if let Some(reasons) = self.reasons() {
            debug.field("reasons", reasons);
        }
        debug.finish()
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause().map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// The empty instance serializes as `null`.
impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_none();
        }
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind())?;
        map.serialize_entry("message", self.message())?;
        if let Some(cause) = self.cause() {
            map.serialize_entry("cause", &cause.render())?;
        }
        if let Some(reasons) = self.reasons() {
            map.serialize_entry("reasons", reasons)?;
        }
        map.end()
    }
}

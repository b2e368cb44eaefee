//! Free functions building failures with input validation.

use crate::cause::Cause;
use crate::failure::{DEFAULT_MESSAGE, Failure};

/// The empty failure.
#[must_use]
pub fn empty_failure() -> Failure {
    Failure::empty()
}

/// A present failure with `message`.
///
/// # Errors
///
/// Returns an `IllegalArgument` failure when `message` is absent or blank.
pub fn failure_with_message(message: Option<&str>) -> Result<Failure, Failure> {
    message
        .filter(|message| !message.trim().is_empty())
        .map(Failure::of_message)
        .ok_or_else(|| Failure::illegal_argument("Failure message must not be blank"))
}

/// A present failure wrapping `cause`.
///
/// The message is `message` when non-blank, else the cause's error message,
/// else [`DEFAULT_MESSAGE`].
///
/// ```
/// use outcome_core::factory::wrap_failure;
///
/// assert_eq!(wrap_failure(None, None).message(), "An unexpected error occurred.");
/// ```
#[must_use]
pub fn wrap_failure(message: Option<&str>, cause: Option<Cause>) -> Failure {
    let resolved = message
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
        .or_else(|| cause.as_ref().and_then(Cause::error_message))
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    match cause {
        Some(cause) => Failure::wrap(resolved, cause),
        None => Failure::of_message(resolved),
    }
}

/// Wrap an existing failure so that [`Failure::unwrap`] returns it.
///
/// # Errors
///
/// Returns an `IllegalArgument` failure when `original` is absent.
pub fn wrap_existing_failure(
    message: Option<&str>,
    original: Option<Failure>,
) -> Result<Failure, Failure> {
    let original = original.ok_or_else(|| {
        Failure::illegal_argument("Cannot wrap an absent Failure")
    })?;
    Ok(wrap_failure(message, Some(Cause::Failure(original))))
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
    fn test_empty_failure() {
        assert!(empty_failure().is_empty());
    }

    #[test]
    fn test_failure_with_message_validates() {
        assert_eq!(failure_with_message(Some("bad")).unwrap().message(), "bad");
        for input in [None, Some(""), Some("   \t")] {
            let misuse = failure_with_message(input).unwrap_err();
            assert!(misuse.is_a(FailureKind::IllegalArgument), "{input:?}");
        }
    }

    #[test]
    fn test_wrap_failure_message_resolution() {
        assert_eq!(wrap_failure(None, None).message(), DEFAULT_MESSAGE);
        assert!(wrap_failure(None, None).cause().is_none());

        let io = Cause::error(std::io::Error::other("socket closed"));
        assert_eq!(wrap_failure(None, Some(io.clone())).message(), "socket closed");
        assert_eq!(wrap_failure(Some("  "), Some(io.clone())).message(), "socket closed");
        assert_eq!(wrap_failure(Some("fetching"), Some(io)).message(), "fetching");

        let text = wrap_failure(None, Some(Cause::from("not an error")));
        assert_eq!(text.message(), DEFAULT_MESSAGE);
        assert_eq!(text.cause(), Some(&Cause::from("not an error")));
    }

    #[test]
    fn test_wrap_existing_failure_chains() {
        let original = Failure::api("upstream 503");
        let wrapped = wrap_existing_failure(Some("syncing"), Some(original.clone())).unwrap();
        assert_eq!(wrapped.message(), "syncing");
        assert!(wrapped.unwrap().ptr_eq(&original));

        let inherited = wrap_existing_failure(None, Some(original)).unwrap();
        assert_eq!(inherited.message(), "upstream 503");
    }

    #[test]
    fn test_wrap_existing_failure_rejects_absent() {
        let misuse = wrap_existing_failure(Some("x"), None).unwrap_err();
        assert!(misuse.is_a(FailureKind::IllegalArgument));
    }
}

//! Runs thunks, turning returned errors and panics into a [`Cause`].

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;

use crate::cause::Cause;

/// Run a synchronous thunk.
pub(crate) fn run_sync<F, T, E>(thunk: F) -> Result<T, Cause>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Cause>,
{
    match panic::catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(outcome) => outcome.map_err(Into::into),
        Err(payload) => Err(Cause::from_panic(payload)),
    }
}

/// Run a thunk producing a future, then await the future.
///
/// A panic before the future exists is caught in the same call; a panic
/// while polling is caught when the future settles.
pub(crate) async fn run_async<F, Fut, T, E>(thunk: F) -> Result<T, Cause>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<Cause>,
{
    let future = panic::catch_unwind(AssertUnwindSafe(thunk)).map_err(Cause::from_panic)?;
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(outcome) => outcome.map_err(Into::into),
        Err(payload) => Err(Cause::from_panic(payload)),
    }
}

/// Run an infallible closure, catching panics only.
pub(crate) fn run_infallible<F, T>(f: F) -> Result<T, Cause>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(Cause::from_panic)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;

    #[test]
    fn test_run_sync_success() {
        let outcome = run_sync(|| Ok::<_, String>(7));
        assert_eq!(outcome.unwrap(), 7);
    }

    #[test]
    fn test_run_sync_error() {
        let outcome = run_sync(|| Err::<i32, _>("bad input"));
        assert_eq!(outcome.unwrap_err(), Cause::from("bad input"));
    }

    #[test]
    fn test_run_sync_panic() {
        let outcome = run_sync::<_, i32, String>(|| panic!("exploded"));
        assert_eq!(outcome.unwrap_err(), Cause::from("exploded"));
    }

    #[test]
    fn test_run_infallible_panic_with_formatted_message() {
        let outcome = run_infallible(|| -> i32 { panic!("value {} too large", 9) });
        assert_eq!(outcome.unwrap_err(), Cause::from("value 9 too large"));
    }

    #[tokio::test]
    async fn test_run_async_settles_future() {
        let outcome = run_async(|| async { Ok::<_, String>("done") }).await;
        assert_eq!(outcome.unwrap(), "done");
    }

    #[tokio::test]
    async fn test_run_async_rejected_future() {
        let outcome = run_async(|| async { Err::<(), _>("rejected") }).await;
        assert_eq!(outcome.unwrap_err(), Cause::from("rejected"));
    }

    #[tokio::test]
    async fn test_run_async_panic_before_future() {
        let outcome = run_async(|| -> std::future::Ready<Result<(), String>> {
            panic!("sync part")
        })
        .await;
        assert_eq!(outcome.unwrap_err(), Cause::from("sync part"));
    }

    #[tokio::test]
    async fn test_run_async_panic_while_polling() {
        let outcome = run_async(|| async {
            tokio::task::yield_now().await;
            if true {
                panic!("async part");
            }
            Ok::<(), String>(())
        })
        .await;
        assert_eq!(outcome.unwrap_err(), Cause::from("async part"));
    }
}

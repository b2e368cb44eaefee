//! Three-way outcome for actions that may not have run yet.

use crate::failure::Failure;

/// Not yet attempted, succeeded with a value, or failed.
///
/// Unlike [`Result`](crate::Result), an action state can say "nothing
/// happened yet". There are no transformations; inspect it with
/// [`ActionState::view`].
///
/// ```
/// use outcome_core::{ActionState, ActionStateView, Failure};
///
/// let state = ActionState::<i32>::failure_state(Failure::illegal_state("busy"))?;
/// let label = match state.view() {
///     ActionStateView::Init => "idle",
///     ActionStateView::Ok(_) => "done",
///     ActionStateView::Failure(_) => "failed",
/// };
/// assert_eq!(label, "failed");
/// # Ok::<(), Failure>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState<T> {
    state: State<T>,
}

#[derive(Debug, Clone, PartialEq)]
enum State<T> {
    Init,
    Ok(T),
    Failure(Failure),
}

/// Borrowed view of an [`ActionState`] for matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionStateView<'a, T> {
    Init,
    Ok(&'a T),
    Failure(&'a Failure),
}

impl<T> ActionState<T> {
    #[must_use]
    pub const fn init_state() -> Self {
        Self { state: State::Init }
    }

    /// Succeeded with `value`. No presence check is applied.
    #[must_use]
    pub const fn ok_state(value: T) -> Self {
        Self {
            state: State::Ok(value),
        }
    }

    /// Failed with `failure`.
    ///
    /// # Errors
    ///
    /// Returns an `IllegalArgument` failure when `failure` is the empty instance.
    pub fn failure_state(failure: Failure) -> Result<Self, Failure> {
        if failure.is_empty() {
            return Err(Failure::illegal_argument(
                "ActionState failure requires a present Failure",
            ));
        }
        Ok(Self {
            state: State::Failure(failure),
        })
    }

    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.state, State::Init)
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            State::Ok(value) => Some(value),
            State::Init | State::Failure(_) => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match &self.state {
            State::Failure(failure) => Some(failure),
            State::Init | State::Ok(_) => None,
        }
    }

    #[must_use]
    pub const fn view(&self) -> ActionStateView<'_, T> {
        match &self.state {
            State::Init => ActionStateView::Init,
            State::Ok(value) => ActionStateView::Ok(value),
            State::Failure(failure) => ActionStateView::Failure(failure),
        }
    }
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self::init_state()
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
    fn test_init_state() {
        let state = ActionState::<i32>::init_state();
        assert!(state.is_init());
        assert!(!state.is_ok());
        assert!(!state.is_failure());
        assert_eq!(state.view(), ActionStateView::Init);
        assert_eq!(ActionState::<i32>::default(), state);
    }

    #[test]
    fn test_ok_state_accepts_any_value() {
        let state = ActionState::ok_state(0);
        assert!(state.is_ok());
        assert_eq!(state.value(), Some(&0));
        assert!(state.failure().is_none());
        assert!(ActionState::ok_state(()).is_ok());
    }

    #[test]
    fn test_failure_state() {
        let failure = Failure::operation_not_allowed("read-only");
        let state = ActionState::<String>::failure_state(failure.clone()).unwrap();
        assert!(state.is_failure());
        assert!(state.failure().unwrap().ptr_eq(&failure));
        assert!(matches!(state.view(), ActionStateView::Failure(f) if f.ptr_eq(&failure)));
    }

    #[test]
    fn test_failure_state_rejects_empty() {
        let misuse = ActionState::<()>::failure_state(Failure::empty()).unwrap_err();
        assert!(misuse.is_a(FailureKind::IllegalArgument));
    }
}

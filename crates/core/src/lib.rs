//! # outcome-core
//!
//! Composable value types for explicit outcome handling:
//!
//! - [`Failure`]: chained error value with a closed [`FailureKind`] taxonomy
//!   and a single empty instance meaning "no failure".
//! - [`Result`]: a success value or a present [`Failure`].
//! - [`Option`]: a present value or nothing.
//! - [`Pair`]: an immutable two-element tuple.
//! - [`ActionState`]: not attempted, succeeded, or failed.
//!
//! Expected outcomes are values. Misusing the API (for example asking a
//! successful [`Result`] for its failure) returns an `IllegalArgument`
//! [`Failure`] through a std `Result`; nothing in this crate panics.
//!
//! `Option` and `Result` share their names with the std prelude types.
//! Import them by path, or alias them:
//!
//! ```
//! use outcome_core::{Failure, Result as Outcome};
//!
//! let parsed: Outcome<i32> = Outcome::of_sync(|| "42".parse::<i32>());
//! assert_eq!(parsed.get(), Ok(&42));
//! # let _ = Failure::empty();
//! ```
//!
//! ## Zero Panic Guarantee
//!
//! This crate enforces:
//! - `#![deny(clippy::unwrap_used)]`
//! - `#![deny(clippy::expect_used)]`
//! - `#![deny(clippy::panic)]`

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod action_state;
mod capture;
pub mod cause;
pub mod factory;
pub mod failure;
pub mod kind;
pub mod option;
pub mod pair;
pub mod presence;
pub mod result;

pub use action_state::{ActionState, ActionStateView};
pub use cause::Cause;
pub use failure::{DEFAULT_MESSAGE, Failure, UNKNOWN_CAUSE};
pub use kind::{FailureCategory, FailureKind, Reasons};
pub use option::Option;
pub use pair::Pair;
pub use presence::Presence;
pub use result::{GET_PREFIX, Result};

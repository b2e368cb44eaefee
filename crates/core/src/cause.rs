//! What a [`Failure`] can wrap.

use std::any::Any;
use std::convert::Infallible;
use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::failure::Failure;

/// The cause chained under a [`Failure`].
#[derive(Debug, Clone, Error)]
pub enum Cause {
    /// Another failure; makes [`Failure::unwrap`] follow the chain.
    #[error(transparent)]
    Failure(Failure),

    /// Any error value. `name` is the short type name of the original error.
    #[error("{error}")]
    Error {
        name: String,
        error: Arc<dyn StdError + Send + Sync>,
    },

    /// A thrown value that is not an error, in string form.
    #[error("{0}")]
    Value(String),

    /// A thrown value with no string form.
    #[error("<opaque>")]
    Opaque,
}

impl Cause {
    /// Wrap an arbitrary error.
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error {
            name: short_type_name::<E>().to_string(),
            error: Arc::new(error),
        }
    }

    /// Build a cause from a caught panic payload.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Failure>() {
            Ok(failure) => return Self::Failure(*failure),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::Value(*message),
            Err(payload) => payload,
        };
        payload
            .downcast_ref::<&'static str>()
            .map_or(Self::Opaque, |message| Self::Value((*message).to_string()))
    }

    /// The chained failure, if this cause is one.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Failure(failure) => Some(failure),
            _ => None,
        }
    }

    /// Whether this cause is error-like (a failure or an error value).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_) | Self::Error { .. })
    }

    /// Non-blank message carried by an error-like cause.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failure(failure) => Some(failure.message().to_string()),
            Self::Error { error, .. } => Some(error.to_string()),
            Self::Value(_) | Self::Opaque => None,
        }
        .filter(|message| !message.trim().is_empty())
    }

    /// Non-blank message of any cause: an error's message or a thrown string.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Value(value) if !value.trim().is_empty() => Some(value.clone()),
            _ => self.error_message(),
        }
    }

    /// Compact form used inside a failure's display.
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Failure(failure) if failure.is_empty() => failure.to_string(),
            Self::Failure(failure) => format!("{}('{}')", failure.kind(), failure.message()),
            Self::Error { name, error } => format!("{name}('{error}')"),
            Self::Value(value) => format!("'{value}'"),
            Self::Opaque => "<opaque>".to_string(),
        }
    }
}

/// Failure causes compare with [`Failure`] equality, error causes by
/// reference, thrown strings by content. An opaque cause equals nothing,
/// not even another opaque cause, since the original payloads are gone.
impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Failure(a), Self::Failure(b)) => a == b,
            (Self::Error { error: a, .. }, Self::Error { error: b, .. }) => Arc::ptr_eq(a, b),
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl From<Failure> for Cause {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl From<String> for Cause {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Cause {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<anyhow::Error> for Cause {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<Failure>() {
            Ok(failure) => Self::Failure(failure),
            Err(error) => Self::Error {
                name: "Error".to_string(),
                error: Arc::from(Box::<dyn StdError + Send + Sync>::from(error)),
            },
        }
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Cause {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<Failure>() {
            Ok(failure) => Self::Failure(*failure),
            Err(error) => Self::Error {
                name: "Error".to_string(),
                error: Arc::from(error),
            },
        }
    }
}

impl From<std::io::Error> for Cause {
    fn from(error: std::io::Error) -> Self {
        Self::error(error)
    }
}

impl From<std::num::ParseIntError> for Cause {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::error(error)
    }
}

impl From<std::num::ParseFloatError> for Cause {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::error(error)
    }
}

impl From<serde_json::Error> for Cause {
    fn from(error: serde_json::Error) -> Self {
        Self::error(error)
    }
}

impl From<Infallible> for Cause {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

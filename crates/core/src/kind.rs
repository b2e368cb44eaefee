//! Failure taxonomy.
//!
//! A closed set of kinds, each a specialization of the base [`FailureKind::Failure`].
//! Kinds carry no data of their own; the request-validation kind additionally
//! stores a [`Reasons`] payload on the [`Failure`] that carries it.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::failure::Failure;

/// Discriminant identifying which taxonomy member a [`Failure`] belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum FailureKind {
    /// Base kind. Every other kind is a `Failure`.
    Failure,
    ApiFailure,
    AuthFailure,
    EntityAlreadyExists,
    EntityNotFound,
    EntityValidationFailed,
    IllegalArgument,
    IllegalState,
    InternalFailure,
    InvalidRequest,
    OperationNotAllowed,
}

/// Coarse grouping of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum FailureCategory {
    /// The caller supplied invalid or malformed input.
    InputValidation,
    /// The operation is invalid given current state or policy.
    StatePermission,
    /// Business-entity-level outcome.
    DomainEntity,
    /// External dependency or system-level failure.
    Infrastructure,
    /// Uncategorized base failure.
    General,
}

impl FailureKind {
    /// The kind this one directly specializes, if any.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Failure => None,
            _ => Some(Self::Failure),
        }
    }

    /// Whether `self` is `other` or specializes it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        std::iter::successors(Some(self), |kind| kind.parent()).any(|kind| kind == other)
    }

    #[must_use]
    pub const fn category(self) -> FailureCategory {
        match self {
            Self::IllegalArgument | Self::InvalidRequest => FailureCategory::InputValidation,
            Self::IllegalState | Self::OperationNotAllowed => FailureCategory::StatePermission,
            Self::EntityNotFound | Self::EntityAlreadyExists | Self::EntityValidationFailed => {
                FailureCategory::DomainEntity
            }
            Self::ApiFailure | Self::AuthFailure | Self::InternalFailure => {
                FailureCategory::Infrastructure
            }
            Self::Failure => FailureCategory::General,
        }
    }
}

/// Field name to reasons mapping carried by [`FailureKind::InvalidRequest`].
///
/// Entries keep the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reasons(Vec<(String, Vec<String>)>);

impl Reasons {
    /// Iterate over `(field, reasons)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(key, reasons)| (key.as_str(), reasons.as_slice()))
    }

    /// Reasons recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, reasons)| reasons.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, I, R> FromIterator<(K, I)> for Reasons
where
    K: Into<String>,
    I: IntoIterator<Item = R>,
    R: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, reasons)| (key.into(), reasons.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

/// Renders as `{a: [r1, r2]; b: [r3]}`.
impl fmt::Display for Reasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .0
            .iter()
            .map(|(key, reasons)| format!("{key}: [{}]", reasons.join(", ")))
            .join("; ");
        write!(f, "{{{entries}}}")
    }
}

impl Failure {
    /// Failure of an external API dependency.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::ApiFailure, message)
    }

    /// Authentication or authorization failure.
    #[must_use]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::AuthFailure, message)
    }

    #[must_use]
    pub fn entity_already_exists(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::EntityAlreadyExists, message)
    }

    #[must_use]
    pub fn entity_not_found(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::EntityNotFound, message)
    }

    #[must_use]
    pub fn entity_validation_failed(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::EntityValidationFailed, message)
    }

    /// Misuse of an API by its caller.
    #[must_use]
    pub fn illegal_argument(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::IllegalArgument, message)
    }

    #[must_use]
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::IllegalState, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::InternalFailure, message)
    }

    #[must_use]
    pub fn operation_not_allowed(message: impl Into<String>) -> Self {
        Self::of_kind(FailureKind::OperationNotAllowed, message)
    }

    /// Invalid request with a single reason for a single field.
    ///
    /// ```
    /// use outcome_core::Failure;
    ///
    /// let failure = Failure::invalid_request("email", "required");
    /// assert_eq!(
    ///     failure.message(),
    ///     "Invalid request for key email with reasons required"
    /// );
    /// ```
    #[must_use]
    pub fn invalid_request(key: impl Into<String>, reason: impl Into<String>) -> Self {
        let key = key.into();
        let reason = reason.into();
        let message = format!("Invalid request for key {key} with reasons {reason}");
        Self::with_reasons(message, Reasons(vec![(key, vec![reason])]))
    }

    /// Invalid request with a mapping of field name to reasons.
    ///
    /// ```
    /// use outcome_core::Failure;
    ///
    /// let failure = Failure::invalid_request_with_reasons([("a", ["r1", "r2"])]);
    /// assert_eq!(failure.message(), "Invalid request with reasons {a: [r1, r2]}");
    /// ```
    #[must_use]
    pub fn invalid_request_with_reasons<K, I, R>(reasons: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        let reasons: Reasons = reasons.into_iter().collect();
        let message = format!("Invalid request with reasons {reasons}");
        Self::with_reasons(message, reasons)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_kind_is_a_failure() {
        for kind in FailureKind::iter() {
            assert!(kind.is_a(FailureKind::Failure), "{kind} should be a Failure");
            assert!(kind.is_a(kind));
        }
    }

    #[test]
    fn test_sibling_kinds_are_unrelated() {
        assert!(!FailureKind::EntityNotFound.is_a(FailureKind::EntityAlreadyExists));
        assert!(!FailureKind::Failure.is_a(FailureKind::IllegalArgument));
    }

    #[test]
    fn test_kind_names_round_trip_through_strings() {
        for kind in FailureKind::iter() {
            assert_eq!(FailureKind::from_str(kind.as_ref()).unwrap(), kind);
        }
        assert_eq!(FailureKind::ApiFailure.to_string(), "ApiFailure");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            FailureKind::InvalidRequest.category(),
            FailureCategory::InputValidation
        );
        assert_eq!(
            FailureKind::OperationNotAllowed.category(),
            FailureCategory::StatePermission
        );
        assert_eq!(
            FailureKind::EntityValidationFailed.category(),
            FailureCategory::DomainEntity
        );
        assert_eq!(
            FailureKind::AuthFailure.category(),
            FailureCategory::Infrastructure
        );
    }

    #[test]
    fn test_taxonomy_constructors_pass_message_through() {
        let failure = Failure::entity_not_found("user 42 not found");
        assert_eq!(failure.kind(), FailureKind::EntityNotFound);
        assert_eq!(failure.message(), "user 42 not found");
        assert!(failure.is_a(FailureKind::Failure));
        assert!(failure.cause().is_none());
    }

    #[test]
    fn test_invalid_request_single_reason() {
        let failure = Failure::invalid_request("field", "required");
        assert!(failure.message().contains("field"));
        assert!(failure.message().contains("required"));

        let reasons = failure.reasons().unwrap();
        assert_eq!(reasons.len(), 1);
        assert_eq!(reasons.get("field").unwrap(), ["required".to_string()]);
    }

    #[test]
    fn test_invalid_request_keeps_mapping_order() {
        let failure = Failure::invalid_request_with_reasons(vec![
            ("name", vec!["too short"]),
            ("age", vec!["negative", "not a number"]),
        ]);
        assert_eq!(
            failure.message(),
            "Invalid request with reasons {name: [too short]; age: [negative, not a number]}"
        );
        let keys: Vec<_> = failure.reasons().unwrap().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "age"]);
    }

    #[test]
    fn test_reasons_only_on_invalid_request() {
        assert!(Failure::illegal_state("closed").reasons().is_none());
    }
}

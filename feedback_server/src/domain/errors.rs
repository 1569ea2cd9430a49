use std::fmt::Display;

use thiserror::Error;

use crate::domain::violations::FieldViolations;

// Failure categories, listed in the order the translator matches them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    InvalidArgument,
    ValidationFailed,
    Unclassified,
}

// Domain-level failures raised while handling a request.
//
// Messages on the first three variants are shown to callers, so they must be
// safe for external disclosure. Unclassified causes are only ever logged.
#[derive(Debug, Error)]
pub enum Failure {
    // A named resource lookup came back empty.
    #[error("{0}")]
    NotFound(String),
    // The caller supplied a semantically invalid value.
    #[error("{0}")]
    InvalidArgument(String),
    // One or more request fields failed validation.
    #[error("{0}")]
    ValidationFailed(FieldViolations),
    #[error(transparent)]
    Unclassified(anyhow::Error),
}

impl Failure {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    // Lookup miss on a keyed resource, e.g. "Feedback not found with id: 7".
    pub fn resource_not_found(resource: &str, field: &str, value: impl Display) -> Self {
        Self::NotFound(format!("{resource} not found with {field}: {value}"))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    // Wraps any error as unclassified without inspecting it.
    pub fn unclassified<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Unclassified(error.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) => FailureKind::NotFound,
            Self::InvalidArgument(_) => FailureKind::InvalidArgument,
            Self::ValidationFailed(_) => FailureKind::ValidationFailed,
            Self::Unclassified(_) => FailureKind::Unclassified,
        }
    }
}

// Type-erased errors keep their classification when they wrap a `Failure`
// (context layers included); anything else is unclassified.
impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<Failure>() {
            Ok(failure) => failure,
            Err(error) => Self::Unclassified(error),
        }
    }
}

use tracing::error;

use crate::domain::errors::{Failure, FailureKind};
use crate::domain::ports::Clock;
use crate::interface_adapters::protocol::{ErrorDetail, ErrorResponse};

pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// Fixed caller-facing text for unclassified failures; the real cause is only logged.
pub const UNEXPECTED_ERROR_DETAIL: &str = "An unexpected error occurred. Please try again later.";

// Classified failure ready for the HTTP layer.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslatedFailure {
    pub kind: FailureKind,
    pub body: ErrorResponse,
}

// Failure translation use case with an injected clock.
pub struct TranslateFailureUseCase<C> {
    pub clock: C,
}

impl<C> TranslateFailureUseCase<C>
where
    C: Clock,
{
    pub fn execute(&self, failure: &Failure, path: &str) -> TranslatedFailure {
        let (message, detail) = match failure {
            Failure::NotFound(text) => {
                error!(%path, error = %text, "resource not found");
                (NOT_FOUND_MESSAGE, ErrorDetail::Error(text.clone()))
            }
            Failure::InvalidArgument(text) => {
                error!(%path, error = %text, "invalid argument");
                (INVALID_REQUEST_MESSAGE, ErrorDetail::Error(text.clone()))
            }
            Failure::ValidationFailed(violations) => {
                error!(%path, error = %violations, "validation failed");
                (
                    VALIDATION_FAILED_MESSAGE,
                    ErrorDetail::Errors(violations.first_per_field()),
                )
            }
            Failure::Unclassified(cause) => {
                // Debug output of the cause includes the whole chain.
                error!(%path, error = %cause, detail = ?cause, "unexpected error occurred");
                (
                    INTERNAL_ERROR_MESSAGE,
                    ErrorDetail::Error(UNEXPECTED_ERROR_DETAIL.to_string()),
                )
            }
        };

        TranslatedFailure {
            kind: failure.kind(),
            body: ErrorResponse::new(message, detail, self.clock.now(), path),
        }
    }
}

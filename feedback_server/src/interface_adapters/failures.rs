use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::domain::errors::{Failure, FailureKind};
use crate::use_cases::translate_failure::TranslatedFailure;

// Marker carried on a handler response until the middleware translates it.
#[derive(Clone, Debug)]
pub struct RaisedFailure(pub Arc<Failure>);

// Handlers return `Failure` directly; the real status and body are produced by
// `translate_failures`, which needs the request descriptor and the clock.
impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response
            .extensions_mut()
            .insert(RaisedFailure(Arc::new(self)));
        response
    }
}

impl IntoResponse for TranslatedFailure {
    fn into_response(self) -> Response {
        (status_for(self.kind), Json(self.body)).into_response()
    }
}

// Malformed or mistyped JSON bodies are the caller's fault.
impl From<JsonRejection> for Failure {
    fn from(rejection: JsonRejection) -> Self {
        Failure::invalid_argument(rejection.body_text())
    }
}

pub fn status_for(kind: FailureKind) -> StatusCode {
    match kind {
        FailureKind::NotFound => StatusCode::NOT_FOUND,
        FailureKind::InvalidArgument | FailureKind::ValidationFailed => StatusCode::BAD_REQUEST,
        FailureKind::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// Opaque request descriptor shown in error bodies: the path only, no query.
pub fn request_descriptor(uri: &Uri) -> String {
    format!("uri={}", uri.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_kind_is_mapped_then_status_matches_classification_table() {
        assert_eq!(status_for(FailureKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(FailureKind::InvalidArgument), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(FailureKind::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(FailureKind::Unclassified),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn when_uri_has_query_then_descriptor_keeps_only_the_path() {
        let uri: Uri = "/api/feedbacks?status=new&page=2"
            .parse()
            .expect("expected uri to parse");

        assert_eq!(request_descriptor(&uri), "uri=/api/feedbacks");
    }

    #[test]
    fn when_failure_is_returned_from_handler_then_response_carries_it_for_translation() {
        let response = Failure::not_found("missing").into_response();

        let raised = response
            .extensions()
            .get::<RaisedFailure>()
            .expect("expected raised failure marker");
        assert_eq!(raised.0.kind(), FailureKind::NotFound);
    }
}

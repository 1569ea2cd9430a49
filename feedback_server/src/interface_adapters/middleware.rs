use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

use crate::domain::errors::Failure;
use crate::interface_adapters::failures::{RaisedFailure, request_descriptor};
use crate::interface_adapters::state::AppState;
use crate::use_cases::translate_failure::TranslateFailureUseCase;

// Upper bound on a framework error body read back for classification.
const BARE_ERROR_BODY_LIMIT: usize = 64 * 1024;

// Replaces any response that carries a raised failure with the translated
// error envelope. Handler panics are translated as unclassified failures, and
// error responses the framework produced on its own are classified from their
// status and text.
pub async fn translate_failures(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // Capture the descriptor up front; the request is consumed by the handler.
    let path = request_descriptor(request.uri());
    let method = request.method().clone();
    let use_case = TranslateFailureUseCase {
        clock: state.clock.clone(),
    };

    let response = match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let failure = Failure::unclassified(anyhow::anyhow!(
                "handler panicked: {}",
                panic_message(payload.as_ref())
            ));
            return use_case.execute(&failure, &path).into_response();
        }
    };

    if let Some(RaisedFailure(failure)) = response.extensions().get::<RaisedFailure>().cloned() {
        return use_case.execute(&failure, &path).into_response();
    }

    if is_bare_error(&response) {
        let failure = classify_bare_error(&method, response).await;
        return use_case.execute(&failure, &path).into_response();
    }

    response
}

// An error status without a JSON body: extractor rejections, method
// mismatches and similar responses built by the router rather than a handler.
fn is_bare_error(response: &Response) -> bool {
    let status = response.status();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    (status.is_client_error() || status.is_server_error()) && !is_json
}

// Extractor rejections are the caller's fault and keep their text. A method
// mismatch or a server-side error is unclassified.
async fn classify_bare_error(method: &Method, response: Response) -> Failure {
    let status = response.status();
    let text = match to_bytes(response.into_body(), BARE_ERROR_BODY_LIMIT).await {
        Ok(bytes) if !bytes.is_empty() => String::from_utf8_lossy(&bytes).into_owned(),
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };

    match status {
        StatusCode::NOT_FOUND => Failure::not_found(text),
        StatusCode::METHOD_NOT_ALLOWED => Failure::unclassified(anyhow::anyhow!(
            "{method} rejected by router with {status}: {text}"
        )),
        _ if status.is_client_error() => Failure::invalid_argument(text),
        _ => Failure::unclassified(anyhow::anyhow!(
            "{method} answered with bare {status}: {text}"
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

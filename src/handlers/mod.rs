use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub mod root;
pub mod webhook;

pub use root::{handle_not_found, handle_root};
pub use webhook::handle_webhook;

/// Plain-text error response whose body is the status reason and a newline
pub fn status_error(status: StatusCode) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{}\n", status.canonical_reason().unwrap_or_default()),
    )
        .into_response()
}

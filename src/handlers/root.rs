use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

pub const LANDING_PAGE: &str = "<html><head><title>Github hometest API</title></head><body><h1>Github hometest API</h1></body></html>";

/// Static landing page served on `/`
pub async fn handle_root() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Fallback for every path without a route
pub async fn handle_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Path not found")
}

//! Dashboard page handler.

use axum::{
    http::{header, StatusCode},
    response::Response,
};

/// The single-page dashboard, compiled into the binary.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
pub async fn index_handler() -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(INDEX_HTML.into())
        .unwrap()
}

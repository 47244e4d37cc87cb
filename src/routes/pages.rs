//! Landing page and static PDF files.

use crate::error::AppError;
use axum::handler::HandlerWithoutStateExt;
use axum::http::header::CONTENT_DISPOSITION;
use axum::http::{HeaderValue, Uri};
use axum::response::Html;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeader;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn pdf_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("pdf {}", uri.path()))
}

/// Files under `dir`, shown inline by the browser. `ServeDir` confines
/// lookups to `dir`; anything missing or outside it is `NOT_FOUND`.
pub fn pdf_service(dir: &Path) -> Router {
    let files = ServeDir::new(dir).not_found_service(pdf_not_found.into_service());
    Router::new().fallback_service(SetResponseHeader::overriding(
        files,
        CONTENT_DISPOSITION,
        HeaderValue::from_static("inline"),
    ))
}

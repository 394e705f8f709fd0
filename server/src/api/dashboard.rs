//! Embedded dashboard
//!
//! `server/web/` is compiled into the binary. `/` serves `index.html`; any
//! other path that names an embedded file is served with a guessed MIME type.
//! Everything else is a JSON 404.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use include_dir::{include_dir, Dir};
use serde_json::json;

static WEB_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/web");

const INDEX_FILE: &str = "index.html";

/// GET / - dashboard page
pub async fn index() -> Response {
    serve_embedded(INDEX_FILE)
}

/// Fallback: embedded asset lookup, else 404.
pub async fn static_or_not_found(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    if path.is_empty() {
        return serve_embedded(INDEX_FILE);
    }
    serve_embedded(path)
}

fn serve_embedded(path: &str) -> Response {
    match WEB_DIR.get_file(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                file.contents(),
            )
                .into_response()
        }
        None => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

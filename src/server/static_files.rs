//! Static file serving: the embedded frontend and generated sheets.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use include_dir::{Dir, include_dir};
use std::path::Component;
use std::sync::Arc;

use super::state::AppState;

/// Embedded frontend files.
static FRONTEND: Dir = include_dir!("$CARGO_MANIFEST_DIR/frontend");

/// Serve index.html with a cache-busting parameter on asset links.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match FRONTEND.get_file("index.html") {
        Some(file) => {
            let contents = String::from_utf8_lossy(file.contents());
            let cache_bust = format!("?v={}", state.boot_time);
            let busted = contents
                .replace(".js\"", &format!(".js{}\"", cache_bust))
                .replace(".css\"", &format!(".css{}\"", cache_bust));
            Html(busted).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Frontend not built").into_response(),
    }
}

/// Serve frontend assets.
pub async fn asset_handler(Path(path): Path<String>) -> impl IntoResponse {
    let clean_path = path.split('?').next().unwrap_or(&path);
    let file_path = format!("assets/{}", clean_path);

    match FRONTEND.get_file(&file_path) {
        Some(file) => {
            let mime = mime_guess::from_path(clean_path)
                .first_or_octet_stream()
                .to_string();
            (
                [
                    (header::CONTENT_TYPE, mime),
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                file.contents().to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}

/// Whether `path` names a file directly inside the output directory.
fn is_plain_file_name(path: &str) -> bool {
    let mut components = std::path::Path::new(path).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// GET /static/{file} - download a generated sheet as an attachment.
pub async fn download_handler(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Response {
    // Links built by the frontend carry a `generated_cards/` prefix.
    let name = path.strip_prefix("generated_cards/").unwrap_or(&path);
    if !is_plain_file_name(name) {
        return (StatusCode::BAD_REQUEST, "Invalid file name").into_response();
    }

    let file_path = state.generator.sink().dir().join(name);
    match tokio::fs::read(&file_path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(name).first_or_octet_stream().to_string();
            (
                [
                    (header::CONTENT_TYPE, mime),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", name),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}
